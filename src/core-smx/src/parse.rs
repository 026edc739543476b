//! Read-back parsers for generated sitemap documents.
//!
//! Supports both document kinds produced by the pipeline:
//!
//! ```xml
//! <urlset>
//!   <url>
//!     <loc>https://example.com/page</loc>
//!     <lastmod>2024-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```
//!
//! and the `<sitemapindex>` counterpart. An empty document parses to an empty
//! collection: a run over zero entries legitimately produces an empty index.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::entry::SitemapEntry;
use crate::errors::{Result, SitemapGenError};
use crate::index::ChunkRef;

/// A parsed sitemap artifact.
#[derive(Debug, Clone, PartialEq)]
pub enum SitemapDocument {
    /// A chunk document: the URL entries it covers, in document order.
    UrlSet(Vec<SitemapEntry>),
    /// An index document: the chunk references it lists, in document order.
    Index(Vec<ChunkRef>),
}

/// Which element's text content is being read.
enum Field {
    Loc,
    Lastmod,
    Changefreq,
    Priority,
}

/// Parses any generated sitemap artifact, dispatching on the root element.
///
/// # Errors
///
/// Returns an error if the XML is malformed or the root element is neither
/// `<urlset>` nor `<sitemapindex>`.
pub fn parse_document(xml: &str) -> Result<SitemapDocument> {
    match root_element(xml)?.as_str() {
        "urlset" => Ok(SitemapDocument::UrlSet(parse_urlset(xml)?)),
        "sitemapindex" => Ok(SitemapDocument::Index(parse_sitemap_index(xml)?)),
        other => Err(SitemapGenError::SitemapParse(format!(
            "Unsupported root element: <{}>",
            other
        ))),
    }
}

/// Parses a sitemap chunk document back into its URL entries.
///
/// # Errors
///
/// Returns an error if the XML is malformed or a metadata value cannot be
/// interpreted.
pub fn parse_urlset(xml: &str) -> Result<Vec<SitemapEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current_loc: Option<String> = None;
    let mut current_lastmod: Option<DateTime<Utc>> = None;
    let mut current_changefreq = None;
    let mut current_priority: Option<f32> = None;
    let mut active: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"url" => {
                    // Start of a new URL entry
                    current_loc = None;
                    current_lastmod = None;
                    current_changefreq = None;
                    current_priority = None;
                }
                b"loc" => active = Some(Field::Loc),
                b"lastmod" => active = Some(Field::Lastmod),
                b"changefreq" => active = Some(Field::Changefreq),
                b"priority" => active = Some(Field::Priority),
                _ => {}
            },
            Ok(Event::Text(text)) => {
                let value = text
                    .unescape()
                    .map_err(|e| SitemapGenError::SitemapParse(format!("Invalid XML: {}", e)))?
                    .to_string();
                match active {
                    Some(Field::Loc) => current_loc = Some(value),
                    Some(Field::Lastmod) => current_lastmod = Some(parse_lastmod(&value)?),
                    Some(Field::Changefreq) => current_changefreq = Some(value.parse()?),
                    Some(Field::Priority) => {
                        current_priority = Some(value.parse::<f32>().map_err(|e| {
                            SitemapGenError::SitemapParse(format!(
                                "Invalid <priority> value '{}': {}",
                                value, e
                            ))
                        })?)
                    }
                    None => {}
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"url" {
                    // End of URL entry, save it
                    if let Some(loc) = current_loc.take() {
                        entries.push(SitemapEntry {
                            url: loc,
                            lastmod: current_lastmod.take(),
                            changefreq: current_changefreq.take(),
                            priority: current_priority.take(),
                        });
                    }
                }
                active = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SitemapGenError::SitemapParse(format!(
                    "XML parsing error: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(entries)
}

/// Parses a sitemap index document back into its chunk references.
///
/// # Errors
///
/// Returns an error if the XML is malformed or a `<lastmod>` value cannot be
/// interpreted.
pub fn parse_sitemap_index(xml: &str) -> Result<Vec<ChunkRef>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut refs = Vec::new();
    let mut current_loc: Option<String> = None;
    let mut current_lastmod: Option<DateTime<Utc>> = None;
    let mut active: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"sitemap" => {
                    current_loc = None;
                    current_lastmod = None;
                }
                b"loc" => active = Some(Field::Loc),
                b"lastmod" => active = Some(Field::Lastmod),
                _ => {}
            },
            Ok(Event::Text(text)) => {
                let value = text
                    .unescape()
                    .map_err(|e| SitemapGenError::SitemapParse(format!("Invalid XML: {}", e)))?
                    .to_string();
                match active {
                    Some(Field::Loc) => current_loc = Some(value),
                    Some(Field::Lastmod) => current_lastmod = Some(parse_lastmod(&value)?),
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"sitemap" {
                    if let Some(loc) = current_loc.take() {
                        refs.push(ChunkRef {
                            loc,
                            lastmod: current_lastmod.take(),
                        });
                    }
                }
                active = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(SitemapGenError::SitemapParse(format!(
                    "XML parsing error: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(refs)
}

/// Accepts both `<lastmod>` forms the writers emit: RFC 3339 timestamps and
/// bare dates (interpreted as UTC midnight).
fn parse_lastmod(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| SitemapGenError::SitemapParse(format!("Invalid <lastmod> value '{}': {}", raw, e)))
}

fn root_element(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => {
                return Err(SitemapGenError::SitemapParse(
                    "Document has no root element".to_string(),
                ));
            }
            Err(e) => {
                return Err(SitemapGenError::SitemapParse(format!(
                    "XML parsing error: {}",
                    e
                )));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::entry::ChangeFrequency;

    #[test]
    fn test_parse_urlset() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url>
    <loc>https://example.com/page1</loc>
    <lastmod>2024-01-01</lastmod>
    <changefreq>daily</changefreq>
    <priority>0.8</priority>
  </url>
  <url>
    <loc>https://example.com/page2</loc>
  </url>
</urlset>"#;

        let entries = parse_urlset(xml).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].url, "https://example.com/page1");
        assert_eq!(entries[0].lastmod, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(entries[0].changefreq, Some(ChangeFrequency::Daily));
        assert_eq!(entries[0].priority, Some(0.8));
        assert_eq!(entries[1].url, "https://example.com/page2");
        assert_eq!(entries[1].lastmod, None);
    }

    #[test]
    fn test_parse_urlset_with_timestamp_lastmod() {
        let xml = r#"<urlset><url><loc>https://example.com/</loc><lastmod>2024-05-01T12:30:00Z</lastmod></url></urlset>"#;

        let entries = parse_urlset(xml).unwrap();
        assert_eq!(
            entries[0].lastmod,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_urlset_unescapes_text() {
        let xml = r#"<urlset><url><loc>https://example.com/?a=1&amp;b=2</loc></url></urlset>"#;
        let entries = parse_urlset(xml).unwrap();
        assert_eq!(entries[0].url, "https://example.com/?a=1&b=2");
    }

    #[test]
    fn test_parse_empty_urlset() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
</urlset>"#;

        assert!(parse_urlset(xml).unwrap().is_empty());
    }

    #[test]
    fn test_parse_urlset_rejects_bad_lastmod() {
        let xml = r#"<urlset><url><loc>https://example.com/</loc><lastmod>yesterday</lastmod></url></urlset>"#;
        assert!(parse_urlset(xml).is_err());
    }

    #[test]
    fn test_parse_sitemap_index() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap>
    <loc>https://example.com/sitemap-0.xml.gz</loc>
    <lastmod>2024-01-01</lastmod>
  </sitemap>
  <sitemap>
    <loc>https://example.com/sitemap-1.xml.gz</loc>
  </sitemap>
</sitemapindex>"#;

        let refs = parse_sitemap_index(xml).unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].loc, "https://example.com/sitemap-0.xml.gz");
        assert_eq!(refs[0].lastmod, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(refs[1].loc, "https://example.com/sitemap-1.xml.gz");
        assert_eq!(refs[1].lastmod, None);
    }

    #[test]
    fn test_parse_document_dispatches_on_root() {
        let urlset = r#"<urlset><url><loc>https://example.com/</loc></url></urlset>"#;
        assert!(matches!(parse_document(urlset), Ok(SitemapDocument::UrlSet(entries)) if entries.len() == 1));

        let index = r#"<sitemapindex><sitemap><loc>https://example.com/sitemap-0.xml.gz</loc></sitemap></sitemapindex>"#;
        assert!(matches!(parse_document(index), Ok(SitemapDocument::Index(refs)) if refs.len() == 1));
    }

    #[test]
    fn test_parse_document_rejects_unknown_root() {
        assert!(parse_document("<feed></feed>").is_err());
        assert!(parse_document("").is_err());
    }
}
