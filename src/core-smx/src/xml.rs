//! Sitemap document writers.
//!
//! Emits standard sitemap XML: chunk files use a `<urlset>` root with one
//! `<url>` element per entry, the index uses a `<sitemapindex>` root with one
//! `<sitemap>` element per chunk.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::entry::{SitemapEntry, format_lastmod};
use crate::errors::Result;
use crate::index::SitemapIndex;

/// XML namespace shared by sitemap and sitemap-index documents.
pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Serializes one chunk's entries as a sitemap document.
///
/// # Errors
///
/// Returns an error if event serialization fails.
pub fn write_urlset(entries: &[SitemapEntry], lastmod_date_only: bool) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_XMLNS));
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        text_element(&mut writer, "loc", &entry.url)?;
        if let Some(lastmod) = &entry.lastmod {
            text_element(&mut writer, "lastmod", &format_lastmod(lastmod, lastmod_date_only))?;
        }
        if let Some(changefreq) = &entry.changefreq {
            text_element(&mut writer, "changefreq", changefreq.as_str())?;
        }
        if let Some(priority) = entry.priority {
            text_element(&mut writer, "priority", &format!("{:.1}", priority))?;
        }
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(writer.into_inner())
}

/// Serializes the sitemap index document referencing every chunk.
///
/// # Errors
///
/// Returns an error if event serialization fails.
pub fn write_sitemap_index(index: &SitemapIndex, lastmod_date_only: bool) -> Result<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("sitemapindex");
    root.push_attribute(("xmlns", SITEMAP_XMLNS));
    writer.write_event(Event::Start(root))?;

    for chunk_ref in &index.refs {
        writer.write_event(Event::Start(BytesStart::new("sitemap")))?;
        text_element(&mut writer, "loc", &chunk_ref.loc)?;
        if let Some(lastmod) = &chunk_ref.lastmod {
            text_element(&mut writer, "lastmod", &format_lastmod(lastmod, lastmod_date_only))?;
        }
        writer.write_event(Event::End(BytesEnd::new("sitemap")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("sitemapindex")))?;
    Ok(writer.into_inner())
}

fn text_element<W: std::io::Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
