//! The URL record consumed by the chunking pipeline.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::SitemapGenError;

/// One URL record with optional metadata. Produced by an upstream record
/// mapper; the pipeline never mutates an entry after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// The URL location
    pub url: String,
    /// Optional last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<DateTime<Utc>>,
    /// Optional expected change frequency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFrequency>,
    /// Optional crawl priority in [0.0, 1.0]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

/// How frequently a page is expected to change, per the sitemap protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// The lowercase wire form used in `<changefreq>` elements.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = SitemapGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            "never" => Ok(Self::Never),
            other => Err(SitemapGenError::SitemapParse(format!(
                "Unknown change frequency: {}",
                other
            ))),
        }
    }
}

/// Formats a timestamp for a `<lastmod>` element: W3C datetime with seconds
/// precision, or the date alone when `date_only` is set.
pub fn format_lastmod(ts: &DateTime<Utc>, date_only: bool) -> String {
    if date_only {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_lastmod() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap();
        assert_eq!(format_lastmod(&ts, false), "2024-05-01T12:30:15Z");
        assert_eq!(format_lastmod(&ts, true), "2024-05-01");
    }

    #[test]
    fn test_change_frequency_wire_form() {
        assert_eq!(ChangeFrequency::Daily.to_string(), "daily");
        assert_eq!("never".parse::<ChangeFrequency>().unwrap(), ChangeFrequency::Never);
        assert!("sometimes".parse::<ChangeFrequency>().is_err());
    }

    #[test]
    fn test_entry_from_json_record() {
        let record = r#"{
            "url": "https://example.com/docs",
            "lastmod": "2024-05-01T12:00:00Z",
            "changefreq": "weekly",
            "priority": 0.8
        }"#;

        let entry: SitemapEntry = serde_json::from_str(record).unwrap();
        assert_eq!(entry.url, "https://example.com/docs");
        assert_eq!(entry.lastmod, Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()));
        assert_eq!(entry.changefreq, Some(ChangeFrequency::Weekly));
        assert_eq!(entry.priority, Some(0.8));
    }

    #[test]
    fn test_entry_metadata_is_optional() {
        let entry: SitemapEntry = serde_json::from_str(r#"{"url": "https://example.com/"}"#).unwrap();
        assert_eq!(entry.lastmod, None);
        assert_eq!(entry.changefreq, None);
        assert_eq!(entry.priority, None);
    }
}
