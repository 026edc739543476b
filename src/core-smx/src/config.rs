//! Configuration options for a sitemap generation run.

use std::path::PathBuf;

use crate::errors::{Result, SitemapGenError};
use crate::paths::ArtifactLocator;

/// Default maximum number of URL entries per sitemap chunk file.
pub const DEFAULT_LIMIT: usize = 50_000;

/// Default number of sealed chunks compressed & persisted concurrently.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Configuration for one generation run. Read-only while the run is active.
#[derive(Debug, Clone)]
pub struct SitemapConfig {
    /// Maximum number of URL entries per chunk file (default: 50 000)
    pub limit: usize,
    /// Absolute base URL under which the generated files are served
    pub hostname: String,
    /// Directory that receives the generated artifacts
    pub output_dir: PathBuf,
    /// Print dates without the time component in `<lastmod>` elements
    pub lastmod_date_only: bool,
    /// Also write a plain `.xml` sibling next to every `.xml.gz` artifact
    pub keep_uncompressed: bool,
    /// Maximum number of sealed chunks persisted concurrently (default: 4)
    pub concurrency: usize,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            hostname: String::new(),
            output_dir: PathBuf::new(),
            lastmod_date_only: false,
            keep_uncompressed: false,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl SitemapConfig {
    /// Creates a new builder for SitemapConfig.
    pub fn builder() -> SitemapConfigBuilder {
        SitemapConfigBuilder::default()
    }

    /// Checks the configuration and resolves the public URL base.
    ///
    /// Runs before any I/O: a zero limit, a missing output destination, or a
    /// hostname that cannot anchor absolute URLs all fail the run here.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for any of the conditions above.
    pub fn validate(&self) -> Result<ArtifactLocator> {
        if self.limit == 0 {
            return Err(SitemapGenError::InvalidLimit(self.limit));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(SitemapGenError::MissingOutputDir);
        }
        ArtifactLocator::new(&self.hostname, !self.keep_uncompressed)
    }
}

/// Builder for SitemapConfig.
#[derive(Debug, Clone, Default)]
pub struct SitemapConfigBuilder {
    limit: Option<usize>,
    hostname: Option<String>,
    output_dir: Option<PathBuf>,
    lastmod_date_only: bool,
    keep_uncompressed: bool,
    concurrency: Option<usize>,
}

impl SitemapConfigBuilder {
    /// Sets the maximum number of entries per chunk file.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the base URL under which the generated files are served.
    pub fn hostname(mut self, hostname: String) -> Self {
        self.hostname = Some(hostname);
        self
    }

    /// Sets the directory that receives the generated artifacts.
    pub fn output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    /// Prints dates without the time component in `<lastmod>` elements.
    pub fn lastmod_date_only(mut self, date_only: bool) -> Self {
        self.lastmod_date_only = date_only;
        self
    }

    /// Also writes a plain `.xml` sibling next to every `.xml.gz` artifact.
    pub fn keep_uncompressed(mut self, keep: bool) -> Self {
        self.keep_uncompressed = keep;
        self
    }

    /// Sets how many sealed chunks may be persisted concurrently.
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    /// Builds the SitemapConfig.
    pub fn build(self) -> SitemapConfig {
        SitemapConfig {
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            hostname: self.hostname.unwrap_or_default(),
            output_dir: self.output_dir.unwrap_or_default(),
            lastmod_date_only: self.lastmod_date_only,
            keep_uncompressed: self.keep_uncompressed,
            concurrency: self.concurrency.unwrap_or(DEFAULT_CONCURRENCY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SitemapConfig::default();
        assert_eq!(config.limit, 50_000);
        assert_eq!(config.concurrency, 4);
        assert!(!config.lastmod_date_only);
        assert!(!config.keep_uncompressed);
    }

    #[test]
    fn test_builder_sets_all_fields() {
        let config = SitemapConfig::builder()
            .limit(100)
            .hostname("https://example.com".to_string())
            .output_dir(PathBuf::from("public"))
            .lastmod_date_only(true)
            .keep_uncompressed(true)
            .concurrency(8)
            .build();

        assert_eq!(config.limit, 100);
        assert_eq!(config.hostname, "https://example.com");
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert!(config.lastmod_date_only);
        assert!(config.keep_uncompressed);
        assert_eq!(config.concurrency, 8);
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = SitemapConfig::builder()
            .limit(0)
            .hostname("https://example.com".to_string())
            .output_dir(PathBuf::from("public"))
            .build();

        assert!(matches!(config.validate(), Err(SitemapGenError::InvalidLimit(0))));
    }

    #[test]
    fn test_validate_rejects_missing_hostname() {
        let config = SitemapConfig::builder().output_dir(PathBuf::from("public")).build();
        assert!(matches!(config.validate(), Err(SitemapGenError::MissingHostname)));
    }

    #[test]
    fn test_validate_rejects_missing_output_dir() {
        let config = SitemapConfig::builder().hostname("https://example.com".to_string()).build();
        assert!(matches!(config.validate(), Err(SitemapGenError::MissingOutputDir)));
    }
}
