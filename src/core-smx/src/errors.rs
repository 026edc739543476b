//! Error types for the sitemap generation library.

use thiserror::Error;

/// Main error type for sitemap generation operations.
#[derive(Debug, Error)]
pub enum SitemapGenError {
    /// Chunk capacity must be at least one entry
    #[error("Chunk capacity must be positive, got: {0}")]
    InvalidLimit(usize),

    /// Public URLs cannot be resolved without a base hostname
    #[error("Configuration is missing a hostname to resolve public URLs against")]
    MissingHostname,

    /// Hostname parses but cannot serve as a base URL
    #[error("Hostname cannot be used as a base URL: {0}")]
    UnusableHostname(String),

    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Generated artifacts need an output destination
    #[error("Configuration is missing an output destination")]
    MissingOutputDir,

    /// Sink or compressor failure mid-write
    #[error("Failed writing artifact stream: {0}")]
    Io(#[from] std::io::Error),

    /// XML serialization failed
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Sitemap document parsing failed
    #[error("Sitemap parsing failed: {0}")]
    SitemapParse(String),

    /// Artifact bytes are not UTF-8 text
    #[error("Artifact is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Type alias for Result with SitemapGenError
pub type Result<T> = std::result::Result<T, SitemapGenError>;
