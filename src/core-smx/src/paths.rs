//! Artifact naming and public URL resolution.

use url::Url;

use crate::errors::{Result, SitemapGenError};

/// Basename of the sitemap index document.
pub const INDEX_BASENAME: &str = "sitemap-index.xml";

/// Basename of the chunk document at `index` (0-based). Stable across runs
/// with the same input size, and distinct for every chunk of one run.
pub fn chunk_basename(index: usize) -> String {
    format!("sitemap-{}.xml", index)
}

/// Name of the gzip sibling of an artifact.
pub fn gz_name(basename: &str) -> String {
    format!("{}.gz", basename)
}

/// Resolves artifact basenames to the public URLs advertised in the index.
///
/// The base URL may carry a path prefix (`https://cdn.example.com/static`);
/// on-disk placement is a separate concern handled by the sink.
#[derive(Debug, Clone)]
pub struct ArtifactLocator {
    base: Url,
    reference_compressed: bool,
}

impl ArtifactLocator {
    /// Validates the hostname and prepares it for joining.
    ///
    /// # Errors
    ///
    /// Returns an error if the hostname is empty, relative, or cannot serve as
    /// a base URL.
    pub fn new(hostname: &str, reference_compressed: bool) -> Result<Self> {
        if hostname.trim().is_empty() {
            return Err(SitemapGenError::MissingHostname);
        }

        // Without a trailing slash, joining would drop the last path segment.
        let normalized = if hostname.ends_with('/') {
            hostname.to_string()
        } else {
            format!("{}/", hostname)
        };

        let base = Url::parse(&normalized)?;
        if base.cannot_be_a_base() {
            return Err(SitemapGenError::UnusableHostname(hostname.to_string()));
        }

        Ok(Self { base, reference_compressed })
    }

    /// Public URL for an artifact basename.
    ///
    /// When only compressed artifacts are persisted, the advertised URL carries
    /// the `.gz` suffix; otherwise it names the plain `.xml` file. The same
    /// convention applies to chunk and index documents.
    pub fn public_url(&self, basename: &str) -> String {
        if self.reference_compressed {
            format!("{}{}", self.base, gz_name(basename))
        } else {
            format!("{}{}", self.base, basename)
        }
    }
}
