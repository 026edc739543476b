//! Splits an entry sequence into sealed, size-capped sitemap chunks.

use chrono::{DateTime, Utc};

use crate::config::SitemapConfig;
use crate::entry::SitemapEntry;
use crate::errors::Result;
use crate::index::IndexBuilder;
use crate::paths::{ArtifactLocator, chunk_basename};

/// One sealed sitemap document: a bounded slice of the input entries.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// 0-based position in creation order
    pub index: usize,
    /// Entries covered by this chunk, in input order
    pub entries: Vec<SitemapEntry>,
    /// Basename of the uncompressed document
    pub filename: String,
    /// URL under which the document is served
    pub public_url: String,
    /// Representative last-modified timestamp, as listed in the index
    pub lastmod: DateTime<Utc>,
}

/// Lazily seals chunks of at most `limit` entries from an entry iterator.
///
/// Chunk indices are contiguous starting at 0, assigned in creation order, and
/// every sealed chunk is registered with the writer-owned [`IndexBuilder`]
/// before it is handed downstream. The sequence is finite and not restartable.
///
/// # Examples
///
/// ```
/// use core_smx::{ChunkWriter, SitemapConfig, SitemapEntry};
///
/// let entries = (0..3).map(|i| SitemapEntry {
///     url: format!("https://example.com/page-{i}"),
///     lastmod: None,
///     changefreq: None,
///     priority: None,
/// });
///
/// let config = SitemapConfig::builder()
///     .limit(2)
///     .hostname("https://example.com".to_string())
///     .output_dir("public".into())
///     .build();
///
/// let chunks: Vec<_> = ChunkWriter::new(entries, &config).unwrap().collect();
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].entries.len(), 2);
/// assert_eq!(chunks[1].entries.len(), 1);
/// ```
pub struct ChunkWriter<I> {
    entries: I,
    limit: usize,
    next_index: usize,
    entries_seen: usize,
    locator: ArtifactLocator,
    index: IndexBuilder,
    run_started: DateTime<Utc>,
}

impl<I: Iterator<Item = SitemapEntry>> ChunkWriter<I> {
    /// Creates a writer over `entries`.
    ///
    /// # Errors
    ///
    /// Configuration problems (zero limit, unusable hostname, missing output
    /// destination) surface here, before any chunk is produced or persisted.
    pub fn new(entries: I, config: &SitemapConfig) -> Result<Self> {
        let locator = config.validate()?;
        Ok(Self {
            entries,
            limit: config.limit,
            next_index: 0,
            entries_seen: 0,
            locator,
            index: IndexBuilder::new(),
            run_started: Utc::now(),
        })
    }

    /// The URL resolver derived from the validated configuration.
    pub fn locator(&self) -> &ArtifactLocator {
        &self.locator
    }

    /// Releases the index builder and the total entry count.
    ///
    /// Call after the iterator is exhausted: the registered references are
    /// exactly the chunks sealed so far.
    pub fn into_parts(self) -> (IndexBuilder, usize) {
        (self.index, self.entries_seen)
    }
}

impl<I: Iterator<Item = SitemapEntry>> Iterator for ChunkWriter<I> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Chunk> {
        let mut entries = Vec::new();
        while entries.len() < self.limit {
            match self.entries.next() {
                Some(entry) => entries.push(entry),
                None => break,
            }
        }

        // Exhausted input with nothing buffered: no trailing empty chunk.
        if entries.is_empty() {
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;
        self.entries_seen += entries.len();

        let lastmod = entries
            .iter()
            .filter_map(|entry| entry.lastmod)
            .max()
            .unwrap_or(self.run_started);
        let filename = chunk_basename(index);
        let public_url = self.locator.public_url(&filename);

        // Sealed chunks are registered before they are handed downstream.
        self.index.register(public_url.clone(), Some(lastmod));

        Some(Chunk {
            index,
            entries,
            filename,
            public_url,
            lastmod,
        })
    }
}
