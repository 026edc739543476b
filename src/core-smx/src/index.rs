//! The sitemap index: an ordered record of every sealed chunk.

use chrono::{DateTime, Utc};

/// Reference to one chunk document, as listed in the index.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkRef {
    /// Public URL of the chunk document
    pub loc: String,
    /// Representative last-modified timestamp of the chunk
    pub lastmod: Option<DateTime<Utc>>,
}

/// Accumulates chunk references in seal order.
///
/// The pipeline registers every chunk as it is sealed and finalizes the index
/// only once all chunk artifacts have been persisted.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    refs: Vec<ChunkRef>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sealed chunk. Called once per chunk, in seal order.
    pub fn register(&mut self, loc: String, lastmod: Option<DateTime<Utc>>) {
        self.refs.push(ChunkRef { loc, lastmod });
    }

    /// Number of chunks registered so far.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Seals the index. Consuming the builder means an index is finalized at
    /// most once per run.
    pub fn finalize(self) -> SitemapIndex {
        SitemapIndex { refs: self.refs }
    }
}

/// The finished index: chunk references in creation order. May be empty when
/// the run consumed no entries.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapIndex {
    pub refs: Vec<ChunkRef>,
}
