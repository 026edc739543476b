//! # Sitemap Generation Library
//!
//! A Rust library for generating chunked sitemap XML files and a sitemap
//! index from a collection of URL records.
//!
//! The pipeline turns an unbounded sequence of URL entries into a bounded set
//! of size-capped sitemap documents plus one index document referencing every
//! chunk, gzip-compressing each artifact before it reaches storage.
//!
//! ## Features
//!
//! - Split any entry sequence into sitemap files of at most `limit` entries
//! - Preserve input order within and across chunk files
//! - Emit a sitemap-index document referencing every chunk, in creation order
//! - Gzip every artifact, optionally keeping plain `.xml` siblings
//! - Persist through a pluggable [`Sink`] (filesystem implementation provided)
//! - Parse generated documents back for verification
//!
//! ## Examples
//!
//! ### Basic Usage
//!
//! ```no_run
//! use core_smx::{FileSink, SitemapConfig, SitemapEntry, generate_sitemap};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let entries = vec![SitemapEntry {
//!         url: "https://example.com/".to_string(),
//!         lastmod: None,
//!         changefreq: None,
//!         priority: None,
//!     }];
//!
//!     let config = SitemapConfig::builder()
//!         .hostname("https://example.com".to_string())
//!         .output_dir("public".into())
//!         .build();
//!
//!     let sink = FileSink::new("public");
//!     let report = generate_sitemap(entries, &config, &sink).await?;
//!     println!("wrote {} sitemap chunk(s)", report.chunks);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod common;

mod chunker;
mod compress;
mod config;
mod entry;
mod errors;
mod index;
mod parse;
mod paths;
mod sink;
mod sitemap_gen;
mod xml;

// Public API re-exports
pub use config::{DEFAULT_CONCURRENCY, DEFAULT_LIMIT, SitemapConfig, SitemapConfigBuilder};
pub use errors::{Result, SitemapGenError};
pub use sitemap_gen::{GenerationReport, generate_sitemap};

// Pipeline stages for callers driving persistence themselves
pub use chunker::{Chunk, ChunkWriter};
pub use index::{ChunkRef, IndexBuilder, SitemapIndex};
pub use sink::{FileSink, Sink};

// Additional exports for advanced usage
pub use common::logging::setup_logging;
pub use compress::{compress, compress_string, decompress, decompress_to_string};
pub use entry::{ChangeFrequency, SitemapEntry, format_lastmod};
pub use parse::{SitemapDocument, parse_document, parse_sitemap_index, parse_urlset};
pub use paths::{ArtifactLocator, INDEX_BASENAME, chunk_basename, gz_name};
pub use xml::{SITEMAP_XMLNS, write_sitemap_index, write_urlset};
