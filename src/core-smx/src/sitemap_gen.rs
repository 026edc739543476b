//! The generation pipeline: chunk, compress, persist, then index.

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::chunker::{Chunk, ChunkWriter};
use crate::compress::compress;
use crate::config::SitemapConfig;
use crate::entry::SitemapEntry;
use crate::errors::Result;
use crate::paths::{INDEX_BASENAME, gz_name};
use crate::sink::Sink;
use crate::xml;

/// Summary of one completed generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Total URL entries consumed
    pub entries: usize,
    /// Number of chunk documents produced
    pub chunks: usize,
    /// Public URL of the sitemap index document
    pub index_url: String,
}

/// Generates all sitemap chunk files and the sitemap index.
///
/// Entries are assigned to chunks strictly in input order. Compression and
/// persistence of distinct sealed chunks overlap, up to `config.concurrency`
/// in flight, while entry intake continues; the index document is written only
/// after every chunk write has resolved. The index is always written, even for
/// an empty input (zero chunks).
///
/// # Errors
///
/// Configuration errors surface before any I/O. Any chunk write failure aborts
/// the run; the index is then never finalized nor persisted.
///
/// # Examples
///
/// ```no_run
/// # use core_smx::{generate_sitemap, FileSink, SitemapConfig, SitemapEntry};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let entries = vec![SitemapEntry {
///     url: "https://example.com/".to_string(),
///     lastmod: None,
///     changefreq: None,
///     priority: None,
/// }];
///
/// let config = SitemapConfig::builder()
///     .hostname("https://example.com".to_string())
///     .output_dir("public".into())
///     .build();
///
/// let sink = FileSink::new("public");
/// let report = generate_sitemap(entries, &config, &sink).await?;
/// println!("{} chunk(s), index at {}", report.chunks, report.index_url);
/// # Ok(())
/// # }
/// ```
pub async fn generate_sitemap<I, S>(entries: I, config: &SitemapConfig, sink: &S) -> Result<GenerationReport>
where
    I: IntoIterator<Item = SitemapEntry>,
    S: Sink + ?Sized,
{
    let mut writer = ChunkWriter::new(entries.into_iter(), config)?;
    let index_url = writer.locator().public_url(INDEX_BASENAME);

    // Intake stays sequential; persistence of sealed chunks overlaps. The
    // collect below is the barrier the index write must stay behind.
    stream::iter(writer.by_ref())
        .map(|chunk| persist_chunk(chunk, config, sink))
        .buffered(config.concurrency.max(1))
        .try_collect::<Vec<()>>()
        .await?;

    let (builder, entry_count) = writer.into_parts();
    let chunk_count = builder.len();
    let index = builder.finalize();

    let document = xml::write_sitemap_index(&index, config.lastmod_date_only)?;
    if config.keep_uncompressed {
        sink.write(INDEX_BASENAME, &document).await?;
    }
    sink.write(&gz_name(INDEX_BASENAME), &compress(&document)?).await?;

    tracing::info!(
        "Generated {} chunk(s) covering {} URL(s); index at '{}'",
        chunk_count,
        entry_count,
        index_url
    );

    Ok(GenerationReport {
        entries: entry_count,
        chunks: chunk_count,
        index_url,
    })
}

async fn persist_chunk<S: Sink + ?Sized>(chunk: Chunk, config: &SitemapConfig, sink: &S) -> Result<()> {
    let document = xml::write_urlset(&chunk.entries, config.lastmod_date_only)?;

    if config.keep_uncompressed {
        sink.write(&chunk.filename, &document).await?;
    }
    sink.write(&gz_name(&chunk.filename), &compress(&document)?).await?;

    tracing::debug!(
        "[chunk: {}] Persisted {} entries as '{}'",
        chunk.index,
        chunk.entries.len(),
        chunk.filename
    );
    Ok(())
}
