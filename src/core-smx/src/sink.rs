//! Durable persistence of named artifact streams.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::errors::Result;

/// Destination for generated artifacts.
///
/// A write that resolves `Ok` means the artifact is durably persisted under
/// `name`. The pipeline relies on this: the index document is only written
/// after every chunk write has resolved.
#[async_trait]
pub trait Sink: Send + Sync {
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// Sink that persists artifacts as files under a root directory.
///
/// The directory is created on first write; each file is synced before the
/// write is reported complete.
#[derive(Debug, Clone)]
pub struct FileSink {
    root: PathBuf,
}

impl FileSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Sink for FileSink {
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;

        let path = self.root.join(name);
        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(bytes).await?;
        // Not durable until the OS has flushed it.
        file.sync_all().await?;

        tracing::debug!("Persisted artifact '{}' ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_sink_creates_root_and_writes() {
        let dir = tempfile::TempDir::new().unwrap();
        let sink = FileSink::new(dir.path().join("nested/out"));

        sink.write("sitemap-0.xml", b"<urlset></urlset>").await.unwrap();

        let written = std::fs::read(dir.path().join("nested/out/sitemap-0.xml")).unwrap();
        assert_eq!(written, b"<urlset></urlset>");
    }

    #[tokio::test]
    async fn test_file_sink_overwrites_previous_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let sink = FileSink::new(dir.path());

        sink.write("sitemap-0.xml", b"old").await.unwrap();
        sink.write("sitemap-0.xml", b"new").await.unwrap();

        let written = std::fs::read(dir.path().join("sitemap-0.xml")).unwrap();
        assert_eq!(written, b"new");
    }
}
