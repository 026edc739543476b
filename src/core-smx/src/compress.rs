//! Gzip compression for generated artifacts.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::errors::Result;

/// Compresses a string using gzip.
pub fn compress_string(input: &str) -> Result<Vec<u8>> {
    compress(input.as_bytes())
}

/// Compresses a byte slice using gzip.
///
/// `finish` flushes the encoder and emits the gzip trailer, so output returned
/// from here is always fully decodable.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input)?;
    let compressed = encoder.finish()?;
    Ok(compressed)
}

/// Decompress gzip data as a string.
pub fn decompress_to_string(compressed: &[u8]) -> Result<String> {
    let decompressed = decompress(compressed)?;
    let result = String::from_utf8(decompressed)?;
    Ok(result)
}

/// Decompress gzip data.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(compressed);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_compress_roundtrip() {
        let input = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><urlset></urlset>";
        let compressed = compress_string(input).unwrap();
        let decompressed = decompress_to_string(&compressed).unwrap();
        assert_eq!(input, decompressed);
    }

    #[test]
    fn test_truncated_input_fails() {
        let compressed = compress_string("a document long enough to not fit one block").unwrap();
        let truncated = &compressed[..compressed.len() - 4];
        assert!(decompress(truncated).is_err());
    }
}
