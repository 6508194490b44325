//! zlib compression, consumed as a black box by the layering pipeline.

use crate::error::{IntiError, Result};
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress data as a zlib stream at the given level (0-9).
pub fn compress(data: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
    encoder
        .write_all(data)
        .map_err(|e| IntiError::CompressionError(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| IntiError::CompressionError(e.to_string()))
}

/// Decompress a zlib stream and verify it inflates to exactly
/// `expected_size` bytes, the size the container's length prefix declared.
pub fn decompress(data: &[u8], expected_size: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(expected_size);
    ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|e| IntiError::DecompressionError(e.to_string()))?;
    if out.len() != expected_size {
        return Err(IntiError::SizeMismatch {
            declared: expected_size,
            actual: out.len(),
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let data = b"Hello, World! This is a test of compression.";
        let compressed = compress(data, 9).unwrap();
        let decompressed = decompress(&compressed, data.len()).unwrap();
        assert_eq!(data, &decompressed[..]);
    }

    #[test]
    fn test_roundtrip_empty() {
        let compressed = compress(b"", 9).unwrap();
        let decompressed = decompress(&compressed, 0).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn test_size_mismatch_is_rejected() {
        let compressed = compress(b"abcdef", 9).unwrap();
        let err = decompress(&compressed, 5).unwrap_err();
        assert!(matches!(
            err,
            IntiError::SizeMismatch { declared: 5, actual: 6 }
        ));
    }

    #[test]
    fn test_garbage_input_fails() {
        assert!(decompress(b"\xDE\xAD\xBE\xEF", 16).is_err());
    }

    #[test]
    fn test_large_data() {
        let data: Vec<u8> = (0..100_000).map(|i| (i % 256) as u8).collect();
        let compressed = compress(&data, 9).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed, data.len()).unwrap(), data);
    }
}
