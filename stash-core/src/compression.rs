//! Whole-buffer zlib (deflate) compression
//!
//! Both functions are pure: they never touch a builder's or reader's state.
//! Applying them is an explicit step on top of the archive format.

use crate::error::StashError;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::{Read, Write};

/// Compress `data` into a zlib stream
pub fn compress(data: &[u8]) -> Result<Vec<u8>, StashError> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| StashError::Compression(e.to_string()))?;
    encoder
        .finish()
        .map_err(|e| StashError::Compression(e.to_string()))
}

/// Inflate a zlib stream produced by [`compress`]
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, StashError> {
    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::with_capacity(data.len() * 2);
    decoder
        .read_to_end(&mut out)
        .map_err(|e| StashError::Compression(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_round_trip() {
        let compressed = compress(&[]).unwrap();
        assert!(!compressed.is_empty());
        assert_eq!(decompress(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_repetitive_data_shrinks() {
        let data = vec![0x42u8; 16 * 1024];
        let compressed = compress(&data).unwrap();
        assert!(compressed.len() < data.len() / 10);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_random_multi_kilobyte_round_trip() {
        use rand::RngCore;

        let mut data = vec![0u8; 64 * 1024];
        rand::thread_rng().fill_bytes(&mut data);
        assert_eq!(decompress(&compress(&data).unwrap()).unwrap(), data);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = decompress(b"definitely not zlib");
        assert!(matches!(result, Err(StashError::Compression(_))));
    }
}
