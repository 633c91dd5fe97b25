//! Moving archives between memory and disk

use crate::archive::Archive;
use crate::buffer::ByteReader;
use crate::compression;
use crate::constants::BufferConfig;
use crate::error::StashError;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing::info;

fn packed_bytes(archive: &mut Archive) -> Result<&[u8], StashError> {
    archive.pack()?;
    archive
        .data()
        .map(|b| b.as_ref())
        .ok_or_else(|| StashError::Format("archive has no packed data after pack".into()))
}

/// Write a sealed archive to `directory/filename`, packing it first if needed
///
/// The directory must already exist. Returns the path written.
pub fn save(
    archive: &mut Archive,
    directory: impl AsRef<Path>,
    filename: &str,
) -> Result<PathBuf, StashError> {
    let path = directory.as_ref().join(filename);
    let data = packed_bytes(archive)?;
    fs::write(&path, data)?;

    #[cfg(feature = "logging")]
    info!("Saved archive to {} ({} bytes)", path.display(), data.len());

    Ok(path)
}

/// Like [`save`], but runs the packed bytes through zlib before writing
pub fn save_compressed(
    archive: &mut Archive,
    directory: impl AsRef<Path>,
    filename: &str,
) -> Result<PathBuf, StashError> {
    let path = directory.as_ref().join(filename);
    let data = compression::compress(packed_bytes(archive)?)?;
    fs::write(&path, &data)?;

    #[cfg(feature = "logging")]
    info!(
        "Saved compressed archive to {} ({} bytes)",
        path.display(),
        data.len()
    );

    Ok(path)
}

/// Read an archive file and decode it
pub fn load(path: impl AsRef<Path>, config: BufferConfig) -> Result<Archive, StashError> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    #[cfg(feature = "logging")]
    info!("Loaded {} ({} bytes)", path.display(), data.len());

    Archive::unpack(ByteReader::with_config(data, config))
}

/// Read a zlib-compressed archive file, inflate it and decode it
pub fn load_compressed(
    path: impl AsRef<Path>,
    config: BufferConfig,
) -> Result<Archive, StashError> {
    let path = path.as_ref();
    let compressed = fs::read(path)?;
    let data = compression::decompress(&compressed)?;

    #[cfg(feature = "logging")]
    info!(
        "Loaded {} ({} bytes, {} inflated)",
        path.display(),
        compressed.len(),
        data.len()
    );

    Archive::unpack(ByteReader::with_config(data, config))
}
