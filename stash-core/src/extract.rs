//! Writing archive entries back out as files
//!
//! Entry names are stored exactly as they were added, which is often a full
//! path from when the files were discovered. Extraction keeps only the final
//! path component so nothing can be written outside the destination.

use crate::archive::Archive;
use crate::constants::BufferConfig;
use crate::error::StashError;
use crate::file;
use std::fs;
use std::path::{Component, Path, PathBuf};
#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Reduce an entry name to a bare file name
///
/// Both `/` and `\` count as separators regardless of platform. The last
/// component must be a single plain path component: empty names, `.`, `..`
/// and anything containing `:` (drive prefixes) are rejected.
pub fn sanitize_entry_name(name: &str) -> Result<&str, StashError> {
    let bare = name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();
    if bare.contains(':') {
        return Err(StashError::UnsafeEntryName(name.to_string()));
    }

    let mut components = Path::new(bare).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(bare),
        _ => Err(StashError::UnsafeEntryName(name.to_string())),
    }
}

/// Write every entry of `archive` into `destination`
///
/// The destination is created if missing. Entries are written in order and
/// the first failure stops extraction; files already written stay on disk.
/// Entries that reduce to the same file name overwrite each other, the last
/// one wins.
pub fn extract(
    archive: &Archive,
    destination: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, StashError> {
    let destination = destination.as_ref();
    fs::create_dir_all(destination)?;

    let mut written = Vec::with_capacity(archive.len());
    for entry in archive.entries() {
        let bare = sanitize_entry_name(&entry.name)?;

        #[cfg(feature = "logging")]
        if bare != entry.name {
            warn!("Entry {:?} extracted as {:?}", entry.name, bare);
        }

        let path = destination.join(bare);
        fs::write(&path, &entry.content)?;

        #[cfg(feature = "logging")]
        debug!("Wrote {} ({} bytes)", path.display(), entry.len());

        written.push(path);
    }

    Ok(written)
}

/// Load an archive file and extract it into `destination`
pub fn extract_file(
    path: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    config: BufferConfig,
) -> Result<Vec<PathBuf>, StashError> {
    let archive = file::load(path, config)?;
    extract(&archive, destination)
}
