//! Archive frame encoding and the [`Archive`] container
//!
//! Wire layout, integers in the configured byte order:
//!
//! ```text
//! [name length: u32][name bytes]
//! [entry count: u32]
//! repeated count times:
//!     [entry name length: u32][entry name bytes]
//!     [content length: u32][content bytes]
//! ```

use crate::buffer::{ByteBuilder, ByteReader};
use crate::constants::{BufferConfig, MIN_ARCHIVE_FRAME_SIZE, MIN_BLOB_FRAME_SIZE};
use crate::error::StashError;
use crate::types::Entry;
use bytes::Bytes;
#[cfg(feature = "logging")]
use tracing::debug;

/// Write a complete archive frame into `builder`
pub fn encode_archive(
    builder: &mut ByteBuilder,
    name: &str,
    entries: &[Entry],
) -> Result<(), StashError> {
    let count = u32::try_from(entries.len()).map_err(|_| {
        StashError::Format(format!(
            "{} entries do not fit the 4-byte entry count",
            entries.len()
        ))
    })?;

    builder.write_string(name)?;
    builder.write_uint(count);
    for entry in entries {
        builder.write_blob(&entry.name, &entry.content)?;
    }

    Ok(())
}

/// Read a complete archive frame from `reader`
///
/// The declared entry count must account for every remaining byte: a count
/// larger than the data can hold, or bytes left over after the last entry,
/// are reported as [`StashError::Format`]. A length prefix running past the
/// end surfaces as [`StashError::BufferUnderflow`].
pub fn decode_archive(reader: &mut ByteReader) -> Result<(String, Vec<Entry>), StashError> {
    let name = reader.read_string()?;
    let count = reader.read_uint()? as usize;

    let capacity = reader.remaining() / MIN_BLOB_FRAME_SIZE;
    if count > capacity {
        return Err(StashError::Format(format!(
            "declared {} entries but only {} bytes remain (room for at most {})",
            count,
            reader.remaining(),
            capacity
        )));
    }

    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        entries.push(reader.read_blob()?);
    }

    if !reader.is_exhausted() {
        return Err(StashError::Format(format!(
            "{} trailing bytes after {} declared entries",
            reader.remaining(),
            count
        )));
    }

    Ok((name, entries))
}

/// A named, ordered collection of entries and its packed bytes
///
/// An archive is sealed once its entries have been written into its buffer,
/// either by [`Archive::pack`] or by decoding existing bytes. A sealed archive
/// accepts no further entries and packing it again does nothing.
#[derive(Debug, Clone)]
pub struct Archive {
    name: String,
    entries: Vec<Entry>,
    config: BufferConfig,
    packed: Option<Bytes>,
}

impl Archive {
    /// Create an empty, unsealed archive with the default configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, BufferConfig::default())
    }

    /// Create an empty, unsealed archive with the given configuration
    pub fn with_config(name: impl Into<String>, config: BufferConfig) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            config,
            packed: None,
        }
    }

    /// Decode an archive from a reader whose cursor is still at offset 0
    pub fn unpack(mut reader: ByteReader) -> Result<Self, StashError> {
        if reader.position() != 0 {
            return Err(StashError::Format(format!(
                "unpack requires a fresh reader, cursor is at {}",
                reader.position()
            )));
        }

        let (name, entries) = decode_archive(&mut reader)?;

        #[cfg(feature = "logging")]
        debug!("Unpacked archive {:?} with {} entries", name, entries.len());

        Ok(Self {
            name,
            entries,
            config: reader.config(),
            packed: Some(reader.data().clone()),
        })
    }

    /// Decode an archive from raw bytes
    pub fn from_bytes(data: impl Into<Bytes>, config: BufferConfig) -> Result<Self, StashError> {
        Self::unpack(ByteReader::with_config(data, config))
    }

    /// Append an entry; names are not deduplicated
    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Result<(), StashError> {
        if self.is_sealed() {
            return Err(StashError::Sealed);
        }
        self.entries.push(Entry::new(name, content));
        Ok(())
    }

    /// Write the archive frame and seal the archive
    ///
    /// Does nothing if the archive is already sealed.
    pub fn pack(&mut self) -> Result<(), StashError> {
        if self.is_sealed() {
            #[cfg(feature = "logging")]
            debug!("Archive {:?} already sealed, skipping pack", self.name);
            return Ok(());
        }

        let estimate = MIN_ARCHIVE_FRAME_SIZE
            + self.name.len()
            + self
                .entries
                .iter()
                .map(|e| MIN_BLOB_FRAME_SIZE + e.name.len() + e.content.len())
                .sum::<usize>();
        let mut builder = ByteBuilder::with_capacity(estimate, self.config);
        encode_archive(&mut builder, &self.name, &self.entries)?;

        #[cfg(feature = "logging")]
        debug!(
            "Packed archive {:?}: {} entries, {} bytes",
            self.name,
            self.entries.len(),
            builder.len()
        );

        self.packed = Some(builder.freeze());
        Ok(())
    }

    /// Archive name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion (or decoding) order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consume the archive, returning its entries
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the archive has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the buffer reflects a completed pack
    pub fn is_sealed(&self) -> bool {
        self.packed.is_some()
    }

    /// Configuration used for the archive's buffer
    pub fn config(&self) -> BufferConfig {
        self.config
    }

    /// Packed bytes, present once sealed
    pub fn data(&self) -> Option<&Bytes> {
        self.packed.as_ref()
    }
}
