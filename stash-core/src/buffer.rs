//! Byte buffers with an append-only writer and a forward-only reader
//!
//! Writing and reading are split into two types over the same storage:
//! [`ByteBuilder`] only appends, [`ByteReader`] only consumes. A builder is
//! turned into a reader with [`ByteBuilder::into_reader`], so bytes can never
//! be appended behind an active read cursor.
//!
//! Integer widths are fixed (short = 2, int = 4, long = 8 bytes). Byte order
//! and text encoding come from the [`BufferConfig`] given at construction.

use crate::compression;
use crate::constants::{BufferConfig, ByteOrder, INT_SIZE, LONG_SIZE, SHORT_SIZE};
use crate::error::StashError;
use crate::text::{decode_text, encode_text};
use crate::types::Entry;
use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Convert a length into the 4-byte unsigned prefix used by strings and blobs
fn length_prefix(len: usize) -> Result<u32, StashError> {
    u32::try_from(len).map_err(|_| {
        StashError::Format(format!(
            "length {} does not fit the 4-byte length prefix",
            len
        ))
    })
}

/// Append-only byte buffer
#[derive(Debug, Clone, Default)]
pub struct ByteBuilder {
    buf: BytesMut,
    config: BufferConfig,
}

impl ByteBuilder {
    /// Create an empty builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration
    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            buf: BytesMut::new(),
            config,
        }
    }

    /// Create an empty builder with preallocated capacity
    pub fn with_capacity(capacity: usize, config: BufferConfig) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            config,
        }
    }

    /// Configuration of this builder
    pub fn config(&self) -> BufferConfig {
        self.config
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The written bytes (live view, not a copy)
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Append raw bytes
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buf.put_slice(data);
    }

    /// Append an unsigned short
    pub fn write_ushort(&mut self, value: u16) {
        match self.config.byte_order {
            ByteOrder::Little => self.buf.put_u16_le(value),
            ByteOrder::Big => self.buf.put_u16(value),
        }
    }

    /// Append a signed short
    pub fn write_short(&mut self, value: i16) {
        match self.config.byte_order {
            ByteOrder::Little => self.buf.put_i16_le(value),
            ByteOrder::Big => self.buf.put_i16(value),
        }
    }

    /// Append an unsigned integer
    pub fn write_uint(&mut self, value: u32) {
        match self.config.byte_order {
            ByteOrder::Little => self.buf.put_u32_le(value),
            ByteOrder::Big => self.buf.put_u32(value),
        }
    }

    /// Append a signed integer
    pub fn write_int(&mut self, value: i32) {
        match self.config.byte_order {
            ByteOrder::Little => self.buf.put_i32_le(value),
            ByteOrder::Big => self.buf.put_i32(value),
        }
    }

    /// Append an unsigned long
    pub fn write_ulong(&mut self, value: u64) {
        match self.config.byte_order {
            ByteOrder::Little => self.buf.put_u64_le(value),
            ByteOrder::Big => self.buf.put_u64(value),
        }
    }

    /// Append a signed long
    pub fn write_long(&mut self, value: i64) {
        match self.config.byte_order {
            ByteOrder::Little => self.buf.put_i64_le(value),
            ByteOrder::Big => self.buf.put_i64(value),
        }
    }

    /// Append a string frame: `[length: u32][encoded text]`
    ///
    /// Nothing is written if the text cannot be encoded.
    pub fn write_string(&mut self, value: &str) -> Result<(), StashError> {
        let encoded = encode_text(value, self.config)?;
        let len = length_prefix(encoded.len())?;
        self.write_uint(len);
        self.buf.put_slice(&encoded);
        Ok(())
    }

    /// Append a blob frame: `[string frame: name][length: u32][content]`
    pub fn write_blob(&mut self, name: &str, content: &[u8]) -> Result<(), StashError> {
        // Validate both parts before writing so a failure leaves no partial frame
        let encoded = encode_text(name, self.config)?;
        let name_len = length_prefix(encoded.len())?;
        let content_len = length_prefix(content.len())?;

        self.buf.reserve(2 * INT_SIZE + encoded.len() + content.len());
        self.write_uint(name_len);
        self.buf.put_slice(&encoded);
        self.write_uint(content_len);
        self.buf.put_slice(content);
        Ok(())
    }

    /// Compressed copy of the current content; the builder is unchanged
    pub fn compress(&self) -> Result<Vec<u8>, StashError> {
        compression::compress(&self.buf)
    }

    /// Freeze the written bytes
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }

    /// Turn the written bytes into a reader positioned at offset 0
    pub fn into_reader(self) -> ByteReader {
        let config = self.config;
        ByteReader::with_config(self.buf.freeze(), config)
    }
}

/// Forward-only reader over an immutable byte buffer
///
/// Every read consumes exactly the requested bytes or fails with
/// [`StashError::BufferUnderflow`]. A failed fixed-width read leaves the
/// cursor in place; a failed string or blob read may have consumed its
/// length prefix.
#[derive(Debug, Clone)]
pub struct ByteReader {
    data: Bytes,
    pos: usize,
    config: BufferConfig,
}

impl ByteReader {
    /// Create a reader with the default configuration
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self::with_config(data, BufferConfig::default())
    }

    /// Create a reader with the given configuration
    pub fn with_config(data: impl Into<Bytes>, config: BufferConfig) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            config,
        }
    }

    /// Configuration of this reader
    pub fn config(&self) -> BufferConfig {
        self.config
    }

    /// The whole underlying buffer, including bytes already consumed
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Current read cursor
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the read cursor
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Check if the cursor has reached the end
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.data.len()
    }

    fn take(&mut self, len: usize) -> Result<&[u8], StashError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(StashError::BufferUnderflow {
                requested: len,
                remaining,
            });
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    /// Consume `len` raw bytes without copying
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, StashError> {
        let start = self.pos;
        self.take(len)?;
        Ok(self.data.slice(start..self.pos))
    }

    /// Read an unsigned short
    pub fn read_ushort(&mut self) -> Result<u16, StashError> {
        let order = self.config.byte_order;
        let mut raw = self.take(SHORT_SIZE)?;
        Ok(match order {
            ByteOrder::Little => raw.get_u16_le(),
            ByteOrder::Big => raw.get_u16(),
        })
    }

    /// Read a signed short
    pub fn read_short(&mut self) -> Result<i16, StashError> {
        let order = self.config.byte_order;
        let mut raw = self.take(SHORT_SIZE)?;
        Ok(match order {
            ByteOrder::Little => raw.get_i16_le(),
            ByteOrder::Big => raw.get_i16(),
        })
    }

    /// Read an unsigned integer
    pub fn read_uint(&mut self) -> Result<u32, StashError> {
        let order = self.config.byte_order;
        let mut raw = self.take(INT_SIZE)?;
        Ok(match order {
            ByteOrder::Little => raw.get_u32_le(),
            ByteOrder::Big => raw.get_u32(),
        })
    }

    /// Read a signed integer
    pub fn read_int(&mut self) -> Result<i32, StashError> {
        let order = self.config.byte_order;
        let mut raw = self.take(INT_SIZE)?;
        Ok(match order {
            ByteOrder::Little => raw.get_i32_le(),
            ByteOrder::Big => raw.get_i32(),
        })
    }

    /// Read an unsigned long
    pub fn read_ulong(&mut self) -> Result<u64, StashError> {
        let order = self.config.byte_order;
        let mut raw = self.take(LONG_SIZE)?;
        Ok(match order {
            ByteOrder::Little => raw.get_u64_le(),
            ByteOrder::Big => raw.get_u64(),
        })
    }

    /// Read a signed long
    pub fn read_long(&mut self) -> Result<i64, StashError> {
        let order = self.config.byte_order;
        let mut raw = self.take(LONG_SIZE)?;
        Ok(match order {
            ByteOrder::Little => raw.get_i64_le(),
            ByteOrder::Big => raw.get_i64(),
        })
    }

    /// Read a string frame
    pub fn read_string(&mut self) -> Result<String, StashError> {
        let len = self.read_uint()? as usize;
        let config = self.config;
        let raw = self.take(len)?;
        decode_text(raw, config)
    }

    /// Read a blob frame as an [`Entry`]
    pub fn read_blob(&mut self) -> Result<Entry, StashError> {
        let name = self.read_string()?;
        let len = self.read_uint()? as usize;
        let content = self.read_bytes(len)?;
        Ok(Entry { name, content })
    }
}
