//! Constants and per-instance configuration for the stash wire format

use serde::{Deserialize, Serialize};

/// Width of a short integer in bytes
pub const SHORT_SIZE: usize = 2;

/// Width of a standard integer in bytes
pub const INT_SIZE: usize = 4;

/// Width of a long integer in bytes
pub const LONG_SIZE: usize = 8;

/// Width of the length prefix in front of every string and blob
pub const LENGTH_PREFIX_SIZE: usize = INT_SIZE;

/// Smallest possible blob frame: an empty name and empty content
/// 4 (name length) + 0 (name) + 4 (content length) + 0 (content) = 8 bytes
pub const MIN_BLOB_FRAME_SIZE: usize = 2 * LENGTH_PREFIX_SIZE;

/// Smallest possible archive frame: an empty name and a zero count
pub const MIN_ARCHIVE_FRAME_SIZE: usize = LENGTH_PREFIX_SIZE + INT_SIZE;

/// Byte order used for every fixed-width integer of one buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Least-significant byte first
    #[default]
    Little,
    /// Most-significant byte first
    Big,
}

/// Text encoding applied to archive and entry names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16, code units in the buffer's byte order
    Utf16,
    /// 7-bit ASCII
    Ascii,
}

/// Configuration fixed for the lifetime of a builder, reader or archive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Byte order of fixed-width integers
    pub byte_order: ByteOrder,

    /// Encoding of length-prefixed strings
    pub encoding: TextEncoding,
}

impl BufferConfig {
    /// Create a configuration from its parts
    pub const fn new(byte_order: ByteOrder, encoding: TextEncoding) -> Self {
        Self {
            byte_order,
            encoding,
        }
    }

    /// Set the byte order
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Set the text encoding
    pub const fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Check if integers are written most-significant byte first
    pub const fn is_big_endian(&self) -> bool {
        matches!(self.byte_order, ByteOrder::Big)
    }
}
