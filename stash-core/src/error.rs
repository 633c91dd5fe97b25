//! Error types for stash operations

/// Errors that can occur while building, reading or moving archives
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StashError {
    /// Text cannot be represented in the configured encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A read asked for more bytes than remain in the buffer
    #[error("Buffer underflow: requested {requested} bytes, {remaining} remaining")]
    BufferUnderflow {
        /// The number of bytes requested.
        requested: usize,
        /// The number of bytes left after the read cursor.
        remaining: usize,
    },

    /// The archive frame is structurally inconsistent
    #[error("Format error: {0}")]
    Format(String),

    /// IO error during load, save or extract
    #[error("IO error: {0}")]
    Io(String),

    /// Deflate or inflate failure
    #[error("Compression error: {0}")]
    Compression(String),

    /// Entries cannot be added once an archive has been packed
    #[error("Archive is sealed")]
    Sealed,

    /// Entry name cannot be turned into a file name inside the destination
    #[error("Unsafe entry name: {0:?}")]
    UnsafeEntryName(String),
}

impl From<std::io::Error> for StashError {
    fn from(err: std::io::Error) -> Self {
        StashError::Io(err.to_string())
    }
}
