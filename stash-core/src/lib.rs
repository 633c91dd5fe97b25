//! # Stash Core
//!
//! A minimal self-describing archive: a name plus an ordered list of named
//! blobs, each written as a length-prefixed frame.
//!
//! ## Modules
//!
//! - `constants`: Integer widths, byte order and text encoding configuration
//! - `types`: Core types (Entry)
//! - `buffer`: Append-only `ByteBuilder` and forward-only `ByteReader`
//! - `archive`: Archive frame encoding/decoding and the `Archive` container
//! - `file`: Saving and loading archive files
//! - `extract`: Writing entries back out as files
//! - `compression`: Optional whole-buffer zlib compression

#![warn(missing_docs)]

pub mod archive;
pub mod buffer;
pub mod compression;
pub mod constants;
pub mod error;
pub mod extract;
pub mod file;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use archive::Archive;
pub use buffer::{ByteBuilder, ByteReader};
pub use constants::{BufferConfig, ByteOrder, TextEncoding};
pub use error::StashError;
pub use types::Entry;

/// Result type alias for stash operations
pub type Result<T> = core::result::Result<T, StashError>;
