//! Library entry for stash-cli used by integration tests and embedding.

pub mod commands;

use stash_core::{BufferConfig, ByteOrder, TextEncoding};

// Re-export commands for convenience
pub use commands::*;

/// Text encoding choice exposed on the command line
#[derive(Copy, Clone, Debug, Default, clap::ValueEnum)]
pub enum EncodingArg {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16 in the archive's byte order
    Utf16,
    /// 7-bit ASCII
    Ascii,
}

impl From<EncodingArg> for TextEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Utf8 => TextEncoding::Utf8,
            EncodingArg::Utf16 => TextEncoding::Utf16,
            EncodingArg::Ascii => TextEncoding::Ascii,
        }
    }
}

/// Build the buffer configuration from command-line flags
pub fn buffer_config(big_endian: bool, encoding: EncodingArg) -> BufferConfig {
    let byte_order = if big_endian {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    };
    BufferConfig::new(byte_order, encoding.into())
}
