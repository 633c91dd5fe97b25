//! Fuzzing entry points for stash-core decoding
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Add a fuzz target that calls `fuzz_unpack`, then: cargo fuzz run fuzz_unpack

use stash_core::{Archive, BufferConfig, ByteOrder, ByteReader, TextEncoding};

pub fn fuzz_unpack(data: &[u8]) {
    // Try every configuration - should never panic
    for order in [ByteOrder::Little, ByteOrder::Big] {
        for encoding in [TextEncoding::Utf8, TextEncoding::Utf16, TextEncoding::Ascii] {
            let _ = Archive::from_bytes(data.to_vec(), BufferConfig::new(order, encoding));
        }
    }
}

pub fn fuzz_reader(data: &[u8]) {
    let mut reader = ByteReader::new(data.to_vec());

    // Alternate primitive reads until the buffer runs dry
    loop {
        let progressed = match reader.position() % 4 {
            0 => reader.read_string().is_ok(),
            1 => reader.read_ulong().is_ok(),
            2 => reader.read_blob().is_ok(),
            _ => reader.read_short().is_ok(),
        };
        if !progressed || reader.is_exhausted() {
            break;
        }
    }
}
