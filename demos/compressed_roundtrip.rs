//! Packing, compressing and restoring an archive in memory

use bytes::Bytes;
use stash_core::{compression, Archive, BufferConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Stash Compressed Round Trip Example\n");

    let mut archive = Archive::new("logs");
    for day in 1..=7 {
        let log = "INFO request served in 3ms\n".repeat(200 * day);
        archive.add_entry(format!("day_{}.log", day), Bytes::from(log))?;
    }
    archive.pack()?;

    let packed = archive.data().ok_or("archive not sealed")?;
    let compressed = compression::compress(packed)?;
    println!(
        "Packed {} bytes, compressed to {} bytes ({:.1}%)",
        packed.len(),
        compressed.len(),
        100.0 * compressed.len() as f64 / packed.len() as f64
    );

    let inflated = compression::decompress(&compressed)?;
    let restored = Archive::from_bytes(inflated, BufferConfig::default())?;
    assert_eq!(restored.entries(), archive.entries());
    println!("Restored {} entries intact", restored.len());

    Ok(())
}
