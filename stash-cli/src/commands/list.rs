use anyhow::{Context, Result};
use serde::Serialize;
use stash_core::{BufferConfig, ByteOrder, TextEncoding};
use tracing::info;

use super::extract::open;

#[derive(Serialize)]
struct ListedEntry {
    index: usize,
    name: String,
    size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview: Option<String>,
}

#[derive(Serialize)]
struct Manifest {
    name: String,
    byte_order: ByteOrder,
    encoding: TextEncoding,
    total_bytes: usize,
    entries: Vec<ListedEntry>,
}

pub fn execute(
    input: &str,
    config: BufferConfig,
    compressed: bool,
    json: bool,
    preview: Option<usize>,
) -> Result<()> {
    info!("Listing archive: {}", input);

    let archive = open(input, config, compressed)?;

    let entries: Vec<ListedEntry> = archive
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| ListedEntry {
            index,
            name: entry.name.clone(),
            size: entry.len(),
            preview: preview.map(|n| hex::encode(&entry.content[..n.min(entry.len())])),
        })
        .collect();

    let manifest = Manifest {
        name: archive.name().to_string(),
        byte_order: config.byte_order,
        encoding: config.encoding,
        total_bytes: archive.data().map_or(0, |d| d.len()),
        entries,
    };

    if json {
        let out = serde_json::to_string_pretty(&manifest)
            .with_context(|| "Failed to serialize archive listing")?;
        println!("{}", out);
        return Ok(());
    }

    println!("\n=== Archive ===");
    println!("Name:        {}", manifest.name);
    println!("Entries:     {}", manifest.entries.len());
    println!("Packed size: {} bytes", manifest.total_bytes);
    println!();

    println!("=== Entries ===");
    for entry in &manifest.entries {
        match &entry.preview {
            Some(hex) => println!(
                "{:>4}  {:>10}  {}  {}",
                entry.index, entry.size, entry.name, hex
            ),
            None => println!("{:>4}  {:>10}  {}", entry.index, entry.size, entry.name),
        }
    }

    Ok(())
}
