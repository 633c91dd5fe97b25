//! Basic packing example

use bytes::Bytes;
use stash_core::{extract::extract, file, Archive, BufferConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Stash Basic Packing Example\n");

    let mut archive = Archive::new("hello_world");
    for i in 1..=5 {
        let content = format!("This is file {} with some text in it", i);
        archive.add_entry(format!("file_{}.txt", i), Bytes::from(content))?;
    }

    // save() packs the archive first
    let path = file::save(&mut archive, ".", "example_output.stash")?;
    println!("Wrote {} entries to {}", archive.len(), path.display());

    let loaded = file::load(&path, BufferConfig::default())?;
    println!("Loaded archive {:?} with {} entries", loaded.name(), loaded.len());

    let written = extract(&loaded, "example_parsed")?;
    for p in &written {
        println!("  extracted {}", p.display());
    }

    println!("\nUse 'stash list --input example_output.stash' to inspect it");

    Ok(())
}
