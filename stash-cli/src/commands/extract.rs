use anyhow::{Context, Result};
use colored::*;
use stash_core::{extract::extract, file, Archive, BufferConfig};
use tracing::info;

/// Load an archive, inflating it first when `compressed` is set
pub fn open(input: &str, config: BufferConfig, compressed: bool) -> Result<Archive> {
    let archive = if compressed {
        file::load_compressed(input, config)
    } else {
        file::load(input, config)
    };
    archive.with_context(|| format!("Failed to load archive: {}", input))
}

pub fn execute(input: &str, output: &str, config: BufferConfig, compressed: bool) -> Result<()> {
    info!("Extracting {} into {}", input, output);

    let archive = open(input, config, compressed)?;
    let written = extract(&archive, output)
        .with_context(|| format!("Failed to extract into: {}", output))?;

    println!(
        "{} Extracted {} entries from {:?} into {}",
        "✓".green(),
        written.len(),
        archive.name(),
        output
    );

    Ok(())
}
