use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use stash_core::{file, Archive, BufferConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Regular files directly inside `dir`, sorted by path
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for item in fs::read_dir(dir)
        .with_context(|| format!("Failed to list input directory: {}", dir.display()))?
    {
        let path = item?.path();
        if path.is_file() {
            files.push(path);
        } else {
            warn!("Skipping {} (not a regular file)", path.display());
        }
    }
    files.sort();
    Ok(files)
}

fn progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb.set_message("Packing");
    pb
}

pub fn execute(
    input: &str,
    output: &str,
    name: &str,
    config: BufferConfig,
    compress: bool,
    progress: bool,
) -> Result<()> {
    info!("Packing files from {} to {}", input, output);

    let files = discover_files(Path::new(input))?;
    info!("Found {} files to pack", files.len());

    let pb = progress.then(|| progress_bar(files.len() as u64));

    let mut archive = Archive::with_config(name, config);
    for path in &files {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        let size = data.len();

        // Entry name is the path as discovered
        archive
            .add_entry(path.to_string_lossy().into_owned(), data)
            .with_context(|| format!("Failed to add {}", path.display()))?;

        info!("Added {} ({} bytes)", path.display(), size);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let output_path = Path::new(output);
    let Some(filename) = output_path.file_name().and_then(|f| f.to_str()) else {
        bail!("Output path has no file name: {}", output);
    };
    let directory = match output_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let saved = if compress {
        file::save_compressed(&mut archive, directory, filename)
    } else {
        file::save(&mut archive, directory, filename)
    };
    let written = saved.with_context(|| format!("Failed to write output file: {}", output))?;

    let size = fs::metadata(&written).map(|m| m.len()).unwrap_or(0);
    info!(
        "Successfully packed {} entries into {} ({} bytes)",
        archive.len(),
        written.display(),
        size
    );

    Ok(())
}
