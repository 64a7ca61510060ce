use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::models::{GeneratedLevel, LevelRecord};

/// Read the full level collection from disk
pub fn load_levels<P: AsRef<Path>>(path: P) -> Result<Vec<LevelRecord>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening level file {}", path.display()))?;
    let levels: Vec<LevelRecord> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing level file {}", path.display()))?;

    tracing::info!("Loaded {} levels from {}", levels.len(), path.display());

    Ok(levels)
}

/// Overwrite the level file with the transformed collection.
///
/// The JSON is staged into a temp file next to the target and renamed over
/// it in one step, so a failed write leaves the previous file intact.
pub fn save_levels<P: AsRef<Path>>(path: P, levels: &[GeneratedLevel]) -> Result<()> {
    let path = path.as_ref();
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("creating temp file in {}", parent_dir.display()))?;

    let mut writer = BufWriter::new(&temp_file);
    serde_json::to_writer_pretty(&mut writer, levels).context("serializing levels")?;
    writer.flush().context("flushing level data")?;
    drop(writer);

    temp_file
        .persist(path)
        .with_context(|| format!("replacing level file {}", path.display()))?;

    tracing::info!("Wrote {} levels to {}", levels.len(), path.display());

    Ok(())
}
