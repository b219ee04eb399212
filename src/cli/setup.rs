use crate::core::snapshot::MarketSnapshot;
use anyhow::{Context, Result};
use std::path::Path;

/// Creates an example snapshot file at the given path, or at the default
/// location when none is given.
pub fn setup(path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => setup_at_path(path),
        None => setup_at_path(MarketSnapshot::default_snapshot_path()?),
    }
}

/// Creates an example snapshot file at the specified path.
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Snapshot file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Include the example snapshot as a string literal in the binary
    let example = include_str!("../../docs/example_snapshot.yaml");

    std::fs::write(path, example)
        .with_context(|| format!("Failed to write snapshot file to {}", path.display()))?;

    tracing::info!("Created example snapshot at {}", path.display());
    Ok(())
}
