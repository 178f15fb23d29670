//! Offline row snapshots stored as JSON.

use std::path::Path;

use tracing::info;

use crate::{lineup::RawRow, Result};

/// Read a JSON array of `{column: text}` objects.
///
/// Snapshots use the same columns and cell text as the scraped table, so a
/// saved slate can be re-optimized without network access.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let text = std::fs::read_to_string(path)?;
    let rows: Vec<RawRow> = serde_json::from_str(&text)?;
    info!(path = %path.display(), rows = rows.len(), "loaded row snapshot");
    Ok(rows)
}

/// Write rows in the format [`read_rows`] accepts.
pub fn write_rows(path: &Path, rows: &[RawRow]) -> Result<()> {
    std::fs::write(path, serde_json::to_string_pretty(rows)?)?;
    Ok(())
}
