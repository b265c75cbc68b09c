//! JSON export.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::Result;
use crate::storage::types::Dream;

/// File name prefix for export files.
pub const EXPORT_FILE_PREFIX: &str = "dream-journal-export";

/// Serialize dreams as a pretty-printed JSON array (2-space indentation).
///
/// The output depends only on the input order and field values, so the same
/// snapshot always produces the same bytes. An empty slice yields `[]`.
pub fn export_json(dreams: &[Dream]) -> Result<Vec<u8>> {
    let json = serde_json::to_string_pretty(dreams)?;
    Ok(json.into_bytes())
}

/// Export file name for the given day: `dream-journal-export-YYYY-MM-DD.json`.
pub fn export_file_name(day: NaiveDate) -> String {
    format!("{}-{}.json", EXPORT_FILE_PREFIX, day.format("%Y-%m-%d"))
}

/// Write an export file for `dreams` into `dir` and return its path.
///
/// An existing export for the same day is replaced atomically.
pub fn write_export(dir: &Path, dreams: &[Dream], day: NaiveDate) -> Result<PathBuf> {
    let bytes = export_json(dreams)?;
    let path = dir.join(export_file_name(day));
    crate::fs::write_atomic(&path, &bytes)?;

    info!(count = dreams.len(), path = %path.display(), "exported dreams");
    Ok(path)
}
