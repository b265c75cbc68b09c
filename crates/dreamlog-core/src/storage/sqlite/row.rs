//! Row mapping for the dreams table.

use rusqlite::Row;

use crate::storage::types::Dream;

/// Column list shared by every SELECT against the dreams table.
pub const DREAM_COLUMNS: &str = "id, date, title, content";

/// Raw row data from the dreams table, before conversion to the domain type.
#[derive(Debug)]
pub struct DreamRow {
    pub id: String,
    pub date: String,
    pub title: String,
    pub content: String,
}

impl DreamRow {
    /// Read a row selected with `DREAM_COLUMNS`.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
        })
    }
}

impl From<DreamRow> for Dream {
    fn from(row: DreamRow) -> Self {
        Dream {
            id: row.id,
            date: row.date,
            title: row.title,
            content: row.content,
        }
    }
}
