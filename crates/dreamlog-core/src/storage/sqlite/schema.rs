//! Schema provisioning for the dream journal database.
//!
//! The schema version is tracked in `PRAGMA user_version`. Version 0 means a
//! fresh database; it is provisioned to `SCHEMA_VERSION` in one transaction.
//! Files carrying a newer version are refused.

use rusqlite::Connection;
use tracing::info;

use crate::error::{DreamError, Result};

/// Name of the table holding dreams.
pub const DATABASE_NAME: &str = "dreams";

/// Current (and only) schema version.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_V1: &str = r#"
    CREATE TABLE IF NOT EXISTS dreams (
        id TEXT PRIMARY KEY NOT NULL,
        date TEXT NOT NULL,
        title TEXT NOT NULL,
        content TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS dreams_by_date ON dreams (date);
    CREATE INDEX IF NOT EXISTS dreams_by_title ON dreams (title);
"#;

/// Bring a connection's schema up to `SCHEMA_VERSION`.
pub fn provision(conn: &mut Connection) -> Result<()> {
    let current = user_version(conn)?;

    if current > SCHEMA_VERSION {
        return Err(DreamError::StorageUnavailable(format!(
            "database schema version {} is newer than supported {}",
            current, SCHEMA_VERSION
        )));
    }
    if current == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_V1)?;
    tx.execute_batch(&format!("PRAGMA user_version = {};", SCHEMA_VERSION))?;
    tx.commit()?;

    info!(version = SCHEMA_VERSION, "provisioned dream journal schema");
    Ok(())
}

/// Read the schema version recorded in the database.
pub fn user_version(conn: &Connection) -> Result<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
