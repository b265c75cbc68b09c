//! SQLite storage backend.
//!
//! The store holds only the database path. Every operation opens its own
//! connection, provisions the schema if needed, runs one transaction, and
//! drops the connection before returning, whichever way it returns.

mod row;
pub mod schema;

use std::path::{Path, PathBuf};
use std::time::Duration;

use rusqlite::{Connection, ErrorCode, OptionalExtension, Transaction};
use tracing::{debug, warn};

use crate::error::{DreamError, Result};
use crate::storage::traits::DreamStore;
use crate::storage::types::{generate_id, Dream, NewDream};

use row::{DreamRow, DREAM_COLUMNS};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const UPSERT_SQL: &str = r#"
    INSERT INTO dreams (id, date, title, content)
    VALUES (?1, ?2, ?3, ?4)
    ON CONFLICT(id) DO UPDATE SET
        date = excluded.date,
        title = excluded.title,
        content = excluded.content
"#;

/// SQLite-backed dream store.
#[derive(Debug, Clone)]
pub struct SqliteDreamStore {
    path: PathBuf,
    id_generator: fn() -> String,
}

impl SqliteDreamStore {
    /// Open (and on first use, provision) the journal database at `path`.
    ///
    /// The connection used for the check is closed before returning.
    ///
    /// # Errors
    ///
    /// Returns `DreamError::StorageUnavailable` if the file cannot be opened
    /// as a SQLite database, or carries a newer schema version.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            id_generator: generate_id,
        };
        store.connect()?;
        debug!(path = %store.path.display(), "opened dream store");
        Ok(store)
    }

    /// Replace the identifier generator used by `create`.
    pub fn with_id_generator(mut self, id_generator: fn() -> String) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let unavailable = |err: rusqlite::Error| {
            DreamError::StorageUnavailable(format!("{}: {}", self.path.display(), err))
        };

        let mut conn = Connection::open(&self.path).map_err(unavailable)?;
        conn.busy_timeout(BUSY_TIMEOUT).map_err(unavailable)?;
        schema::provision(&mut conn).map_err(|err| match err {
            DreamError::Storage(message) => DreamError::StorageUnavailable(format!(
                "{}: {}",
                self.path.display(),
                message
            )),
            other => other,
        })?;
        Ok(conn)
    }

    fn upsert(tx: &Transaction<'_>, dream: &Dream) -> Result<()> {
        tx.execute(
            UPSERT_SQL,
            (&dream.id, &dream.date, &dream.title, &dream.content),
        )?;
        Ok(())
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(inner, _) if inner.code == ErrorCode::ConstraintViolation
    )
}

impl DreamStore for SqliteDreamStore {
    fn create(&self, new_dream: &NewDream) -> Result<Dream> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let dream = Dream::with_id((self.id_generator)(), new_dream);
        let inserted = tx.execute(
            "INSERT INTO dreams (id, date, title, content) VALUES (?1, ?2, ?3, ?4)",
            (&dream.id, &dream.date, &dream.title, &dream.content),
        );
        match inserted {
            Ok(_) => {}
            Err(err) if is_constraint_violation(&err) => {
                warn!(id = %dream.id, "generated dream id collided with an existing record");
                return Err(DreamError::WriteConflict(dream.id));
            }
            Err(err) => return Err(err.into()),
        }

        tx.commit()?;
        debug!(id = %dream.id, "created dream");
        Ok(dream)
    }

    fn fetch_all(&self) -> Result<Vec<Dream>> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let dreams = {
            let mut stmt = tx.prepare(&format!(
                "SELECT {} FROM dreams ORDER BY rowid",
                DREAM_COLUMNS
            ))?;
            let rows = stmt.query_map([], DreamRow::from_row)?;
            let mut dreams = Vec::new();
            for row in rows {
                dreams.push(Dream::from(row?));
            }
            dreams
        };
        tx.commit()?;

        debug!(count = dreams.len(), "fetched all dreams");
        Ok(dreams)
    }

    fn get(&self, id: &str) -> Result<Option<Dream>> {
        let conn = self.connect()?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM dreams WHERE id = ?1", DREAM_COLUMNS),
                [id],
                DreamRow::from_row,
            )
            .optional()?;

        debug!(id, found = row.is_some(), "looked up dream");
        Ok(row.map(Dream::from))
    }

    fn update(&self, dream: &Dream) -> Result<Dream> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        Self::upsert(&tx, dream)?;
        tx.commit()?;

        debug!(id = %dream.id, "updated dream");
        Ok(dream.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let removed = tx.execute("DELETE FROM dreams WHERE id = ?1", [id])?;
        tx.commit()?;

        debug!(id, removed, "deleted dream");
        Ok(())
    }

    fn upsert_all(&self, dreams: &[Dream]) -> Result<usize> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        for dream in dreams {
            Self::upsert(&tx, dream)?;
        }
        tx.commit()?;

        debug!(count = dreams.len(), "upserted dreams");
        Ok(dreams.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fixed_id() -> String {
        "fixed".to_string()
    }

    #[test]
    fn test_open_provisions_schema_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dreams.sqlite3");

        let store = SqliteDreamStore::open(&path).unwrap();

        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
        let conn = Connection::open(&path).unwrap();
        assert_eq!(schema::user_version(&conn).unwrap(), schema::SCHEMA_VERSION);
    }

    #[test]
    fn test_open_missing_directory_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("dreams.sqlite3");

        let err = SqliteDreamStore::open(&path).unwrap_err();
        assert!(matches!(err, DreamError::StorageUnavailable(_)));
    }

    #[test]
    fn test_open_non_database_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dreams.sqlite3");
        std::fs::write(&path, "this is not a sqlite database, just some text padding it out")
            .unwrap();

        let err = SqliteDreamStore::open(&path).unwrap_err();
        assert!(matches!(err, DreamError::StorageUnavailable(_)));
    }

    #[test]
    fn test_create_collision_reports_conflict_without_overwrite() {
        let dir = tempdir().unwrap();
        let store = SqliteDreamStore::open(dir.path().join("dreams.sqlite3"))
            .unwrap()
            .with_id_generator(fixed_id);

        let first = store
            .create(&NewDream::new("2024-01-01", "First").with_content("one"))
            .unwrap();
        assert_eq!(first.id, "fixed");

        let err = store
            .create(&NewDream::new("2024-01-02", "Second").with_content("two"))
            .unwrap_err();
        assert!(matches!(err, DreamError::WriteConflict(ref id) if id == "fixed"));

        let stored = store.get("fixed").unwrap().unwrap();
        assert_eq!(stored.title, "First");
        assert_eq!(store.fetch_all().unwrap().len(), 1);
    }

    #[test]
    fn test_upsert_all_is_atomic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dreams.sqlite3");
        let store = SqliteDreamStore::open(&path).unwrap();

        // A trigger that rejects one title makes the second upsert fail.
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TRIGGER reject_bad BEFORE INSERT ON dreams WHEN NEW.title = 'bad'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();
        drop(conn);

        let batch = vec![
            Dream {
                id: "1".into(),
                date: "2024-01-01".into(),
                title: "good".into(),
                content: String::new(),
            },
            Dream {
                id: "2".into(),
                date: "2024-01-02".into(),
                title: "bad".into(),
                content: String::new(),
            },
        ];

        assert!(store.upsert_all(&batch).is_err());
        assert!(store.fetch_all().unwrap().is_empty());
    }
}
