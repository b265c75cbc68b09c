//! Dream store trait definition.
//!
//! The `DreamStore` trait defines the CRUD contract that the CLI and the
//! transfer engine rely on. The SQLite backend is the only implementation
//! today; the trait keeps the transfer engine independent of it.

use super::types::{Dream, NewDream};
use crate::error::Result;

/// CRUD interface for the local dream journal.
///
/// All implementations must ensure:
/// - Each call is one atomic unit of work (all mutations visible, or none)
/// - Exactly one dream per `id`
/// - No connection or handle is held between calls
pub trait DreamStore: Send + Sync {
    /// Persist a new dream under a freshly generated identifier.
    ///
    /// # Errors
    ///
    /// Returns `DreamError::WriteConflict` if the generated identifier is
    /// already taken. The existing record is never overwritten.
    fn create(&self, dream: &NewDream) -> Result<Dream>;

    /// Return every stored dream.
    ///
    /// Ordering is not part of the contract; sorting is a display concern.
    /// An empty store yields an empty vector.
    fn fetch_all(&self) -> Result<Vec<Dream>>;

    /// Look up a single dream by identifier.
    ///
    /// Returns `Ok(None)` if no dream has that identifier.
    fn get(&self, id: &str) -> Result<Option<Dream>>;

    /// Replace the dream stored under `dream.id`.
    ///
    /// This is an upsert: if no record has that identifier, it is inserted.
    /// Import depends on this, so it never reports `NotFound`.
    fn update(&self, dream: &Dream) -> Result<Dream>;

    /// Remove the dream with the given identifier.
    ///
    /// Deleting a missing identifier succeeds.
    fn delete(&self, id: &str) -> Result<()>;

    /// Upsert every dream, in order, inside one transaction.
    ///
    /// # Returns
    ///
    /// Returns the number of records written.
    fn upsert_all(&self, dreams: &[Dream]) -> Result<usize>;
}
