//! # Dreamlog Core
//!
//! Core library for Dreamlog - a local, CLI-first dream journal.
//!
//! This crate provides the persistence layer and the export/import engine,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Dream store trait, SQLite implementation, async facade
//! - **transfer**: JSON export, import parsing, and import merge rules
//! - **fs**: Atomic file writes used by export

pub mod error;
pub mod fs;
pub mod storage;
pub mod transfer;

pub use error::{DreamError, Result};
pub use storage::{AsyncDreamStore, Dream, DreamStore, NewDream, SqliteDreamStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
