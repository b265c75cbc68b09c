//! Storage abstraction for Dreamlog.
//!
//! This module defines the `DreamStore` trait and the core types for
//! reading and writing dreams in the local journal database.
//!
//! ## Architecture
//!
//! - `sqlite`: the SQLite-backed store (one connection per operation)
//! - `async_store`: tokio facade that runs each unit of work off the
//!   caller's task
//!
//! Every operation is a single transaction; a connection never outlives the
//! operation that opened it.

pub mod async_store;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use async_store::AsyncDreamStore;
pub use sqlite::SqliteDreamStore;
pub use traits::DreamStore;
pub use types::{Dream, NewDream};
