//! Async facade over a blocking `DreamStore`.
//!
//! SQLite calls block, so each operation is moved onto tokio's blocking
//! pool. The caller awaits exactly one `Result` per operation.

use std::sync::Arc;

use crate::error::Result;
use crate::storage::traits::DreamStore;
use crate::storage::types::{Dream, NewDream};
use crate::transfer;

/// Runs `DreamStore` operations without blocking the calling task.
#[derive(Debug)]
pub struct AsyncDreamStore<S> {
    inner: Arc<S>,
}

impl<S> Clone for AsyncDreamStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> AsyncDreamStore<S>
where
    S: DreamStore + 'static,
{
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Borrow the wrapped blocking store.
    pub fn blocking(&self) -> &S {
        &self.inner
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&S) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || op(store.as_ref())).await?
    }

    pub async fn create(&self, dream: NewDream) -> Result<Dream> {
        self.run(move |store| store.create(&dream)).await
    }

    pub async fn fetch_all(&self) -> Result<Vec<Dream>> {
        self.run(|store| store.fetch_all()).await
    }

    pub async fn get(&self, id: impl Into<String>) -> Result<Option<Dream>> {
        let id = id.into();
        self.run(move |store| store.get(&id)).await
    }

    pub async fn update(&self, dream: Dream) -> Result<Dream> {
        self.run(move |store| store.update(&dream)).await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        self.run(move |store| store.delete(&id)).await
    }

    /// Parse an export file and upsert its dreams. See `transfer::import_dreams`.
    pub async fn import(&self, bytes: Vec<u8>) -> Result<Vec<Dream>> {
        self.run(move |store| transfer::import_dreams(store, &bytes))
            .await
    }
}
