//! Shared store handle for consumers that live on different tasks.
//!
//! The handle is a cheap clone around one store. Reads may overlap; writes
//! take the lock exclusively, so mutations are applied one at a time in the
//! order the lock is granted.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::trace;

use super::store::DashboardStore;

/// Clonable handle to a single [`DashboardStore`].
#[derive(Debug, Clone)]
pub struct StoreHandle {
    inner: Arc<RwLock<DashboardStore>>,
}

impl StoreHandle {
    #[must_use]
    pub fn new(store: DashboardStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Runs `f` against a shared view of the store.
    pub async fn read<R>(&self, f: impl FnOnce(&DashboardStore) -> R) -> R {
        let guard = self.inner.read().await;
        f(&guard)
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// Reading an id with `next_id` and adding the record inside one call
    /// keeps another writer from taking the same id in between.
    pub async fn write<R>(&self, f: impl FnOnce(&mut DashboardStore) -> R) -> R {
        let mut guard = self.inner.write().await;
        trace!("store write lock acquired");
        f(&mut guard)
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> DashboardStore {
        self.inner.read().await.clone()
    }
}
