//! # hr-store
//!
//! In-memory entity store for HR Portal RS.
//!
//! The store exclusively owns all record collections; the workflow engine is
//! its only writer. [`SharedStore`] provides the single exclusive critical
//! section under which every transition executes in a server deployment.

pub mod queries;
pub mod store;

pub use store::Store;

use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe handle over the store: one global critical section, since no
/// operation in the engine blocks and record volumes are small.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a closure under the store lock. Transitions executed here are
    /// serialized and can never observe a partially-applied sibling.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> R) -> R {
        let mut store = self.inner.lock();
        f(&mut store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_store_serializes_access() {
        let shared = SharedStore::default();
        let count = shared.with(|store| store.users().count());
        assert_eq!(count, 0);

        let clone = shared.clone();
        clone.with(|store| {
            assert_eq!(store.topics().count(), 0);
        });
    }
}
