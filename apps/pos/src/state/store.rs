//! # Store State
//!
//! Shared handle to the persistence layer.
//!
//! The `DataStore` is the single source of truth for catalog, staff and
//! ledger; every surface reaches it through this injected handle rather
//! than through ambient globals.

use std::sync::{Arc, Mutex};

use keymaster_store::DataStore;

/// Shared store state.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<DataStore>>,
}

impl StoreState {
    /// Wraps an opened store.
    pub fn new(store: DataStore) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DataStore) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// The closure runs under the lock, so a checkout's validate +
    /// decrement + append sequence is never interleaved with another
    /// command's view of the collections.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut DataStore) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}
