//! Key-value storage for the persisted theme preference.
//!
//! - [`PreferenceStore`]: the capability the controller reads and writes
//! - [`MemoryStore`]: in-memory store, optionally simulating disabled storage
//! - [`FileStore`]: JSON file store for native hosts
//! - [`StoreError`]: storage faults

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
