//! In-memory preference store.

use std::collections::HashMap;

use super::{PreferenceStore, StoreError};

/// A `HashMap` backed store.
///
/// [`MemoryStore::unavailable`] builds a store whose every call fails, the
/// same way browser storage behaves when it is disabled.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    available: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            available: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            entries: HashMap::new(),
            available: false,
        }
    }

    /// Seeds an entry, returning the store for chaining.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Removes an entry, as an external storage clear would.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("portfolio-theme").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemoryStore::new().with("portfolio-theme", "dark");
        store.set("portfolio-theme", "light").unwrap();
        assert_eq!(
            store.get("portfolio-theme").unwrap().as_deref(),
            Some("light")
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unavailable_fails_every_call() {
        let mut store = MemoryStore::unavailable();
        assert!(matches!(store.get("k"), Err(StoreError::Unavailable)));
        assert!(matches!(store.set("k", "v"), Err(StoreError::Unavailable)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_clears_entry() {
        let mut store = MemoryStore::default().with("portfolio-theme", "dark");
        assert_eq!(store.remove("portfolio-theme").as_deref(), Some("dark"));
        assert_eq!(store.get("portfolio-theme").unwrap(), None);
    }
}
