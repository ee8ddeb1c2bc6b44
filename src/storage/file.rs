//! JSON file preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{PreferenceStore, StoreError};

/// Persists entries as a flat JSON object of strings.
///
/// The file is read on every `get` and replaced on every `set`, so several
/// processes sharing a file see each other's last write. A missing file is an
/// empty store. A file that does not parse is reported by `get` and replaced
/// by the next `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(err @ StoreError::Format { .. }) => {
                tracing::warn!(error = %err, "discarding unreadable preference file");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
                parent
            }
            None => Path::new("."),
        };
        let body = serde_json::to_string_pretty(&entries).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;

        // Write beside the target and rename over it so readers never see a
        // partial file.
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        staged
            .write_all(body.as_bytes())
            .map_err(|e| self.io_error(e))?;
        staged
            .persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}
