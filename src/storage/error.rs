//! Storage errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned by a [`PreferenceStore`](super::PreferenceStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage is disabled or inaccessible
    #[error("preference storage is unavailable")]
    Unavailable,
    /// Reading or writing the store file failed
    #[error("failed to access preference file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The store file is not a JSON object of strings
    #[error("preference file {} is malformed: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/prefs.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prefs.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_unavailable_display() {
        assert_eq!(
            StoreError::Unavailable.to_string(),
            "preference storage is unavailable"
        );
    }
}
