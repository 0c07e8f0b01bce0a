//! Error types for registry construction and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or persisting the backup registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Construction input is incomplete or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The registry file could not be read or written.
    #[error("registry store error at {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file exists but is not valid registry JSON.
    #[error("malformed registry at {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory registry could not be encoded for writing.
    #[error("failed to encode registry for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl RegistryError {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub(crate) fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Store {
            path: path.into(),
            source,
        }
    }

    /// True for the store-level failures (unreadable, unwritable, malformed,
    /// unencodable).
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            Self::Store { .. } | Self::Malformed { .. } | Self::Encode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        let err = RegistryError::configuration("working path is required");
        assert_eq!(err.to_string(), "configuration error: working path is required");
        assert!(!err.is_store_error());
    }

    #[test]
    fn test_store_error_classification() {
        let err = RegistryError::store(
            "/tmp/backups.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_store_error());
        assert!(err.to_string().contains("/tmp/backups.json"));
    }
}
