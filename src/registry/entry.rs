//! A single project registered for backup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use super::backup_path::{default_backup_path, is_proper_backup_path};
use super::identity::Identity;
use crate::error::{RegistryError, Result};

/// Stored form of an entry inside the registry file.
///
/// The backup path is never persisted: it is recomputed from the registry's
/// backup root on every load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Project name as it was registered
    #[serde(default)]
    pub project: String,
    /// Absolute path to the working tree
    #[serde(default)]
    pub working_path: Option<PathBuf>,
}

/// One project under backup. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Entry {
    identity: Identity,
    working_path: PathBuf,
    backup_path: PathBuf,
}

impl Entry {
    /// Build a fully resolved entry from partial input.
    ///
    /// An unknown identity is derived from the last component of
    /// `working_path`. A supplied `backup_path` is kept only if it ends with
    /// `.git.bundle`; otherwise the path is computed under `root`.
    pub fn create(
        identity: Identity,
        working_path: Option<&Path>,
        backup_path: Option<&Path>,
        root: Option<&Path>,
    ) -> Result<Self> {
        let working_path = working_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| RegistryError::configuration("working path is required"))?;

        let identity = if identity.is_known() {
            identity
        } else {
            Identity::deduce_from_path(working_path)
        };
        if !identity.is_known() {
            return Err(RegistryError::configuration(format!(
                "cannot derive a project name from working path {}",
                working_path.display()
            )));
        }

        let backup_path = match backup_path {
            Some(path) if is_proper_backup_path(Some(path)) => path.to_path_buf(),
            _ => {
                let root = root.ok_or_else(|| {
                    RegistryError::configuration(
                        "default backup root is required to compute a backup path",
                    )
                })?;
                default_backup_path(root, &identity)?
            }
        };

        Ok(Self {
            identity,
            working_path: working_path.to_path_buf(),
            backup_path,
        })
    }

    /// Rebuild an entry from its stored record, recomputing the backup path.
    pub fn from_record(record: &EntryRecord, root: &Path) -> Result<Self> {
        Self::create(
            Identity::new(Some(record.project.as_str())),
            record.working_path.as_deref(),
            None,
            Some(root),
        )
    }

    /// Stored form of this entry.
    pub fn to_record(&self) -> EntryRecord {
        EntryRecord {
            project: self.identity.to_string(),
            working_path: Some(self.working_path.clone()),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn working_path(&self) -> &Path {
        &self.working_path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.identity)?;
        writeln!(f, "  working path: {}", self.working_path.display())?;
        writeln!(f, "  backup path:  {}", self.backup_path.display())
    }
}
