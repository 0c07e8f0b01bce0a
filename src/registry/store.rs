//! The persisted list of projects under backup.
//!
//! The registry assumes a single writer: one invocation loads it, mutates it
//! in memory and saves it back. Overlapping invocations are the scheduler's
//! responsibility to prevent.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::entry::{Entry, EntryRecord};
use super::identity::Identity;
use crate::error::{RegistryError, Result};

/// Message rendered by [`Registry::describe`] when nothing is registered.
pub const NO_PROJECTS_MESSAGE: &str = "No projects registered for backup.";

/// On-disk shape of the registry file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredRegistry {
    /// Directory under which default backup paths are computed
    #[serde(default)]
    pub default_backup_root: Option<PathBuf>,
    /// Projects in registration order
    #[serde(default)]
    pub to_backup: Vec<EntryRecord>,
}

/// The backup root plus the ordered list of registered entries.
#[derive(Debug, Clone)]
pub struct Registry {
    root: PathBuf,
    entries: Vec<Entry>,
}

impl Registry {
    /// Create an empty registry. The root is validated lazily, when an entry
    /// first needs it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// Load the registry from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RegistryError::store(path, e))?;

        let stored: StoredRegistry =
            serde_json::from_str(&content).map_err(|source| RegistryError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let registry = Self::from_stored(stored)?;
        debug!(
            "Loaded {} project(s) from {:?}",
            registry.entries.len(),
            path
        );
        Ok(registry)
    }

    /// Load the registry from `path`, or start a fresh one rooted at the
    /// directory `seed_root` returns if the file does not exist yet.
    ///
    /// `seed_root` is only called for a missing file.
    pub fn load_or_new<F, E>(path: &Path, seed_root: F) -> std::result::Result<Self, E>
    where
        F: FnOnce() -> std::result::Result<PathBuf, E>,
        E: From<RegistryError>,
    {
        if path.exists() {
            Ok(Self::load(path)?)
        } else {
            debug!("No registry at {:?}, starting a new one", path);
            Ok(Self::new(seed_root()?))
        }
    }

    /// Rebuild a registry from its stored form. Backup paths are recomputed
    /// from the stored root.
    pub fn from_stored(stored: StoredRegistry) -> Result<Self> {
        let root = stored
            .default_backup_root
            .filter(|root| !root.as_os_str().is_empty())
            .ok_or_else(|| RegistryError::configuration("default_backup_root is required"))?;

        let entries = stored
            .to_backup
            .iter()
            .map(|record| Entry::from_record(record, &root))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { root, entries })
    }

    /// Stored form of this registry.
    pub fn to_stored(&self) -> StoredRegistry {
        StoredRegistry {
            default_backup_root: Some(self.root.clone()),
            to_backup: self.entries.iter().map(Entry::to_record).collect(),
        }
    }

    /// Save the registry to `path`, replacing any existing content.
    ///
    /// Writes to a temporary sibling first and renames it into place.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RegistryError::store(parent, e))?;
        }

        let content = serde_json::to_string_pretty(&self.to_stored()).map_err(|source| {
            RegistryError::Encode {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let temp_path = path.with_extension("json.tmp");

        let mut file =
            fs::File::create(&temp_path).map_err(|e| RegistryError::store(&temp_path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| RegistryError::store(&temp_path, e))?;
        file.sync_all()
            .map_err(|e| RegistryError::store(&temp_path, e))?;

        fs::rename(&temp_path, path).map_err(|e| RegistryError::store(path, e))?;

        debug!("Saved registry to {:?}", path);
        Ok(())
    }

    /// Whether an entry with this identity is registered.
    ///
    /// Always false for an unknown identity.
    pub fn includes(&self, identity: &Identity) -> bool {
        self.entries.iter().any(|entry| entry.identity() == identity)
    }

    /// Register a project.
    ///
    /// Returns `Ok(None)` without touching the registry if the resolved
    /// identity is already registered.
    pub fn add(
        &mut self,
        identity: Identity,
        working_path: &Path,
        backup_path: Option<&Path>,
    ) -> Result<Option<Entry>> {
        let candidate = Entry::create(identity, Some(working_path), backup_path, Some(&self.root))?;

        if self.includes(candidate.identity()) {
            debug!("Project '{}' is already registered", candidate.identity());
            return Ok(None);
        }

        info!(
            "Adding project '{}' at {:?}",
            candidate.identity(),
            candidate.working_path()
        );
        self.entries.push(candidate.clone());
        Ok(Some(candidate))
    }

    /// Remove every entry matching `identity`. Returns false if none did.
    pub fn remove(&mut self, identity: &Identity) -> bool {
        if !self.includes(identity) {
            return false;
        }

        self.entries.retain(|entry| entry.identity() != identity);
        info!("Removed project '{}' from registry", identity);
        true
    }

    /// Find the entry registered under `identity`.
    pub fn find(&self, identity: &Identity) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.identity() == identity)
    }

    /// Human-readable listing of every entry.
    pub fn describe(&self) -> String {
        if self.entries.is_empty() {
            return NO_PROJECTS_MESSAGE.to_string();
        }

        self.entries.iter().map(Entry::to_string).collect()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
