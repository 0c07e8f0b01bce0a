//! Command implementations, one per CLI action.

pub mod projects;
pub mod run;

use anyhow::Result;
use std::path::PathBuf;

use crate::registry::Registry;
use crate::Config;

/// Resolved configuration shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub registry_path: PathBuf,
}

impl Context {
    pub fn new(config: Config, registry_path: PathBuf) -> Self {
        Self {
            config,
            registry_path,
        }
    }

    /// Load the registry, or start an empty one if the file does not exist.
    ///
    /// The configured seed root is only resolved for a missing file.
    pub fn load_registry(&self) -> Result<Registry> {
        Registry::load_or_new(&self.registry_path, || self.config.seed_backup_root())
    }

    pub fn save_registry(&self, registry: &Registry) -> Result<()> {
        Ok(registry.save(&self.registry_path)?)
    }
}
