use anyhow::Result;
use bundlekeep::commands::Context;
use bundlekeep::Config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestHarness {
    pub temp_dir: TempDir,
    pub ctx: Context,
}

impl TestHarness {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let mut config = Config::default();
        config.registry.default_backup_root = Some(temp_dir.path().join("bundles"));
        config.logging.enabled = false;

        let registry_path = temp_dir.path().join("config").join("backups.json");
        let ctx = Context::new(config, registry_path);

        Ok(Self { temp_dir, ctx })
    }

    /// Create a directory that looks like a git working tree.
    pub fn create_working_tree(&self, name: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join("code").join(name);
        std::fs::create_dir_all(path.join(".git"))?;
        Ok(path)
    }

    pub fn registry_path(&self) -> &Path {
        &self.ctx.registry_path
    }

    pub fn backup_root(&self) -> PathBuf {
        self.temp_dir.path().join("bundles")
    }
}
