use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const REGISTRY_FILE: &str = "backups.json";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "bundlekeep";
const APP_NAME: &str = "bundlekeep";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub runner: RunnerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry file location (default: `<config dir>/backups.json`)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Backup root for a registry that does not exist yet
    /// (default: `<data dir>/bundles`)
    #[serde(default)]
    pub default_backup_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Git executable used to create bundles
    #[serde(default = "default_git_binary")]
    pub git_binary: String,

    /// Revision arguments passed after `git bundle create <file>`
    #[serde(default = "default_bundle_args")]
    pub bundle_args: Vec<String>,

    /// Exit non-zero when any project fails to back up
    #[serde(default = "default_fail_exit_code")]
    pub fail_exit_code: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            git_binary: default_git_binary(),
            bundle_args: default_bundle_args(),
            fail_exit_code: default_fail_exit_code(),
        }
    }
}

fn default_git_binary() -> String {
    "git".to_string()
}

fn default_bundle_args() -> Vec<String> {
    vec!["--all".to_string()]
}

fn default_fail_exit_code() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write logs to rolling files
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// Also log to stderr (filtered by RUST_LOG)
    #[serde(default = "default_logging_stderr")]
    pub stderr: bool,

    /// File log level: trace, debug, info, warn, error
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Log directory, relative paths resolve against the data directory
    #[serde(default = "default_logging_directory")]
    pub directory: PathBuf,

    /// Rotation: daily, hourly, minutely, never
    #[serde(default = "default_logging_rotation")]
    pub rotation: String,

    /// Log file name prefix
    #[serde(default = "default_logging_file_prefix")]
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            stderr: default_logging_stderr(),
            level: default_logging_level(),
            directory: default_logging_directory(),
            rotation: default_logging_rotation(),
            file_prefix: default_logging_file_prefix(),
        }
    }
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_stderr() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

fn default_logging_directory() -> PathBuf {
    PathBuf::from("logs")
}

fn default_logging_rotation() -> String {
    "daily".to_string()
}

fn default_logging_file_prefix() -> String {
    "bundlekeep.log".to_string()
}

impl Config {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
    }

    /// Directory holding `config.toml` and, by default, the registry file.
    pub fn config_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().to_path_buf())
    }

    /// Directory holding logs and, by default, the bundles.
    pub fn data_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_dir().to_path_buf())
    }

    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;

            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {:?}", path))
        } else {
            Ok(Config::default())
        }
    }

    /// Registry file to use: explicit override, then config, then default.
    pub fn registry_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        match cli_override.or(self.registry.path.as_deref()) {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(Self::config_dir()?.join(REGISTRY_FILE)),
        }
    }

    /// Backup root used to seed a registry that does not exist yet.
    pub fn seed_backup_root(&self) -> Result<PathBuf> {
        match &self.registry.default_backup_root {
            Some(root) => Ok(root.clone()),
            None => Ok(Self::data_dir()?.join("bundles")),
        }
    }
}
