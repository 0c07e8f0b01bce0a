//! Sequential backup runs over the registry.
//!
//! Each registered project is handed to a [`SnapshotCommand`] in registry
//! order. A failing project is recorded in the [`RunReport`] and the run
//! moves on; nothing short of a panic stops the batch.

mod report;

pub use report::{EntryOutcome, OutcomeStatus, RunReport};

use async_trait::async_trait;
use chrono::Utc;
use std::io;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::RunnerConfig;
use crate::registry::{Entry, Registry};

/// Captured result of one snapshot command.
#[derive(Debug, Clone, Default)]
pub struct SnapshotOutput {
    pub success: bool,
    pub status_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl SnapshotOutput {
    /// Stdout and stderr combined for reporting.
    pub fn combined(&self) -> String {
        let mut message = String::new();
        if !self.stdout.is_empty() {
            message.push_str(&self.stdout);
        }
        if !self.stderr.is_empty() {
            if !message.is_empty() && !message.ends_with('\n') {
                message.push('\n');
            }
            message.push_str(&self.stderr);
        }
        message
    }
}

/// Creates a snapshot of one entry's working tree at its backup path.
#[async_trait]
pub trait SnapshotCommand: Send + Sync {
    async fn snapshot(&self, entry: &Entry) -> io::Result<SnapshotOutput>;
}

/// `git -C <working_path> bundle create <backup_path> <args...>`
#[derive(Debug, Clone)]
pub struct GitBundle {
    git_binary: String,
    bundle_args: Vec<String>,
}

impl GitBundle {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            git_binary: config.git_binary.clone(),
            bundle_args: config.bundle_args.clone(),
        }
    }
}

#[async_trait]
impl SnapshotCommand for GitBundle {
    async fn snapshot(&self, entry: &Entry) -> io::Result<SnapshotOutput> {
        if let Some(parent) = entry.backup_path().parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        debug!(
            working_path = %entry.working_path().display(),
            backup_path = %entry.backup_path().display(),
            "Running {} bundle create",
            self.git_binary
        );

        let output = Command::new(&self.git_binary)
            .arg("-C")
            .arg(entry.working_path())
            .args(["bundle", "create"])
            .arg(entry.backup_path())
            .args(&self.bundle_args)
            .output()
            .await?;

        Ok(SnapshotOutput {
            success: output.status.success(),
            status_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs a snapshot command over every registered entry.
pub struct Runner<C> {
    command: C,
}

impl<C: SnapshotCommand> Runner<C> {
    pub fn new(command: C) -> Self {
        Self { command }
    }

    /// Snapshot every entry in order. Never returns early on a failed entry.
    pub async fn run_all(&self, registry: &Registry) -> RunReport {
        let mut report = RunReport::new(Utc::now());

        for entry in registry.entries() {
            let outcome = self.run_one(entry).await;
            report.record(outcome);
        }

        report.finish(Utc::now());
        info!("{}", report.summary());
        report
    }

    async fn run_one(&self, entry: &Entry) -> EntryOutcome {
        let status = match self.command.snapshot(entry).await {
            Ok(output) if output.success => {
                info!("Backed up '{}' to {:?}", entry.identity(), entry.backup_path());
                OutcomeStatus::Succeeded
            }
            Ok(output) => {
                warn!(
                    "Snapshot of '{}' exited with {:?}",
                    entry.identity(),
                    output.status_code
                );
                OutcomeStatus::Failed {
                    status_code: output.status_code,
                    output: output.combined(),
                }
            }
            Err(e) => {
                warn!("Could not run snapshot for '{}': {}", entry.identity(), e);
                OutcomeStatus::Errored {
                    error: e.to_string(),
                }
            }
        };

        EntryOutcome {
            project: entry.identity().to_string(),
            working_path: entry.working_path().to_path_buf(),
            backup_path: entry.backup_path().to_path_buf(),
            status,
        }
    }
}
