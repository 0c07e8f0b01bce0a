//! Per-project results of a backup run.

use chrono::{DateTime, Utc};
use std::fmt;
use std::path::PathBuf;

use crate::registry::NO_PROJECTS_MESSAGE;

/// How a single project's snapshot ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// The snapshot command exited successfully
    Succeeded,
    /// The snapshot command ran and exited unsuccessfully
    Failed {
        status_code: Option<i32>,
        output: String,
    },
    /// The snapshot command could not be started
    Errored { error: String },
}

/// Result of backing up one project.
#[derive(Debug, Clone)]
pub struct EntryOutcome {
    pub project: String,
    pub working_path: PathBuf,
    pub backup_path: PathBuf,
    pub status: OutcomeStatus,
}

impl EntryOutcome {
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Succeeded
    }
}

impl fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            OutcomeStatus::Succeeded => write!(
                f,
                "✓ {}: backed up to {}",
                self.project,
                self.backup_path.display()
            ),
            OutcomeStatus::Failed {
                status_code,
                output,
            } => {
                let code = status_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                write!(f, "✗ {}: snapshot failed (exit {})", self.project, code)?;
                for line in output.lines().filter(|l| !l.trim().is_empty()) {
                    write!(f, "\n    {}", line)?;
                }
                Ok(())
            }
            OutcomeStatus::Errored { error } => {
                write!(f, "✗ {}: could not run snapshot: {}", self.project, error)
            }
        }
    }
}

/// Outcomes of a full run, in registry order.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<EntryOutcome>,
}

impl RunReport {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            finished_at: started_at,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: EntryOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn finish(&mut self, finished_at: DateTime<Utc>) {
        self.finished_at = finished_at;
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Check if any project failed
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn summary(&self) -> String {
        let seconds = (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0;
        if self.outcomes.is_empty() {
            NO_PROJECTS_MESSAGE.to_string()
        } else if self.has_failures() {
            format!(
                "Backed up {} of {} project(s) in {:.2}s, {} failed",
                self.succeeded(),
                self.outcomes.len(),
                seconds,
                self.failed()
            )
        } else {
            format!(
                "Backed up {} project(s) in {:.2}s",
                self.outcomes.len(),
                seconds
            )
        }
    }

    /// Print one line per project followed by the summary
    pub fn print_summary(&self) {
        for outcome in &self.outcomes {
            println!("{}", outcome);
        }
        if !self.outcomes.is_empty() {
            println!();
        }
        println!("{}", self.summary());
    }
}
