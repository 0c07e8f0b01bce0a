use async_trait::async_trait;
use bundlekeep::runner::{SnapshotCommand, SnapshotOutput};
use bundlekeep::Entry;
use std::io;

/// Writes a placeholder bundle, or fails for projects listed in `failing`.
pub struct FakeSnapshot {
    failing: Vec<String>,
}

impl FakeSnapshot {
    pub fn new() -> Self {
        Self::failing(&[])
    }

    pub fn failing(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

#[async_trait]
impl SnapshotCommand for FakeSnapshot {
    async fn snapshot(&self, entry: &Entry) -> io::Result<SnapshotOutput> {
        let name = entry.identity().to_string();

        if self.failing.contains(&name) {
            return Ok(SnapshotOutput {
                success: false,
                status_code: Some(128),
                stdout: String::new(),
                stderr: format!("fatal: cannot bundle {}", name),
            });
        }

        if let Some(parent) = entry.backup_path().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(entry.backup_path(), b"bundle")?;

        Ok(SnapshotOutput {
            success: true,
            status_code: Some(0),
            ..Default::default()
        })
    }
}
