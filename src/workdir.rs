//! Working-tree detection for `--add`.
//!
//! Unlike a project-root search, the working path must be the current
//! directory itself: no walking up to a parent repository.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory that marks a git working tree.
pub const VCS_MARKER: &str = ".git";

/// Errors raised while resolving the working path to register.
#[derive(Error, Debug)]
pub enum WorkdirError {
    /// The directory has no `.git` directory.
    #[error("{path} is not a git working tree (no {marker} directory)", marker = VCS_MARKER)]
    NotAWorkingTree { path: PathBuf },

    /// Failed to canonicalize the directory.
    #[error("Path canonicalization failed for {path}: {source}")]
    Canonicalization {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Return the canonical form of `dir` if it is a git working tree.
pub fn guess_working_path(dir: &Path) -> Result<PathBuf, WorkdirError> {
    let canonical = dir
        .canonicalize()
        .map_err(|source| WorkdirError::Canonicalization {
            path: dir.to_path_buf(),
            source,
        })?;

    if !canonical.join(VCS_MARKER).is_dir() {
        debug!(path = %canonical.display(), "No VCS marker found");
        return Err(WorkdirError::NotAWorkingTree { path: canonical });
    }

    debug!(path = %canonical.display(), "Found git working tree");
    Ok(canonical)
}
