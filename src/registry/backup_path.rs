//! Deterministic backup artifact locations.

use std::path::{Path, PathBuf};

use super::identity::Identity;
use crate::error::{RegistryError, Result};

/// Suffix every backup artifact carries.
pub const BACKUP_SUFFIX: &str = ".git.bundle";

/// Compute `root/<identity>.git.bundle`.
///
/// Fails when `root` is empty or the identity is unresolved.
pub fn default_backup_path(root: &Path, identity: &Identity) -> Result<PathBuf> {
    if root.as_os_str().is_empty() {
        return Err(RegistryError::configuration(
            "default backup root is required to compute a backup path",
        ));
    }

    let name = identity.as_str().ok_or_else(|| {
        RegistryError::configuration("cannot compute a backup path for an unknown project")
    })?;

    Ok(root.join(format!("{}{}", name, BACKUP_SUFFIX)))
}

/// Whether an externally supplied path can be trusted as a backup path.
pub fn is_proper_backup_path(path: Option<&Path>) -> bool {
    path.map(|p| p.to_string_lossy().ends_with(BACKUP_SUFFIX))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backup_path() {
        let path = default_backup_path(Path::new("/backups"), &Identity::from_name("Demo")).unwrap();
        assert_eq!(path, PathBuf::from("/backups/demo.git.bundle"));
    }

    #[test]
    fn test_default_backup_path_requires_root() {
        let result = default_backup_path(Path::new(""), &Identity::from_name("demo"));
        assert!(matches!(result, Err(RegistryError::Configuration(_))));
    }

    #[test]
    fn test_default_backup_path_requires_known_identity() {
        let result = default_backup_path(Path::new("/backups"), &Identity::Unknown);
        assert!(result.is_err());
    }

    #[test]
    fn test_proper_backup_path() {
        assert!(is_proper_backup_path(Some(Path::new("x.git.bundle"))));
        assert!(is_proper_backup_path(Some(Path::new("/srv/b/x.git.bundle"))));
        assert!(!is_proper_backup_path(Some(Path::new("x.bundle"))));
        assert!(!is_proper_backup_path(Some(Path::new("x.git"))));
        assert!(!is_proper_backup_path(None));
    }
}
