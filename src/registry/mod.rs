//! Project registry and backup path resolution.
//!
//! The registry is a small JSON file listing the projects to back up and the
//! directory their bundles go to:
//!
//! ```json
//! {
//!   "default_backup_root": "/backups",
//!   "to_backup": [
//!     { "project": "demo", "working_path": "/code/demo" }
//!   ]
//! }
//! ```
//!
//! Each project's bundle lives at `<default_backup_root>/<project>.git.bundle`.
//! Bundle paths are never stored; they are recomputed on every load, so
//! moving the backup root moves every bundle with it.

mod backup_path;
mod entry;
mod identity;
mod store;

pub use backup_path::{default_backup_path, is_proper_backup_path, BACKUP_SUFFIX};
pub use entry::{Entry, EntryRecord};
pub use identity::{Identity, Name};
pub use store::{Registry, StoredRegistry, NO_PROJECTS_MESSAGE};
