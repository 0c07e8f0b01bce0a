//! Registry management commands: add, list, remove.

use anyhow::Result;
use std::env;
use std::path::Path;

use super::Context;
use crate::registry::{Entry, Identity};
use crate::workdir::guess_working_path;

/// Result of an add attempt.
#[derive(Debug)]
pub enum AddOutcome {
    /// The project was registered and the registry saved
    Added(Entry),
    /// A project with this identity already exists; nothing changed
    Duplicate(Identity),
}

/// Register the current directory.
pub async fn add(ctx: &Context, name: Option<String>) -> Result<()> {
    let current_dir = env::current_dir()?;

    match add_from(ctx, &current_dir, name.as_deref())? {
        AddOutcome::Added(entry) => {
            println!(
                "Added project '{}' at {}",
                entry.identity(),
                entry.working_path().display()
            );
            println!("Backups go to {}", entry.backup_path().display());
        }
        AddOutcome::Duplicate(identity) => {
            println!(
                "Project '{}' is already registered; nothing changed.",
                identity
            );
        }
    }

    Ok(())
}

/// Register `dir` under `name` (or its directory name), saving on success.
///
/// `dir` must be a git working tree.
pub fn add_from(ctx: &Context, dir: &Path, name: Option<&str>) -> Result<AddOutcome> {
    let working_path = guess_working_path(dir)?;
    let mut registry = ctx.load_registry()?;

    let identity = Identity::new(name);
    let requested = if identity.is_known() {
        identity.clone()
    } else {
        Identity::deduce_from_path(&working_path)
    };

    match registry.add(identity, &working_path, None)? {
        Some(entry) => {
            ctx.save_registry(&registry)?;
            Ok(AddOutcome::Added(entry))
        }
        None => Ok(AddOutcome::Duplicate(requested)),
    }
}

/// Print every registered project.
pub async fn list(ctx: &Context) -> Result<()> {
    let registry = ctx.load_registry()?;

    println!("{}", registry.describe().trim_end());
    if !registry.is_empty() {
        println!("\nBackup root: {}", registry.root().display());
        println!("Total: {} project(s)", registry.len());
    }

    Ok(())
}

/// Remove a project from the registry.
pub async fn remove(ctx: &Context, name: String) -> Result<()> {
    if remove_named(ctx, &name)? {
        println!("Removed project '{}' from registry.", name.to_lowercase());
        println!("\nNote: existing bundles were not deleted.");
    } else {
        println!(
            "Project '{}' is not registered; nothing changed.\n\
             Use 'bundlekeep --list' to see all registered projects.",
            name
        );
    }

    Ok(())
}

/// Remove `name` from the registry, saving only if something was removed.
pub fn remove_named(ctx: &Context, name: &str) -> Result<bool> {
    let mut registry = ctx.load_registry()?;

    if !registry.remove(&Identity::from_name(name)) {
        return Ok(false);
    }

    ctx.save_registry(&registry)?;
    Ok(true)
}
