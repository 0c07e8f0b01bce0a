use anyhow::Result;
use std::path::Path;

use bundlekeep::commands::projects::{add_from, remove_named, AddOutcome};
use bundlekeep::registry::{Identity, Registry, StoredRegistry, NO_PROJECTS_MESSAGE};

use crate::helpers::test_harness::TestHarness;

#[test]
fn test_end_to_end_demo_scenario() -> Result<()> {
    let mut registry = Registry::new("/backups");

    let entry = registry
        .add(Identity::from_name("demo"), Path::new("/code/demo"), None)?
        .expect("demo should be added");
    assert!(entry.identity().is_known());
    assert_eq!(entry.identity().as_str(), Some("demo"));
    assert_eq!(entry.working_path(), Path::new("/code/demo"));
    assert_eq!(entry.backup_path(), Path::new("/backups/demo.git.bundle"));

    let stored = serde_json::to_value(registry.to_stored())?;
    assert_eq!(
        stored["to_backup"],
        serde_json::json!([{"project": "demo", "working_path": "/code/demo"}])
    );

    let listing = registry.describe();
    assert_eq!(listing.matches("demo.git.bundle").count(), 1);

    assert!(registry.remove(&Identity::from_name("demo")));
    assert_eq!(registry.describe(), NO_PROJECTS_MESSAGE);
    Ok(())
}

#[test]
fn test_repeated_add_is_rejected_without_change() -> Result<()> {
    let harness = TestHarness::new()?;
    let foo = harness.create_working_tree("foo")?;
    let bar = harness.create_working_tree("bar")?;

    add_from(&harness.ctx, &foo, Some("foo"))?;
    add_from(&harness.ctx, &bar, None)?;
    let after_first = std::fs::read_to_string(harness.registry_path())?;

    let second = add_from(&harness.ctx, &foo, Some("foo"))?;
    assert!(matches!(second, AddOutcome::Duplicate(_)));

    let registry = Registry::load(harness.registry_path())?;
    let names: Vec<String> = registry
        .entries()
        .iter()
        .map(|e| e.identity().to_string())
        .collect();
    assert_eq!(names, vec!["foo", "bar"]);
    assert_eq!(std::fs::read_to_string(harness.registry_path())?, after_first);
    Ok(())
}

#[test]
fn test_reload_follows_relocated_backup_root() -> Result<()> {
    let harness = TestHarness::new()?;
    let tree = harness.create_working_tree("X")?;
    add_from(&harness.ctx, &tree, None)?;

    let loaded = Registry::load(harness.registry_path())?;
    assert_eq!(
        loaded.entries()[0].backup_path(),
        harness.backup_root().join("x.git.bundle")
    );

    // Move the root by editing the stored file directly
    let content = std::fs::read_to_string(harness.registry_path())?;
    let mut stored: StoredRegistry = serde_json::from_str(&content)?;
    stored.default_backup_root = Some("/relocated".into());
    std::fs::write(harness.registry_path(), serde_json::to_string(&stored)?)?;

    let relocated = Registry::load(harness.registry_path())?;
    assert_eq!(
        relocated.entries()[0].backup_path(),
        Path::new("/relocated/x.git.bundle")
    );
    Ok(())
}

#[test]
fn test_remove_missing_keeps_registry_file() -> Result<()> {
    let harness = TestHarness::new()?;
    let tree = harness.create_working_tree("demo")?;
    add_from(&harness.ctx, &tree, None)?;
    let before = std::fs::read_to_string(harness.registry_path())?;

    assert!(!remove_named(&harness.ctx, "unknown-project")?);
    assert_eq!(std::fs::read_to_string(harness.registry_path())?, before);

    assert!(remove_named(&harness.ctx, "DEMO")?);
    assert!(Registry::load(harness.registry_path())?.is_empty());
    Ok(())
}

#[test]
fn test_malformed_registry_is_fatal() -> Result<()> {
    let harness = TestHarness::new()?;
    let tree = harness.create_working_tree("demo")?;
    std::fs::create_dir_all(harness.registry_path().parent().unwrap())?;
    std::fs::write(harness.registry_path(), "{ not json")?;

    assert!(add_from(&harness.ctx, &tree, None).is_err());
    assert_eq!(std::fs::read_to_string(harness.registry_path())?, "{ not json");
    Ok(())
}
