use anyhow::Result;

use bundlekeep::commands::projects::add_from;
use bundlekeep::commands::run::run_with;
use bundlekeep::config::RunnerConfig;
use bundlekeep::runner::{GitBundle, OutcomeStatus};

use crate::helpers::fake_snapshot::FakeSnapshot;
use crate::helpers::test_harness::TestHarness;

#[tokio::test]
async fn test_run_continues_past_failed_project() -> Result<()> {
    let harness = TestHarness::new()?;
    for name in ["alpha", "beta", "gamma"] {
        let tree = harness.create_working_tree(name)?;
        add_from(&harness.ctx, &tree, None)?;
    }

    let command = FakeSnapshot::failing(&["beta"]);
    let report = run_with(&harness.ctx, command).await?;

    let projects: Vec<&str> = report.outcomes.iter().map(|o| o.project.as_str()).collect();
    assert_eq!(projects, vec!["alpha", "beta", "gamma"]);
    assert_eq!(report.succeeded(), 2);
    assert!(report.has_failures());

    assert!(harness.backup_root().join("alpha.git.bundle").exists());
    assert!(!harness.backup_root().join("beta.git.bundle").exists());
    assert!(harness.backup_root().join("gamma.git.bundle").exists());
    Ok(())
}

#[tokio::test]
async fn test_run_without_registry_is_empty() -> Result<()> {
    let harness = TestHarness::new()?;

    let report = run_with(&harness.ctx, FakeSnapshot::new()).await?;

    assert!(report.outcomes.is_empty());
    assert!(!report.has_failures());
    assert!(!harness.registry_path().exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_git_binary_is_reported_per_project() -> Result<()> {
    let harness = TestHarness::new()?;
    for name in ["one", "two"] {
        let tree = harness.create_working_tree(name)?;
        add_from(&harness.ctx, &tree, None)?;
    }

    let config = RunnerConfig {
        git_binary: "bundlekeep-test-no-such-git".to_string(),
        ..RunnerConfig::default()
    };
    let report = run_with(&harness.ctx, GitBundle::new(&config)).await?;

    assert_eq!(report.outcomes.len(), 2);
    for outcome in &report.outcomes {
        assert!(matches!(outcome.status, OutcomeStatus::Errored { .. }));
    }
    Ok(())
}
