//! Back up every registered project.

use anyhow::Result;
use tracing::info;

use super::Context;
use crate::runner::{GitBundle, RunReport, Runner, SnapshotCommand};

/// Bundle every registered project with git and print the results.
pub async fn run(ctx: &Context) -> Result<RunReport> {
    let report = run_with(ctx, GitBundle::new(&ctx.config.runner)).await?;
    report.print_summary();
    Ok(report)
}

/// Run `command` over the registry without printing.
pub async fn run_with<C: SnapshotCommand>(ctx: &Context, command: C) -> Result<RunReport> {
    let registry = ctx.load_registry()?;
    info!(
        "Backing up {} project(s) from {:?}",
        registry.len(),
        ctx.registry_path
    );

    Ok(Runner::new(command).run_all(&registry).await)
}
