use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use bundlekeep::cli::{Action, Cli};
use bundlekeep::commands::{self, Context};
use bundlekeep::config::Config;
use bundlekeep::logging::{init_early_logging, init_logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Conflicting actions are rejected here, before anything is loaded
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            init_early_logging();
            tracing::error!("{:#}", e);
            return Err(e);
        }
    };

    // The guard MUST be held until program exit to ensure logs are flushed
    let _logging_guard = init_logging(&config.logging, &Config::data_dir()?)?;
    tracing::debug!("Loaded configuration from {:?}", config_path);

    let registry_path = config.registry_path(cli.registry.as_deref())?;
    let ctx = Context::new(config, registry_path);

    match cli.action() {
        Action::Run => {
            let report = commands::run::run(&ctx).await?;
            if report.has_failures() && ctx.config.runner.fail_exit_code {
                return Ok(ExitCode::FAILURE);
            }
        }
        Action::Add { name } => {
            commands::projects::add(&ctx, name).await?;
        }
        Action::List => {
            commands::projects::list(&ctx).await?;
        }
        Action::Remove { name } => {
            commands::projects::remove(&ctx, name).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
