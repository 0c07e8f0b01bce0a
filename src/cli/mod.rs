use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bundlekeep")]
#[command(author, version, about = "Back up registered git projects as bundles")]
#[command(group(ArgGroup::new("action").multiple(false)))]
pub struct Cli {
    /// Register the current directory, optionally under NAME
    #[arg(long, value_name = "NAME", num_args = 0..=1, group = "action")]
    pub add: Option<Option<String>>,

    /// List registered projects
    #[arg(long, group = "action")]
    pub list: bool,

    /// Remove a project from the registry
    #[arg(long, value_name = "NAME", group = "action")]
    pub remove: Option<String>,

    /// Configuration file (default: platform config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Registry file (overrides the configuration)
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,
}

/// The single action an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Back up every registered project
    Run,
    /// Register the current directory
    Add { name: Option<String> },
    /// Print the registry
    List,
    /// Unregister a project
    Remove { name: String },
}

impl Cli {
    pub fn action(&self) -> Action {
        if let Some(name) = &self.add {
            Action::Add { name: name.clone() }
        } else if self.list {
            Action::List
        } else if let Some(name) = &self.remove {
            Action::Remove { name: name.clone() }
        } else {
            Action::Run
        }
    }
}
