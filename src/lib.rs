pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod runner;
pub mod workdir;

pub use config::Config;
pub use error::RegistryError;
pub use registry::{Entry, Identity, Registry};
