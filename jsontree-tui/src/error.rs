use std::io;
use std::path::PathBuf;

use thiserror::Error;

use jsontree::error::ValueError;

use crate::config::ConfigError;

/// Startup and session failures that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load {}: {source}", path.display())]
    Input { path: PathBuf, source: ValueError },
    #[error("failed to build demo report: {0}")]
    Sample(ValueError),
    #[error("failed to initialize logging: {0}")]
    Logging(String),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
