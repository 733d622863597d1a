// src/errors.rs

//! Crate-wide error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    /// The OS refused to create the child process. The original error is
    /// carried through untouched.
    #[error(transparent)]
    Launch(std::io::Error),

    #[error("command vector must contain at least the program to run")]
    EmptyCommand,

    #[error("Source root error: {0}")]
    SourceRoot(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LauncherError>;
