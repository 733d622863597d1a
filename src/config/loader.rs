// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization and path rebasing; it does
/// **not** validate. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let mut config: ConfigFile = toml::from_str(&contents)?;

    if let Some(root) = config.launcher.source_root.as_mut() {
        if root.is_relative() {
            *root = config_root_dir(path).join(&*root);
        }
    }

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the config to use for a run.
///
/// - An explicit path must exist.
/// - Without one, [`default_config_path`] is used if present, otherwise the
///   built-in defaults apply.
pub fn load_optional(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_and_validate(path),
        None => {
            let path = default_config_path();
            if path.is_file() {
                debug!(path = %path.display(), "loading default config file");
                load_and_validate(path)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

/// `test-env.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("test-env.toml")
}

/// Directory that relative paths in a config file are resolved against.
///
/// A bare filename like "test-env.toml" (parent = "") resolves against the
/// current working directory.
fn config_root_dir(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
