// src/config/validate.rs

use crate::config::model::{ConfigFile, LauncherSection};
use crate::errors::{LauncherError, Result};

/// Check the invariants serde can't express.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_launcher(&cfg.launcher)
}

pub(crate) fn validate_launcher(section: &LauncherSection) -> Result<()> {
    if section.script_suffix.is_empty() || !section.script_suffix.starts_with('.') {
        return Err(LauncherError::ConfigError(format!(
            "[launcher].script_suffix must start with '.' (got {:?})",
            section.script_suffix
        )));
    }

    if section.interpreter.trim().is_empty() {
        return Err(LauncherError::ConfigError(
            "[launcher].interpreter must not be empty".to_string(),
        ));
    }

    if let Some(root) = &section.source_root {
        if root.as_os_str().is_empty() {
            return Err(LauncherError::ConfigError(
                "[launcher].source_root must not be empty".to_string(),
            ));
        }
    }

    Ok(())
}
