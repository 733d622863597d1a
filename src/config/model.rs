// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [launcher]
/// source_root = "../.."
/// script_suffix = ".py"
/// interpreter = "python3"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Launcher behaviour from `[launcher]`.
    #[serde(default)]
    pub launcher: LauncherSection,
}

/// `[launcher]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherSection {
    /// Directory exported as `CR_SOURCE_ROOT`.
    ///
    /// If `None`, the directory two levels above this crate's manifest is
    /// used. Relative paths are resolved against the config file's directory.
    #[serde(default)]
    pub source_root: Option<PathBuf>,

    /// Commands whose program ends with this suffix run under `interpreter`.
    #[serde(default = "default_script_suffix")]
    pub script_suffix: String,

    /// Interpreter prepended to script commands.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
}

fn default_script_suffix() -> String {
    ".py".to_string()
}

fn default_interpreter() -> String {
    "python3".to_string()
}

impl Default for LauncherSection {
    fn default() -> Self {
        Self {
            source_root: None,
            script_suffix: default_script_suffix(),
            interpreter: default_interpreter(),
        }
    }
}
