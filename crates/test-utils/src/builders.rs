use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use test_env::config::LauncherSection;
use test_env::exec::{Launcher, ScriptRunner};

/// Builder for `LauncherSection` to simplify test setup.
pub struct LauncherSectionBuilder {
    section: LauncherSection,
}

impl LauncherSectionBuilder {
    pub fn new() -> Self {
        Self {
            section: LauncherSection::default(),
        }
    }

    pub fn source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.section.source_root = Some(root.into());
        self
    }

    pub fn script_suffix(mut self, suffix: &str) -> Self {
        self.section.script_suffix = suffix.to_string();
        self
    }

    pub fn interpreter(mut self, interpreter: &str) -> Self {
        self.section.interpreter = interpreter.to_string();
        self
    }

    pub fn build(self) -> LauncherSection {
        self.section
    }

    pub fn launcher(self) -> Launcher {
        Launcher::from_config(&self.section).expect("Failed to build launcher from section")
    }
}

impl Default for LauncherSectionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Launcher treating `.sh` files as scripts run by `sh`.
pub fn shell_script_launcher(source_root: &str) -> Launcher {
    Launcher::new(source_root, ScriptRunner::new(".sh", "sh"))
}

/// Write a script with read/write permission only (no execute bit).
pub fn write_script(dir: &Path, name: &str, body: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, body)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))?;
    }

    Ok(path)
}
