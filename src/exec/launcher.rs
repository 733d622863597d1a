// src/exec/launcher.rs

//! The executable launcher.
//!
//! Every run gets the same two variables, whatever the caller passed in:
//!
//! - `LANGUAGE=en_US.UTF-8`, because many tests compare English output.
//! - `CR_SOURCE_ROOT=<source root>`, read by code under test that needs to
//!   locate the source tree.
//!
//! Commands whose program ends with the script suffix are run through the
//! configured interpreter, so scripts don't need execute permission or a
//! working shebang.

use std::io;
use std::process::{Command, ExitStatus};

use tracing::{debug, error};

use crate::config::LauncherSection;
use crate::config::validate::validate_launcher;
use crate::errors::{LauncherError, Result};
use crate::types::{CommandVector, Environment};

use super::source_root;
use super::spawner::{OsSpawner, Spawner};

pub const LOCALE_VAR: &str = "LANGUAGE";
pub const LOCALE_VALUE: &str = "en_US.UTF-8";
pub const SOURCE_ROOT_VAR: &str = "CR_SOURCE_ROOT";

/// Decides whether a command is a script and which interpreter runs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRunner {
    suffix: String,
    interpreter: String,
}

impl ScriptRunner {
    pub fn new(suffix: impl Into<String>, interpreter: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            interpreter: interpreter.into(),
        }
    }

    pub fn is_script(&self, program: &str) -> bool {
        program.ends_with(&self.suffix)
    }

    /// Final argv for `command`: the interpreter is prepended once for
    /// scripts, everything else is left alone.
    pub fn resolve(&self, command: CommandVector) -> Vec<String> {
        let is_script = self.is_script(command.program());
        let mut argv = command.into_vec();
        if is_script {
            argv.insert(0, self.interpreter.clone());
        }
        argv
    }
}

/// A fully prepared child process: argv plus the exact environment it gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<String>,
    env: Environment,
}

impl Invocation {
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Build the `std::process::Command` for this invocation.
    ///
    /// The child sees exactly [`Invocation::env`]; nothing else from the
    /// launcher's own environment leaks through.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.args(self.args()).env_clear().envs(self.env.iter());
        cmd
    }

    /// Run to completion with inherited stdio and return the exit status.
    pub fn status(&self) -> io::Result<i32> {
        let status = self.to_command().status()?;
        Ok(exit_code(status))
    }
}

/// Exit code of a finished child. On Unix a signal death is reported as the
/// negated signal number.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}

/// Launches commands with the fixed test environment.
#[derive(Debug, Clone)]
pub struct Launcher<S = OsSpawner> {
    source_root: String,
    scripts: ScriptRunner,
    spawner: S,
}

impl Launcher<OsSpawner> {
    /// Launcher with an explicit, already resolved source root. The root is
    /// exported as given; use [`Launcher::from_config`] to have it checked.
    pub fn new(source_root: impl Into<String>, scripts: ScriptRunner) -> Self {
        Self {
            source_root: source_root.into(),
            scripts,
            spawner: OsSpawner,
        }
    }

    /// Build a launcher from a `[launcher]` config section.
    pub fn from_config(section: &LauncherSection) -> Result<Self> {
        validate_launcher(section)?;
        let source_root = source_root::resolve(section.source_root.as_deref())?;
        Ok(Self::new(
            source_root,
            ScriptRunner::new(&section.script_suffix, &section.interpreter),
        ))
    }
}

impl<S: Spawner> Launcher<S> {
    /// Swap the process creation backend.
    pub fn with_spawner<T: Spawner>(self, spawner: T) -> Launcher<T> {
        Launcher {
            source_root: self.source_root,
            scripts: self.scripts,
            spawner,
        }
    }

    pub fn source_root(&self) -> &str {
        &self.source_root
    }

    /// Apply the fixed variables and interpreter rule without spawning.
    pub fn prepare(&self, command: CommandVector, mut env: Environment) -> Invocation {
        env.set(LOCALE_VAR, LOCALE_VALUE);
        env.set(SOURCE_ROOT_VAR, &self.source_root);

        let argv = self.scripts.resolve(command);
        debug!(
            argv = ?argv,
            source_root = %self.source_root,
            "prepared invocation"
        );

        Invocation { argv, env }
    }

    /// Prepare and run `command`, blocking until it exits.
    ///
    /// A non-zero exit is returned as-is. Failing to start the process is
    /// logged once with the command and returned as
    /// [`LauncherError::Launch`] wrapping the original `io::Error`. The
    /// diagnostic is a `tracing` event, so it only reaches stderr when a
    /// subscriber is installed (the CLI does this via `logging::init_logging`).
    pub fn run(&mut self, command: CommandVector, env: Environment) -> Result<i32> {
        let invocation = self.prepare(command, env);

        match self.spawner.spawn_and_wait(&invocation) {
            Ok(code) => {
                debug!(program = %invocation.program(), exit_code = code, "process exited");
                Ok(code)
            }
            Err(err) => {
                error!(command = ?invocation.argv(), error = %err, "failed to start process");
                Err(LauncherError::Launch(err))
            }
        }
    }
}
