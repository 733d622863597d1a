// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `test-env`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "test-env",
    version,
    about = "Run a test executable with a reproducible locale and source root.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `test-env.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory exported as `CR_SOURCE_ROOT`.
    #[arg(long, value_name = "PATH")]
    pub source_root: Option<PathBuf>,

    /// Interpreter prepended when the command is a script.
    #[arg(long, value_name = "PATH")]
    pub interpreter: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TEST_ENV_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the prepared invocation, but don't run it.
    #[arg(long)]
    pub dry_run: bool,

    /// Program (or script) to run, followed by its arguments.
    ///
    /// Everything after the program is passed through verbatim, even if it
    /// looks like a flag.
    #[arg(required = true, trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
