// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{load_optional, LauncherSection};
use crate::exec::{Invocation, Launcher, LOCALE_VAR, SOURCE_ROOT_VAR};
use crate::types::{CommandVector, Environment};

/// High-level entry point used by `main.rs`.
///
/// Loads the optional config, applies CLI overrides, then runs the command
/// against a snapshot of the current environment. Returns the child's exit
/// status.
pub fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_optional(args.config.as_deref()).context("loading configuration")?;
    let section = apply_overrides(cfg.launcher, &args);

    let mut launcher = Launcher::from_config(&section)?;
    let command = CommandVector::try_from(args.command)?;
    let env = Environment::from_current();

    if args.dry_run {
        print_dry_run(&launcher.prepare(command, env));
        return Ok(0);
    }

    Ok(launcher.run(command, env)?)
}

/// CLI flags take precedence over the config file.
fn apply_overrides(mut section: LauncherSection, args: &CliArgs) -> LauncherSection {
    if let Some(root) = &args.source_root {
        section.source_root = Some(root.clone());
    }
    if let Some(interpreter) = &args.interpreter {
        section.interpreter = interpreter.clone();
    }
    section
}

/// Simple dry-run output: the argv and the variables the launcher sets.
fn print_dry_run(invocation: &Invocation) {
    println!("test-env dry-run");
    println!("  program: {}", invocation.program());
    if !invocation.args().is_empty() {
        println!("  args: {:?}", invocation.args());
    }
    for key in [LOCALE_VAR, SOURCE_ROOT_VAR] {
        if let Some(value) = invocation.env().get_str(key) {
            println!("  {key}={value}");
        }
    }

    debug!(vars = invocation.env().len(), "dry-run complete (no execution)");
}
