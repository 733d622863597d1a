// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`launcher`] prepares an invocation (fixed environment, interpreter
//!   for scripts) and runs it to completion.
//! - [`source_root`] resolves the directory exported as `CR_SOURCE_ROOT`.
//! - [`spawner`] provides the `Spawner` trait and the `OsSpawner` used in
//!   production, which tests can replace with a recording fake.

pub mod launcher;
pub mod source_root;
pub mod spawner;

pub use launcher::{
    Invocation, Launcher, ScriptRunner, LOCALE_VALUE, LOCALE_VAR, SOURCE_ROOT_VAR,
};
pub use spawner::{OsSpawner, Spawner};
