// src/exec/spawner.rs

//! Pluggable process creation.
//!
//! The launcher hands every prepared [`Invocation`] to a `Spawner` instead of
//! calling `std::process::Command` directly. Production code uses
//! [`OsSpawner`]; tests can record invocations or simulate launch failures.

use std::io;

use super::launcher::Invocation;

/// Trait abstracting how a prepared invocation is executed.
pub trait Spawner {
    /// Start the invocation, block until it exits and return its exit status.
    ///
    /// An `Err` means the process could not be created at all.
    fn spawn_and_wait(&mut self, invocation: &Invocation) -> io::Result<i32>;
}

/// Runs invocations as real child processes with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSpawner;

impl Spawner for OsSpawner {
    fn spawn_and_wait(&mut self, invocation: &Invocation) -> io::Result<i32> {
        invocation.status()
    }
}
