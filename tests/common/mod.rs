#![allow(dead_code)]

pub use test_env_test_utils::builders;
pub use test_env_test_utils::{capture_logs, init_tracing, RecordingSpawner};

use test_env::types::{CommandVector, Environment};

pub fn cmd(argv: &[&str]) -> CommandVector {
    CommandVector::try_from(argv).expect("non-empty command")
}

/// Minimal environment for real child processes: just enough `PATH` to find
/// `sh`.
pub fn path_only_env() -> Environment {
    let mut env = Environment::new();
    if let Some(path) = std::env::var_os("PATH") {
        env.set("PATH", path);
    }
    env
}
