use std::io;
use std::sync::{Arc, Mutex};

use test_env::exec::{Invocation, Spawner};

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Exit(i32),
    Fail(io::ErrorKind),
}

/// A fake spawner that:
/// - records every invocation it was asked to run
/// - reports a fixed exit status, or fails to "start" with a fixed error kind.
///
/// Clones share the same record, so keep one handle for assertions and give
/// the other to the launcher.
#[derive(Debug, Clone)]
pub struct RecordingSpawner {
    outcome: Outcome,
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingSpawner {
    pub fn exiting(code: i32) -> Self {
        Self {
            outcome: Outcome::Exit(code),
            invocations: Arc::default(),
        }
    }

    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            outcome: Outcome::Fail(kind),
            invocations: Arc::default(),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl Spawner for RecordingSpawner {
    fn spawn_and_wait(&mut self, invocation: &Invocation) -> io::Result<i32> {
        self.invocations.lock().unwrap().push(invocation.clone());
        match self.outcome {
            Outcome::Exit(code) => Ok(code),
            Outcome::Fail(kind) => Err(io::Error::new(kind, "simulated spawn failure")),
        }
    }
}
