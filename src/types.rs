use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

use crate::errors::LauncherError;

/// A program invocation: element 0 is the program or script, the rest are
/// its arguments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandVector(Vec<String>);

impl CommandVector {
    pub fn program(&self) -> &str {
        &self.0[0]
    }

    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl TryFrom<Vec<String>> for CommandVector {
    type Error = LauncherError;

    fn try_from(argv: Vec<String>) -> std::result::Result<Self, Self::Error> {
        if argv.is_empty() {
            return Err(LauncherError::EmptyCommand);
        }
        Ok(Self(argv))
    }
}

impl TryFrom<&[&str]> for CommandVector {
    type Error = LauncherError;

    fn try_from(argv: &[&str]) -> std::result::Result<Self, Self::Error> {
        Self::try_from(argv.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }
}

/// Owned set of environment variables handed to a child process.
///
/// Always an owned snapshot: mutating it never touches the environment of
/// the current process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    pub fn from_current() -> Self {
        std::env::vars_os().collect()
    }

    /// Insert or overwrite a variable.
    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    /// Like [`Environment::get`], but only for values that are valid UTF-8.
    pub fn get_str(&self, key: impl AsRef<OsStr>) -> Option<&str> {
        self.get(key).and_then(OsStr::to_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<OsString>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}
