// src/exec/source_root.rs

//! Resolution of the source root exported to the child.
//!
//! The built-in default assumes this crate lives one directory below the
//! source root (`<src>/testing/Cargo.toml`), so the root is two levels above
//! the manifest file.

use std::path::{Component, Path, PathBuf};

use crate::errors::{LauncherError, Result};

/// Two levels above this crate's manifest file.
pub fn default_source_root() -> Result<PathBuf> {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    ancestor(&manifest, 2)
}

/// Walk `levels` directories up from the absolute form of `path`.
pub fn ancestor(path: &Path, levels: usize) -> Result<PathBuf> {
    let mut current = absolutize(path)?;
    for _ in 0..levels {
        if !current.pop() {
            return Err(LauncherError::SourceRoot(format!(
                "{} has fewer than {levels} parent directories",
                path.display()
            )));
        }
    }
    Ok(current)
}

/// Resolve the source root to an absolute, UTF-8 string.
///
/// `explicit` wins over the built-in default. The directory must exist.
pub fn resolve(explicit: Option<&Path>) -> Result<String> {
    let root = match explicit {
        Some(path) => absolutize(path)?,
        None => default_source_root()?,
    };

    if !root.is_dir() {
        return Err(LauncherError::SourceRoot(format!(
            "{} does not exist",
            root.display()
        )));
    }

    root.to_str().map(str::to_string).ok_or_else(|| {
        LauncherError::SourceRoot(format!("{} is not valid UTF-8", root.display()))
    })
}

/// Absolute path with `.` and `..` folded lexically. Symlinks are kept.
fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| {
        LauncherError::SourceRoot(format!("cannot make {} absolute: {e}", path.display()))
    })?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_root_is_parent_of_crate_dir() {
        let root = default_source_root().unwrap();
        let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        assert_eq!(Some(root.as_path()), crate_dir.parent());
    }

    #[cfg(unix)]
    #[test]
    fn ancestor_folds_dot_dot() {
        let root = ancestor(Path::new("/a/b/../c/./d/file"), 2).unwrap();
        assert_eq!(root, PathBuf::from("/a/c"));
    }

    #[cfg(unix)]
    #[test]
    fn ancestor_past_filesystem_root_fails() {
        let err = ancestor(Path::new("/file"), 2).unwrap_err();
        assert!(matches!(err, LauncherError::SourceRoot(_)));
    }

    #[test]
    fn relative_override_becomes_absolute() {
        // Integration tests and unit tests run from the package root.
        let resolved = resolve(Some(Path::new("src/exec"))).unwrap();
        assert!(Path::new(&resolved).is_absolute());
        assert!(resolved.ends_with("exec"));
    }

    #[test]
    fn missing_directory_is_rejected() {
        match resolve(Some(Path::new("/nonexistent/test-env/src"))) {
            Err(LauncherError::SourceRoot(msg)) => assert!(msg.contains("does not exist")),
            other => panic!("expected SourceRoot error, got {other:?}"),
        }
    }

    #[test]
    fn file_is_not_a_source_root() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        assert!(matches!(
            resolve(Some(&manifest)),
            Err(LauncherError::SourceRoot(_))
        ));
    }
}
