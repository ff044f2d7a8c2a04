//! Path resolution for the root and output checks.

use crate::error::DocError;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute against the current directory and folds `.` and `..`
/// lexically, without touching symlinks.
pub(crate) fn absolutize(path: &Path) -> Result<PathBuf, DocError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|e| DocError::io(PathBuf::from("."), e))?;
        cwd.join(path)
    };
    let mut normalized = PathBuf::new();
    for component in joined.components() {
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

/// Resolves a path that may not exist yet: the deepest existing ancestor of
/// the path as given is canonicalized, so `..` after a symlink resolves the
/// way the OS resolves it, and the missing components are appended.
///
/// A `..` among the missing components can never be opened, so it is refused.
pub(crate) fn resolve_output(path: &Path) -> Result<PathBuf, DocError> {
    let mut existing = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir().map_err(|e| DocError::io(PathBuf::from("."), e))?;
        cwd.join(path)
    };
    let mut missing: Vec<OsString> = Vec::new();
    // lstat, so a dangling symlink counts as existing and fails to canonicalize.
    while fs::symlink_metadata(&existing).is_err() {
        match existing.components().next_back() {
            Some(Component::Normal(name)) => {
                missing.push(name.to_os_string());
                existing.pop();
            }
            Some(Component::CurDir) => {
                existing.pop();
            }
            Some(Component::ParentDir) => {
                return Err(DocError::io(
                    path,
                    io::Error::new(io::ErrorKind::NotFound, "`..` below a missing directory"),
                ));
            }
            _ => break,
        }
    }
    let canonical = fs::canonicalize(&existing).map_err(|e| DocError::io(&existing, e))?;
    Ok(missing.iter().rev().fold(canonical, |acc, name| acc.join(name)))
}

/// Fails with [`DocError::OutputInsideRoot`] when `output` is `root` or lies
/// below it. Returns the resolved output path, which is where the document
/// must be written.
pub(crate) fn ensure_outside(root: &Path, output: &Path) -> Result<PathBuf, DocError> {
    let canonical_root = fs::canonicalize(root).map_err(|e| DocError::io(root, e))?;
    let resolved = resolve_output(output)?;
    if resolved.starts_with(&canonical_root) {
        return Err(DocError::OutputInsideRoot {
            output: resolved,
            root: canonical_root,
        });
    }
    Ok(resolved)
}

/// Name shown on the first line of the tree, `/` for the filesystem root.
pub(crate) fn root_label(root: &Path) -> String {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}/", name)
}
