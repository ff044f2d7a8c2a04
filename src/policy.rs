//! Exclusion policies and the two built-in presets.

use crate::error::DocError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Names, extensions and directories left out of a document.
///
/// File rules are checked against the file's own name. Directory rules are
/// checked against the basename in the tree listing and against every path
/// component in the content section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExclusionPolicy {
    /// Exact file names, e.g. `.env`.
    pub files: BTreeSet<String>,
    /// Name suffixes, e.g. `.log`. Matched with `ends_with`, so the dot is part of the rule.
    pub extensions: BTreeSet<String>,
    /// Directory names, e.g. `venv`.
    pub directories: BTreeSet<String>,
}

impl ExclusionPolicy {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn exclude_file(mut self, name: impl Into<String>) -> Self {
        self.files.insert(name.into());
        self
    }
    pub fn exclude_extension(mut self, suffix: impl Into<String>) -> Self {
        self.extensions.insert(suffix.into());
        self
    }
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.directories.insert(name.into());
        self
    }

    /// Adds every rule of `other` to this policy.
    pub fn merge(mut self, other: ExclusionPolicy) -> Self {
        self.files.extend(other.files);
        self.extensions.extend(other.extensions);
        self.directories.extend(other.directories);
        self
    }

    /// Loads a policy from a JSON file. Missing keys default to empty sets.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DocError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| DocError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|source| DocError::Policy {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn excludes_file(&self, name: &str) -> bool {
        self.files.contains(name) || self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }

    pub fn excludes_dir_name(&self, name: &str) -> bool {
        self.directories.contains(name)
    }

    /// True when any component of `path` names an excluded directory.
    pub fn excludes_dir_path(&self, path: &Path) -> bool {
        if self.directories.is_empty() {
            return false;
        }
        path.components().any(|component| match component {
            Component::Normal(name) => self.excludes_dir_name(&name.to_string_lossy()),
            _ => false,
        })
    }
}

/// A named policy together with the rule for picking the walked directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Walks the root itself, skipping Python caches, virtualenvs and secrets.
    Backend,
    /// Walks `root/src`, skipping images, logs and JSON.
    Frontend,
}

impl Preset {
    pub fn policy(self) -> ExclusionPolicy {
        match self {
            Preset::Backend => ExclusionPolicy::new()
                .exclude_file(".env")
                .exclude_file(".DS_Store")
                .exclude_extension(".pyc")
                .exclude_extension(".log")
                .exclude_dir("__pycache__")
                .exclude_dir("venv"),
            Preset::Frontend => ExclusionPolicy::new()
                .exclude_file(".DS_Store")
                .exclude_extension(".log")
                .exclude_extension(".png")
                .exclude_extension(".ico")
                .exclude_extension(".jpg")
                .exclude_extension(".json"),
        }
    }

    /// Subdirectory of the root that gets documented, if any.
    pub fn subdir(self) -> Option<PathBuf> {
        match self {
            Preset::Backend => None,
            Preset::Frontend => Some(PathBuf::from("src")),
        }
    }

    /// Documents `root` with this preset and writes the result to `output`.
    pub fn generate(self, root: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), DocError> {
        let options = crate::TreedocBuilder::new(root.as_ref(), output.as_ref())
            .preset(self)
            .build();
        crate::run(&options).map(|_| ())
    }
}
