use crate::output::OutputFormat;
use crate::policy::{ExclusionPolicy, Preset};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreedocOptions {
    /// Directory the output must stay outside of.
    pub root: PathBuf,
    /// Directory below `root` that is actually walked. `None` walks `root`.
    pub subdir: Option<PathBuf>,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub policy: ExclusionPolicy,
    pub follow_links: bool,
    pub respect_gitignore: bool,
}
impl TreedocOptions {
    /// The directory both passes start from.
    pub fn target(&self) -> PathBuf {
        match &self.subdir {
            Some(sub) => self.root.join(sub),
            None => self.root.clone(),
        }
    }
}
#[derive(Debug)]
pub struct TreedocBuilder {
    options: TreedocOptions,
}
impl TreedocBuilder {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            options: TreedocOptions {
                root: root.into(),
                subdir: None,
                output: output.into(),
                format: OutputFormat::Text,
                policy: ExclusionPolicy::default(),
                follow_links: false,
                respect_gitignore: false,
            },
        }
    }
    pub fn policy(mut self, policy: ExclusionPolicy) -> Self {
        self.options.policy = policy;
        self
    }
    /// Replaces the policy and subdirectory with the preset's.
    pub fn preset(mut self, preset: Preset) -> Self {
        self.options.policy = preset.policy();
        self.options.subdir = preset.subdir();
        self
    }
    pub fn subdir(mut self, subdir: Option<PathBuf>) -> Self {
        self.options.subdir = subdir;
        self
    }
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.options.format = format;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn build(self) -> TreedocOptions {
        self.options
    }
}
