//! Internal module for rendering the directory listing.

use crate::engine::{report_walk_error, walk_builder};
use crate::options::TreedocOptions;
use crate::paths::root_label;
use std::path::Path;

/// Prefix of every listed entry.
pub const TREE_BRANCH: &str = "├── ";
/// Repeated once per level above the entry.
pub const TREE_PIPE: &str = "│   ";

/// Builds the tree listing for `root`.
///
/// Entries are listed depth first, each directory's children sorted by name,
/// so directories and files interleave. Excluded directories are pruned by
/// basename together with everything beneath them; excluded files get no line.
/// The first line is the root's own name followed by `/`.
pub(crate) fn build_tree(root: &Path, options: &TreedocOptions) -> Vec<String> {
    let mut builder = walk_builder(root, options);
    let prune = options.policy.clone();
    builder
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            entry.depth() == 0
                || !entry.path().is_dir()
                || !prune.excludes_dir_name(&entry.file_name().to_string_lossy())
        });

    let mut lines = vec![root_label(root)];
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                report_walk_error(&err);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        let prefix = TREE_PIPE.repeat(entry.depth() - 1) + TREE_BRANCH;
        let path = entry.path();
        if path.is_dir() {
            lines.push(format!("{}{}/", prefix, name));
        } else if path.is_file() && !options.policy.excludes_file(&name) {
            lines.push(format!("{}{}", prefix, name));
        }
    }

    #[cfg(feature = "logging")]
    tracing::debug!(lines = lines.len(), "tree listing built for {}", root.display());
    lines
}
