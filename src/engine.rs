use crate::error::DocError;
use crate::options::{TreedocBuilder, TreedocOptions};
use crate::output::write_document;
use crate::paths::{absolutize, ensure_outside};
use crate::policy::ExclusionPolicy;
use crate::tree::build_tree;
use crate::types::{Document, FileBlock, FileContent};
use ignore::WalkBuilder;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// A walker over everything below `root`: hidden files and VCS directories
/// included, ignore files honoured only when asked for.
pub(crate) fn walk_builder(root: &Path, options: &TreedocOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .git_ignore(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .require_git(false)
        .follow_links(options.follow_links);
    builder
}

#[allow(unused_variables)]
pub(crate) fn report_walk_error(err: &ignore::Error) {
    #[cfg(feature = "logging")]
    tracing::warn!("Skipping entry: {}", err);
}

fn read_text(path: &Path) -> Result<String, DocError> {
    let bytes = fs::read(path).map_err(|e| DocError::file_read(path, e))?;
    String::from_utf8(bytes).map_err(|_| DocError::UnreadableFile {
        path: path.to_path_buf(),
    })
}

fn read_file_content(path: &Path) -> FileContent {
    match read_text(path) {
        Ok(text) => FileContent::Text(text),
        Err(DocError::UnreadableFile { .. }) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Non-text file skipped: {}", path.display());
            FileContent::Binary
        }
        Err(err) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Error reading {}: {}", path.display(), err);
            FileContent::Unreadable(err.to_string())
        }
    }
}

/// Collects the content blocks for `root`.
///
/// Each directory contributes its files sorted by name before any of its
/// subdirectories are visited. Unlike the tree listing, directories are
/// matched against every component of their absolute path, so an excluded
/// name anywhere above a file hides it.
fn collect_files(root: &Path, options: &TreedocOptions) -> Vec<FileBlock> {
    let mut builder = walk_builder(root, options);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    // Directories in walk order. A name-sorted depth-first walk meets them in
    // the same order a files-first walk would, so a stable sort on the index
    // of each file's directory yields the content order.
    let mut dirs: HashMap<PathBuf, usize> = HashMap::new();
    dirs.insert(root.to_path_buf(), 0);
    let mut found: Vec<(usize, PathBuf)> = Vec::new();
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
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_dir() {
            let index = dirs.len();
            dirs.insert(path.to_path_buf(), index);
            continue;
        }
        // Fifos and sockets never finish reading; unfollowed links to directories are leaves.
        if !(file_type.is_file() || file_type.is_symlink())
            || (file_type.is_symlink() && path.is_dir())
        {
            continue;
        }
        let Some(parent) = path.parent() else {
            continue;
        };
        if options.policy.excludes_dir_path(parent)
            || options
                .policy
                .excludes_file(&entry.file_name().to_string_lossy())
        {
            continue;
        }
        let index = dirs.get(parent).copied().unwrap_or(0);
        found.push((index, path.to_path_buf()));
    }
    found.sort_by_key(|(index, _)| *index);

    found
        .into_iter()
        .map(|(_, path)| {
            let content = read_file_content(&path);
            FileBlock { path, content }
        })
        .collect()
}

/// Checks the preconditions and returns the absolute directory to walk and
/// the resolved output path.
fn validate(options: &TreedocOptions) -> Result<(PathBuf, PathBuf), DocError> {
    let root = absolutize(&options.root)?;
    let target = absolutize(&options.target())?;
    if !target.is_dir() {
        return Err(DocError::RootNotFound { path: target });
    }
    let output = ensure_outside(&root, &options.output)?;
    Ok((target, output))
}

fn build(options: &TreedocOptions) -> Result<(Document, PathBuf), DocError> {
    let (target, output) = validate(options)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Documenting {}", target.display());
    let tree = build_tree(&target, options);
    let files = collect_files(&target, options);
    let document = Document {
        root: target,
        tree,
        files,
    };
    Ok((document, output))
}

/// Builds the document in memory without writing it.
///
/// Fails only on the preconditions: a missing root and an output path inside
/// the root. Per-file problems end up as placeholders in the document.
pub fn document(options: &TreedocOptions) -> Result<Document, DocError> {
    build(options).map(|(document, _)| document)
}

/// Builds the document and writes it to the configured output path.
///
/// The write goes to the output path as resolved by the containment check,
/// never to a path the check did not see.
pub fn run(options: &TreedocOptions) -> Result<Document, DocError> {
    let (document, output) = build(options)?;
    write_document(&document, options.format, &output)?;
    #[cfg(feature = "logging")]
    tracing::info!(
        files = document.files.len(),
        "Documentation written to {}",
        output.display()
    );
    Ok(document)
}

/// Documents `root_dir` with `policy` and writes the text document to `output_path`.
pub fn generate(
    root_dir: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    policy: &ExclusionPolicy,
) -> Result<(), DocError> {
    let options = TreedocBuilder::new(root_dir.as_ref(), output_path.as_ref())
        .policy(policy.clone())
        .build();
    run(&options).map(|_| ())
}
