//! # Treedoc
//!
//! `treedoc` snapshots a directory into a single text document: a rendered tree
//! of the hierarchy followed by the content of every included file, each block
//! annotated with the file's absolute path.
//!
//! The document is built in two independent passes. The tree listing walks
//! depth first with files and directories interleaved by name and prunes
//! excluded directories by basename. The content section lists each directory's
//! files before its subdirectories and skips files below any path component
//! naming an excluded directory. Files that are not UTF-8 and files that cannot
//! be read are replaced by a placeholder line instead of failing the run.
//!
//! # Features
//!
//! - `logging`: Emits progress and skipped entries via the `tracing` crate (enabled by default).
//!
//! # Example
//!
//! ```no_run
//! use treedoc::{ExclusionPolicy, Preset, generate};
//!
//! // Built-in preset: skips `__pycache__`, `venv`, `.env`, `*.pyc` and `*.log`.
//! Preset::Backend
//!     .generate("./backend", "backend_documentation.txt")
//!     .expect("Failed to document directory");
//!
//! // Custom policy.
//! let policy = ExclusionPolicy::new()
//!     .exclude_dir("target")
//!     .exclude_extension(".lock");
//! generate(".", "../snapshot.txt", &policy).expect("Failed to document directory");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod paths;
mod policy;
mod tree;
mod types;

pub use engine::{document, generate, run};
pub use error::DocError;
pub use options::{TreedocBuilder, TreedocOptions};
pub use output::OutputFormat;
pub use policy::{ExclusionPolicy, Preset};
pub use tree::{TREE_BRANCH, TREE_PIPE};
pub use types::{BINARY_PLACEHOLDER, CONTENT_MARKER, Document, FileBlock, FileContent};
