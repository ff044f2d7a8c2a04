use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Marker placed between the tree listing and the file contents.
pub const CONTENT_MARKER: &str = "\n\n// Content\n";
/// Placeholder for files that are not valid UTF-8.
pub const BINARY_PLACEHOLDER: &str = "// [Binary or non-text file skipped]\n";

/// What the content pass found for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FileContent {
    /// The file decoded as text, kept byte for byte.
    Text(String),
    /// The file did not decode as UTF-8.
    Binary,
    /// Reading failed; holds the error message.
    Unreadable(String),
}

impl FileContent {
    /// The text placed under the file's path annotation.
    pub fn as_segment(&self) -> String {
        match self {
            FileContent::Text(text) => text.clone(),
            FileContent::Binary => BINARY_PLACEHOLDER.to_string(),
            FileContent::Unreadable(message) => format!("// [Error reading file: {}]\n", message),
        }
    }
}

/// A single file block of the content section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileBlock {
    /// Absolute path of the file.
    pub path: PathBuf,
    pub content: FileContent,
}

impl FileBlock {
    pub fn annotation(&self) -> String {
        format!("\n// File: {}\n", self.path.display())
    }
}

/// The complete result of documenting a directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Absolute path of the walked directory.
    pub root: PathBuf,
    /// Tree listing, starting with the `name/` line of the root itself.
    pub tree: Vec<String>,
    /// File blocks in content-pass order.
    pub files: Vec<FileBlock>,
}

impl Document {
    /// The ordered text segments of the document: tree lines, the content
    /// marker, then an annotation and a body per file.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = Vec::with_capacity(self.tree.len() + 1 + self.files.len() * 2);
        segments.extend(self.tree.iter().cloned());
        segments.push(CONTENT_MARKER.to_string());
        for file in &self.files {
            segments.push(file.annotation());
            segments.push(file.content.as_segment());
        }
        segments
    }

    /// The plain text document, segments joined by newlines.
    pub fn render(&self) -> String {
        self.segments().join("\n")
    }
}
