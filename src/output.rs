//! Output formatting for documents.
//!
//! The text format is the compatibility surface: a tree listing, the
//! `// Content` marker, then one `// File: {path}` block per file. JSON
//! carries the same data for tools that would rather not parse that layout.

use crate::{DocError, Document};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the document into a string.
pub fn format_document(document: &Document, format: OutputFormat) -> Result<String, DocError> {
    match format {
        OutputFormat::Text => Ok(document.render()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
    }
}

/// Writes the formatted document to `path` in a single write, replacing any
/// existing file.
pub fn write_document(
    document: &Document,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), DocError> {
    let content = format_document(document, format)?;
    fs::write(&path, content).map_err(|e| DocError::io(path.as_ref(), e))?;
    Ok(())
}
