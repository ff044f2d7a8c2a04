use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DocError {
    #[error("Root directory not found: {}", path.display())]
    RootNotFound { path: PathBuf },
    #[error(
        "Output file {} is inside the directory {}",
        output.display(),
        root.display()
    )]
    OutputInsideRoot { output: PathBuf, root: PathBuf },
    /// The file is not valid UTF-8 text.
    #[error("Non-text content in {}", path.display())]
    UnreadableFile { path: PathBuf },
    /// Any other failure while reading a single file.
    #[error("{source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid exclusion policy in {}: {source}", path.display())]
    Policy {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
impl DocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocError::FileRead {
            path: path.into(),
            source,
        }
    }
}
