use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an item collection document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document does not match the collection schema:\n{}", .0.join("\n"))]
    Schema(Vec<String>),

    #[error("validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),
}

impl LoadError {
    /// Individual problems for schema and validation failures
    pub fn problems(&self) -> &[String] {
        match self {
            LoadError::Schema(problems) | LoadError::Validation(problems) => problems,
            _ => &[],
        }
    }
}
