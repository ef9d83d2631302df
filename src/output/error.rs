//! Output Error Types

use crate::core::error_handling::ContextualError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scanner produced a row that does not fit its declared headers
    #[error(
        "Scanner '{scanner}' produced {actual} values for '{domain}' but declares {expected} headers"
    )]
    ColumnCount {
        scanner: String,
        domain: String,
        expected: usize,
        actual: usize,
    },

    /// A row was routed to a table index the sink does not have
    #[error("No output table at index {index} ({tables} tables open)")]
    NoTable { index: usize, tables: usize },

    #[error("Malformed table '{}': {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    #[error("Failed to serialise run metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl OutputError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OutputError::Io {
            path: path.into(),
            source,
        }
    }
}

impl ContextualError for OutputError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, OutputError::ColumnCount { .. })
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

pub type OutputResult<T> = Result<T, OutputError>;
