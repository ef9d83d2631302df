//! Domain Source Error Types

use crate::core::error_handling::ContextualError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// The domain file does not exist
    #[error("Domain file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Reading or parsing the domain file failed
    #[error("Failed to read domains from '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContextualError for DomainError {
    fn is_user_actionable(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
