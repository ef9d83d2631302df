//! Run Error Types

use crate::core::error_handling::ContextualError;
use crate::core::validation::ValidationError;
use crate::domains::error::DomainError;
use crate::output::error::OutputError;
use crate::scanner::error::ScannerError;

/// Any error that aborts a run
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Scanner(#[from] ScannerError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl ContextualError for RunError {
    fn is_user_actionable(&self) -> bool {
        match self {
            RunError::Validation(e) => e.is_user_actionable(),
            RunError::Scanner(e) => e.is_user_actionable(),
            RunError::Domain(e) => e.is_user_actionable(),
            RunError::Output(e) => e.is_user_actionable(),
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            RunError::Validation(e) => e.user_message(),
            RunError::Scanner(e) => e.user_message(),
            RunError::Domain(e) => e.user_message(),
            RunError::Output(e) => e.user_message(),
        }
    }
}

pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_actionability_follows_source() {
        let err = RunError::from(ScannerError::MissingCommand {
            scanner: "whois".to_string(),
            command: "whois".to_string(),
        });
        assert!(err.is_user_actionable());
        assert!(err.user_message().unwrap().contains("whois"));

        let err = RunError::from(OutputError::io(
            PathBuf::from("results/noop.csv"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert!(!err.is_user_actionable());
        assert!(err.user_message().is_none());
    }

    #[test]
    fn test_display_is_transparent() {
        let err = RunError::from(ValidationError::new("No scanners selected"));
        assert_eq!(err.to_string(), "No scanners selected");
    }
}
