//! Scanner Error Types

use crate::core::error_handling::ContextualError;

/// Errors raised while resolving, validating, initialising or running scanners
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    /// No scanner registered under this name
    #[error("Scanner '{name}' is not registered (available: {available})")]
    NotFound { name: String, available: String },

    /// Two registrations share a name
    #[error("Scanner '{name}' is registered more than once")]
    DuplicateName { name: String },

    /// The external command a scanner depends on is not installed
    #[error("Scanner '{scanner}' requires command '{command}', which was not found on PATH")]
    MissingCommand { scanner: String, command: String },

    /// The scanner's init hook returned false or failed
    #[error("Scanner '{scanner}' failed to initialise: {reason}")]
    InitFailed { scanner: String, reason: String },

    /// A scan raised an unhandled fault
    #[error("Scanner '{scanner}' failed while scanning '{domain}': {cause}")]
    ScanFailed {
        scanner: String,
        domain: String,
        cause: String,
    },

    /// An I/O error inside a scanner implementation
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContextualError for ScannerError {
    fn is_user_actionable(&self) -> bool {
        matches!(
            self,
            ScannerError::NotFound { .. }
                | ScannerError::DuplicateName { .. }
                | ScannerError::MissingCommand { .. }
                | ScannerError::InitFailed { .. }
        )
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}

pub type ScannerResult<T> = Result<T, ScannerError>;
