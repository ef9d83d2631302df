//! Operator-facing error reporting
//!
//! Every subsystem error knows whether it describes something the operator can
//! fix (a bad flag, an unknown scanner, a missing binary) or a system fault
//! (an I/O failure while writing results). Fatal errors are reported through
//! [`log_error_with_context`] so both kinds read consistently in the log.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)`; otherwise it should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if this error carries a message the operator can act on
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Build the single `FATAL` line shown to the operator for an error
pub fn fatal_message<E: ContextualError + std::fmt::Display>(
    error: &E,
    operation_context: &str,
) -> String {
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => format!("FATAL: {}", user_msg),
        _ => format!("FATAL: {}: {}", operation_context, error),
    }
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors show their own message. System errors show the
/// operation context followed by the error. Full debug detail is always
/// emitted at debug level.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    log::error!("{}", fatal_message(error, operation_context));
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
