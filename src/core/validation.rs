//! Validation utilities for CLI arguments and configuration values

use crate::core::error_handling::ContextualError;

/// Configuration error raised while validating arguments or the config file
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    /// Human readable description of what is wrong
    pub fn details(&self) -> &str {
        &self.message
    }
}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<String> {
        Some(self.message.clone())
    }
}

/// Split comma-separated scanner names, trimming blanks and dropping repeats
///
/// The first occurrence of a name wins so declaration order is preserved.
pub fn parse_scanner_names(values: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for value in values {
        for name in value.split(',') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Validate and normalize a domain suffix (leading dots are stripped)
pub fn validate_suffix(suffix: &str) -> Result<String, ValidationError> {
    let cleaned = suffix.trim().trim_start_matches('.');

    if cleaned.is_empty() {
        return Err(ValidationError::new("Domain suffix cannot be empty"));
    }

    if cleaned.chars().any(|c| c.is_whitespace() || c == ',') {
        return Err(ValidationError::new(&format!(
            "Domain suffix '{}' cannot contain whitespace or commas",
            suffix
        )));
    }

    Ok(cleaned.to_string())
}

/// Parse a scanner option given as `KEY=VALUE`
pub fn parse_option(raw: &str) -> Result<(String, String), ValidationError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(ValidationError::new(&format!(
            "Scanner option '{}' must be given as KEY=VALUE",
            raw
        ))),
    }
}
