//! CLI argument validation utilities
//!
//! Checks the merged arguments for consistency and turns them into the single
//! immutable [`RunConfig`] the run is driven by.

use crate::core::config::{RunConfig, DEFAULT_OUTPUT_DIR};
use crate::core::validation::{parse_option, parse_scanner_names, validate_suffix, ValidationError};
use std::path::PathBuf;

use super::args::Args;

impl Args {
    /// Validate CLI arguments for consistency and constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_input()?;
        self.validate_scanners()?;
        if let Some(suffix) = &self.suffix {
            validate_suffix(suffix)?;
        }
        for option in &self.options {
            parse_option(option)?;
        }
        Ok(())
    }

    /// The input is passed on as given; blank input is rejected
    fn validate_input(&self) -> Result<&str, ValidationError> {
        match self.input.as_deref() {
            Some(input) if !input.trim().is_empty() => Ok(input),
            _ => Err(ValidationError::new(
                "No input given; pass a domain or a .csv file of domains",
            )),
        }
    }

    fn validate_scanners(&self) -> Result<Vec<String>, ValidationError> {
        let names = parse_scanner_names(&self.scan);
        if names.is_empty() {
            return Err(ValidationError::new(
                "No scanners selected; use --scan NAMES (see --list-scanners)",
            ));
        }
        Ok(names)
    }

    /// Build the run configuration from validated arguments
    pub fn to_run_config(&self, command_line: &str) -> Result<RunConfig, ValidationError> {
        self.validate()?;
        let input = self.validate_input()?;
        let scanners = self.validate_scanners()?;

        let mut config = RunConfig::new(input, scanners)
            .with_output_dir(
                self.output
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            )
            .with_sort(self.sort)
            .with_command_line(command_line);

        if let Some(suffix) = &self.suffix {
            config = config.with_suffix(validate_suffix(suffix)?);
        }
        for option in &self.options {
            let (key, value) = parse_option(option)?;
            config = config.with_option(key, value);
        }

        Ok(config)
    }
}
