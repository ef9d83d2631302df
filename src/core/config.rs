//! Run configuration
//!
//! A [`RunConfig`] is built once at startup from validated arguments and then
//! passed by reference to the scanner registry, the domain source, the
//! orchestrator and every scanner hook. Nothing mutates it after construction.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default directory that receives the per-scanner tables and `meta.json`
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Immutable configuration for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Single domain or path to a `.csv` file of domains
    pub input: String,
    /// Scanner names in declaration order
    pub scanners: Vec<String>,
    /// Suffix appended to file-derived domains, without the leading dot
    pub suffix: Option<String>,
    /// Results directory
    pub output_dir: PathBuf,
    /// Sort each table by domain once the run completes
    pub sort: bool,
    /// Scanner options (`KEY=VALUE`)
    pub options: BTreeMap<String, String>,
    /// Program name plus all arguments, space-joined
    pub command_line: String,
}

impl RunConfig {
    /// Minimal configuration for `input` and `scanners`; everything else defaults
    pub fn new(input: impl Into<String>, scanners: Vec<String>) -> Self {
        Self {
            input: input.into(),
            scanners,
            suffix: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sort: false,
            options: BTreeMap::new(),
            command_line: String::new(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_command_line(mut self, command_line: impl Into<String>) -> Self {
        self.command_line = command_line.into();
        self
    }

    /// Look up a scanner option by key
    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("example.com", vec!["noop".to_string()]);
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert!(config.suffix.is_none());
        assert!(!config.sort);
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_option_lookup() {
        let config = RunConfig::new("example.com", vec![])
            .with_option("whois.server", "whois.example")
            .with_suffix("gov");
        assert_eq!(config.option("whois.server"), Some("whois.example"));
        assert_eq!(config.option("missing"), None);
        assert_eq!(config.suffix.as_deref(), Some("gov"));
    }
}
