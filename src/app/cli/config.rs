//! TOML configuration file parsing and loading
//!
//! This module handles loading and parsing of TOML configuration files,
//! including default config file discovery and validation of config values.
//! File values only fill what the command line left unset.

use crate::core::validation::ValidationError;
use std::path::{Path, PathBuf};

use super::args::Args;

/// Directory under the platform config dir holding the default config file
pub const CONFIG_DIR_NAME: &str = "Domainscan";
/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "domainscan.toml";

const KNOWN_KEYS: [&str; 8] = [
    "scan",
    "suffix",
    "output",
    "sort",
    "log_level",
    "log_format",
    "log_file",
    "options",
];

/// Default configuration file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Locate and parse the configuration file
///
/// An explicitly named file must exist. Without one the default location is
/// used when a file is present there; otherwise `Ok(None)`.
pub fn load_config_file(
    config_file: Option<&Path>,
) -> Result<Option<(PathBuf, toml::Table)>, ValidationError> {
    let config_path = match config_file {
        Some(path) => {
            // User specified a config file - it must exist
            if !path.exists() {
                return Err(ValidationError::new(&format!(
                    "The specified configuration file does not exist: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(None),
        },
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|e| {
        ValidationError::new(&format!(
            "Error reading configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;
    let table = parse_config(&contents).map_err(|e| {
        ValidationError::new(&format!(
            "Error in configuration file {}: {}",
            config_path.display(),
            e.details()
        ))
    })?;

    log::debug!("Loaded configuration from {}", config_path.display());
    Ok(Some((config_path, table)))
}

/// Parse configuration text into a table
pub fn parse_config(contents: &str) -> Result<toml::Table, ValidationError> {
    toml::from_str::<toml::Table>(contents).map_err(|e| ValidationError::new(&e.to_string()))
}

impl Args {
    /// Apply TOML configuration values to Args
    ///
    /// Unknown keys and values of the wrong type are rejected. Options from
    /// the file are placed before command-line options, so a key repeated on
    /// the command line wins.
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> Result<(), ValidationError> {
        if let Some(unknown) = config.keys().find(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            return Err(ValidationError::new(&format!(
                "Unknown configuration key '{}'",
                unknown
            )));
        }

        if args.scan.is_empty() {
            Self::apply_string_array_field(config, "scan", &mut args.scan)?;
        }
        if args.suffix.is_none() {
            args.suffix = Self::string_field(config, "suffix")?;
        }
        if args.output.is_none() {
            args.output = Self::string_field(config, "output")?.map(PathBuf::from);
        }
        if let Some(value) = config.get("sort") {
            let sort = value
                .as_bool()
                .ok_or_else(|| Self::type_error("sort", "a boolean"))?;
            if !args.sort && !args.no_sort {
                args.sort = sort;
            }
        }
        if args.log_level.is_none() {
            args.log_level = Self::string_field(config, "log_level")?;
        }
        if args.log_format.is_none() {
            args.log_format = Self::string_field(config, "log_format")?;
        }
        if args.log_file.is_none() {
            args.log_file = Self::string_field(config, "log_file")?.map(PathBuf::from);
        }

        if let Some(value) = config.get("options") {
            let table = value
                .as_table()
                .ok_or_else(|| Self::type_error("options", "a table"))?;
            let mut file_options = Vec::with_capacity(table.len());
            for (key, value) in table {
                let value = match value {
                    toml::Value::String(s) => s.clone(),
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    _ => {
                        return Err(Self::type_error(
                            &format!("options.{}", key),
                            "a string, number or boolean",
                        ))
                    }
                };
                file_options.push(format!("{}={}", key, value));
            }
            file_options.append(&mut args.options);
            args.options = file_options;
        }

        Ok(())
    }

    fn string_field(config: &toml::Table, key: &str) -> Result<Option<String>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| Self::type_error(key, "a string")),
        }
    }

    /// Apply string array field from TOML config (handles both single string and array formats)
    fn apply_string_array_field(
        config: &toml::Table,
        key: &str,
        target: &mut Vec<String>,
    ) -> Result<(), ValidationError> {
        let Some(value) = config.get(key) else {
            return Ok(());
        };

        if let Some(str_val) = value.as_str() {
            target.push(str_val.to_string());
        } else if let Some(array_val) = value.as_array() {
            for item in array_val {
                let item_str = item
                    .as_str()
                    .ok_or_else(|| Self::type_error(key, "a string or an array of strings"))?;
                target.push(item_str.to_string());
            }
        } else {
            return Err(Self::type_error(key, "a string or an array of strings"));
        }
        Ok(())
    }

    fn type_error(key: &str, expected: &str) -> ValidationError {
        ValidationError::new(&format!("Configuration key '{}' must be {}", key, expected))
    }
}
