//! Core CLI arguments structure
//!
//! This module contains the Args struct definition and basic methods.
//! Validation and configuration loading are handled by separate modules.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

// Global arguments structure with all command-line options
//
// Parsed once from the command line and then completed from the TOML
// configuration file, where command-line values always win.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "domainscan")]
#[command(about = "Run domains through scanners and collect one CSV table per scanner")]
#[command(version = crate::core::version::version())]
#[command(long_version = crate::core::version::long_version())]
#[command(after_help = " * can be specified multiple times or as a comma-separated list")]
pub struct Args {
    /// Domain to scan, or a .csv file whose first column lists domains
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Scanners to run, in order*
    #[arg(short = 's', long = "scan", value_name = "NAMES", action = ArgAction::Append)]
    pub scan: Vec<String>,

    /// Suffix appended to every domain read from a file (e.g. "test")
    #[arg(long = "suffix", value_name = "SUFFIX")]
    pub suffix: Option<String>,

    /// Directory receiving the result tables and meta.json
    #[arg(long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Sort every result table by domain when the run completes
    #[arg(long = "sort")]
    pub sort: bool,

    /// Keep result tables in scan order even if the config file sets sort
    #[arg(long = "no-sort", conflicts_with = "sort")]
    pub no_sort: bool,

    /// Scanner option as KEY=VALUE (repeatable)
    #[arg(long = "option", value_name = "KEY=VALUE", action = ArgAction::Append)]
    pub options: Vec<String>,

    /// List registered scanners and exit
    #[arg(long = "list-scanners")]
    pub list_scanners: bool,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Verbose output (can be used multiple times for more verbosity)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (can be used multiple times for less verbosity)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Net verbosity: `-v` counts up, `-q` counts down
    pub fn verbosity(&self) -> i8 {
        (self.verbose.min(i8::MAX as u8) as i8).saturating_sub(self.quiet.min(i8::MAX as u8) as i8)
    }

    /// Log file to use, treating the magic values "none" and "-" as no file
    pub fn effective_log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref().filter(|path| {
            let raw = path.to_string_lossy();
            !(raw.eq_ignore_ascii_case("none") || raw == "-")
        })
    }
}
