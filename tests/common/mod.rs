//! Common test utilities and helpers
//!
//! Test-only scanners registered through the same `scanner!` macro the
//! built-ins use, plus small filesystem helpers.

#![allow(dead_code)]

use domainscan::core::config::RunConfig;
use domainscan::scanner::api::{ResultRow, Scanner, ScannerInfo, ScannerResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `ok` for every domain
pub struct StatusScanner;

impl Scanner for StatusScanner {
    fn info(&self) -> ScannerInfo {
        ScannerInfo::new("status", "test scanner writing ok", &["Status"])
    }

    fn scan(&self, _domain: &str, _config: &RunConfig) -> ScannerResult<Vec<ResultRow>> {
        Ok(vec![ResultRow::from(vec!["ok"])])
    }
}

domainscan::scanner!(|| Box::new(StatusScanner));

/// Requires a binary that is never installed
pub struct NeedsToolScanner;

pub const MISSING_TOOL: &str = "nope-binary-7d41e";

impl Scanner for NeedsToolScanner {
    fn info(&self) -> ScannerInfo {
        ScannerInfo::new("needs-tool", "test scanner with a missing command", &["X"])
            .with_command(MISSING_TOOL)
    }

    fn scan(&self, _domain: &str, _config: &RunConfig) -> ScannerResult<Vec<ResultRow>> {
        Ok(Vec::new())
    }
}

domainscan::scanner!(|| Box::new(NeedsToolScanner));

/// Init hook always refuses
pub struct RefusingScanner;

impl Scanner for RefusingScanner {
    fn info(&self) -> ScannerInfo {
        ScannerInfo::new("refuses", "test scanner whose init fails", &["X"])
    }

    fn init(&self, _config: &RunConfig) -> ScannerResult<bool> {
        Ok(false)
    }

    fn scan(&self, _domain: &str, _config: &RunConfig) -> ScannerResult<Vec<ResultRow>> {
        Ok(Vec::new())
    }
}

domainscan::scanner!(|| Box::new(RefusingScanner));

/// Write a domain file and return its path as a string
pub fn write_domains(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

pub fn read_table(dir: &Path, scanner: &str) -> String {
    fs::read_to_string(dir.join(format!("{}.csv", scanner))).unwrap()
}

/// Every `.csv` file in a results directory, sorted by name
pub fn csv_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().map(|e| e == "csv").unwrap_or(false))
        .collect();
    files.sort();
    files
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
