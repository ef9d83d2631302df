//! No-op scanner
//!
//! Emits one constant row per domain. Useful for checking a domain list and
//! the output layout without touching the network.

use crate::core::config::RunConfig;
use crate::scanner::error::ScannerResult;
use crate::scanner::traits::Scanner;
use crate::scanner::types::{ResultRow, ScannerInfo};

crate::scanner!(|| Box::new(NoopScanner));

/// Value written to the `Constant` column
pub const NOOP_CONSTANT: &str = "12345";

#[derive(Debug, Default)]
pub struct NoopScanner;

impl NoopScanner {
    pub fn static_scanner_info() -> ScannerInfo {
        ScannerInfo::new(
            "noop",
            "Writes a constant row per domain without scanning anything",
            &["Completed", "Constant", "Variable"],
        )
    }
}

impl Scanner for NoopScanner {
    fn info(&self) -> ScannerInfo {
        Self::static_scanner_info()
    }

    fn scan(&self, domain: &str, _config: &RunConfig) -> ScannerResult<Vec<ResultRow>> {
        log::trace!("noop scan of {}", domain);
        Ok(vec![ResultRow::from(vec!["true", NOOP_CONSTANT, domain])])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_row_matches_headers() {
        let scanner = NoopScanner;
        let config = RunConfig::new("example.com", vec!["noop".to_string()]);
        let rows = scanner.scan("example.com", &config).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), scanner.info().headers.len());
        assert_eq!(rows[0].values()[2], "example.com");
        assert!(scanner.init(&config).unwrap());
    }
}
