//! Scanner Trait
//!
//! The capability contract every scanner implements. A scanner describes
//! itself through [`ScannerInfo`], may veto a run from its `init` hook, and
//! turns one domain into zero or more [`ResultRow`]s.
//!
//! Scanners are created once per run by the registry, used read-only by the
//! orchestrator and dropped at exit.

use crate::core::config::RunConfig;
use crate::scanner::error::ScannerResult;
use crate::scanner::types::{ResultRow, ScannerInfo};

/// Base trait that all scanners must implement
pub trait Scanner: Send + Sync {
    /// Name, command requirement, headers and description
    fn info(&self) -> ScannerInfo;

    /// One-time validation before any domain is processed
    ///
    /// Returning `Ok(false)` or an error aborts the run.
    fn init(&self, _config: &RunConfig) -> ScannerResult<bool> {
        Ok(true)
    }

    /// Scan one domain
    ///
    /// An empty vector, or rows that are themselves empty, mean "no result".
    /// Errors are fatal for the whole run.
    fn scan(&self, domain: &str, config: &RunConfig) -> ScannerResult<Vec<ResultRow>>;
}

impl std::fmt::Debug for dyn Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("name", &self.info().name)
            .finish()
    }
}
