//! Orchestrator
//!
//! Drives the domain-major cross product: for each domain, in source order,
//! every scanner runs in declaration order and each non-empty row goes to
//! that scanner's table as soon as the scan returns. A scanner fault stops
//! the run; rows already written stay on disk.

use crate::core::config::RunConfig;
use crate::domains::error::DomainResult;
use crate::output::sink::ResultSink;
use crate::run::error::RunResult;
use crate::scanner::error::ScannerError;
use crate::scanner::traits::Scanner;

/// Counters collected while streaming
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Domains taken from the source
    pub domains: usize,
    /// Rows written per scanner, in declaration order
    pub rows: Vec<(String, usize)>,
}

impl RunStats {
    pub fn total_rows(&self) -> usize {
        self.rows.iter().map(|(_, n)| n).sum()
    }

    /// Rows written for a scanner, if it took part in the run
    pub fn rows_for(&self, scanner: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|(name, _)| name == scanner)
            .map(|(_, n)| *n)
    }
}

/// Runs initialised scanners over a domain sequence
pub struct Orchestrator<'a> {
    scanners: &'a [Box<dyn Scanner>],
    config: &'a RunConfig,
}

impl<'a> Orchestrator<'a> {
    pub fn new(scanners: &'a [Box<dyn Scanner>], config: &'a RunConfig) -> Self {
        Self { scanners, config }
    }

    /// Stream every domain through every scanner into `sink`
    ///
    /// Table `i` of the sink must belong to scanner `i`.
    pub fn run<I>(&self, domains: I, sink: &mut ResultSink) -> RunResult<RunStats>
    where
        I: IntoIterator<Item = DomainResult<String>>,
    {
        let names: Vec<String> = self.scanners.iter().map(|s| s.info().name).collect();
        let mut stats = RunStats {
            domains: 0,
            rows: names.iter().map(|n| (n.clone(), 0)).collect(),
        };

        for domain in domains {
            let domain = domain?;
            stats.domains += 1;
            log::debug!("Scanning domain '{}'", domain);

            for (index, scanner) in self.scanners.iter().enumerate() {
                let name = &names[index];
                let rows = scanner
                    .scan(&domain, self.config)
                    .map_err(|err| scan_failure(name, &domain, err))?;

                for row in &rows {
                    if sink.write_row(index, &domain, row)? {
                        stats.rows[index].1 += 1;
                    }
                }
            }
        }

        log::info!(
            "Scanned {} domains with {} scanners, {} rows written",
            stats.domains,
            self.scanners.len(),
            stats.total_rows()
        );
        Ok(stats)
    }
}

fn scan_failure(scanner: &str, domain: &str, err: ScannerError) -> ScannerError {
    match err {
        err @ ScannerError::ScanFailed { .. } => err,
        other => ScannerError::ScanFailed {
            scanner: scanner.to_string(),
            domain: domain.to_string(),
            cause: other.to_string(),
        },
    }
}
