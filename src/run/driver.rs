//! Run state machine
//!
//! Configuring, validating scanners, opening the domain source, creating the
//! tables, streaming, closing, optional sorting, then metadata. Any error
//! before table creation leaves the results directory untouched.

use crate::core::config::RunConfig;
use crate::core::time::{SystemTimeProvider, TimeProvider};
use crate::core::validation::ValidationError;
use crate::domains::source::{is_file_input, DomainSource};
use crate::output::metadata::RunMetadata;
use crate::output::sink::{ResultSink, TableSummary};
use crate::output::sort::sort_table;
use crate::run::error::RunResult;
use crate::run::orchestrator::{Orchestrator, RunStats};
use crate::scanner::registry::ScannerRegistry;
use crate::scanner::types::ScannerInfo;
use std::path::{Path, PathBuf};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub stats: RunStats,
    pub tables: Vec<TableSummary>,
    /// Where `meta.json` was written, if writing it succeeded
    pub metadata: Option<PathBuf>,
}

/// Run with every built-in scanner available and the system clock
pub fn execute(config: &RunConfig) -> RunResult<RunSummary> {
    let registry = ScannerRegistry::discover()?;
    execute_with(config, &registry, &SystemTimeProvider)
}

/// Run against an explicit registry and clock
pub fn execute_with(
    config: &RunConfig,
    registry: &ScannerRegistry,
    clock: &dyn TimeProvider,
) -> RunResult<RunSummary> {
    let start_time = clock.now();

    if config.scanners.is_empty() {
        return Err(ValidationError::new("No scanners selected; use --scan NAMES").into());
    }

    let scanners = registry.resolve(&config.scanners, config)?;
    let infos: Vec<ScannerInfo> = scanners.iter().map(|s| s.info()).collect();
    log::info!(
        "Running scanners: {}",
        infos
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let domains = DomainSource::open(config)?;
    check_input_outside_results(config)?;
    let mut sink = ResultSink::create(&config.output_dir, &infos)?;

    let stats = Orchestrator::new(&scanners, config).run(domains, &mut sink)?;
    let tables = sink.close()?;

    if config.sort {
        for table in &tables {
            let rows = sort_table(&table.path)?;
            log::debug!("Sorted {} rows in {}", rows, table.path.display());
        }
    }

    let end_time = clock.now();
    let metadata = match RunMetadata::new(&start_time, &end_time, &config.command_line)
        .write_to(&config.output_dir)
    {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("Could not write run metadata: {}", e);
            None
        }
    };

    for table in &tables {
        log::info!("{}: {} rows -> {}", table.scanner, table.rows, table.path.display());
    }

    Ok(RunSummary {
        stats,
        tables,
        metadata,
    })
}

/// Opening the sink clears every table in the results directory, which must
/// never include the domain file being read
fn check_input_outside_results(config: &RunConfig) -> Result<(), ValidationError> {
    if !is_file_input(&config.input) {
        return Ok(());
    }
    let input_dir = Path::new(&config.input)
        .canonicalize()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));
    let output_dir = config.output_dir.canonicalize().ok();

    match (input_dir, output_dir) {
        (Some(input_dir), Some(output_dir)) if input_dir == output_dir => {
            Err(ValidationError::new(&format!(
                "Input file {} is inside the results directory {}, which is cleared of .csv tables at the start of a run",
                config.input,
                config.output_dir.display()
            )))
        }
        _ => Ok(()),
    }
}
