//! Domain sequence construction
//!
//! File input (`*.csv`):
//! - the first column of each record is a candidate domain,
//! - blank first columns are skipped,
//! - the first non-blank record is dropped when it starts with "domain"
//!   (case-insensitive), treating it as a header,
//! - values are lower-cased and get `.<suffix>` appended when a suffix is set.
//!
//! Literal input is yielded once, unchanged: no lower-casing and no suffix.

use crate::core::config::RunConfig;
use crate::domains::error::{DomainError, DomainResult};
use crate::output::csv::CsvRecordReader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// Whether the input names a delimited file of domains
pub fn is_file_input(input: &str) -> bool {
    input.to_lowercase().ends_with(".csv")
}

/// Domains read one record at a time from a delimited source
pub struct DomainRecords<R: BufRead> {
    records: CsvRecordReader<R>,
    origin: PathBuf,
    suffix: Option<String>,
    header_checked: bool,
}

impl<R: BufRead> DomainRecords<R> {
    pub fn new(reader: R, origin: impl Into<PathBuf>, suffix: Option<&str>) -> Self {
        Self {
            records: CsvRecordReader::new(reader),
            origin: origin.into(),
            suffix: suffix.map(str::to_string),
            header_checked: false,
        }
    }

    fn normalize(&self, raw: &str) -> String {
        let domain = raw.to_lowercase();
        match &self.suffix {
            Some(suffix) => format!("{}.{}", domain, suffix),
            None => domain,
        }
    }
}

impl<R: BufRead> Iterator for DomainRecords<R> {
    type Item = DomainResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(source) => {
                    return Some(Err(DomainError::Io {
                        path: self.origin.clone(),
                        source,
                    }))
                }
            };

            let first = record.first().map(|f| f.trim()).unwrap_or_default();
            if first.is_empty() {
                continue;
            }

            if !self.header_checked {
                self.header_checked = true;
                if first.to_lowercase().starts_with("domain") {
                    log::debug!("Skipping header record in {}", self.origin.display());
                    continue;
                }
            }

            return Some(Ok(self.normalize(first)));
        }
    }
}

/// Lazy, single-pass sequence of domains for one run
pub enum DomainSource {
    /// A single domain given on the command line
    Literal(Option<String>),
    /// Domains read from a `.csv` file
    File(DomainRecords<BufReader<File>>),
}

impl DomainSource {
    /// Open the domain source described by the run configuration
    pub fn open(config: &RunConfig) -> DomainResult<Self> {
        Self::from_input(&config.input, config.suffix.as_deref())
    }

    pub fn from_input(input: &str, suffix: Option<&str>) -> DomainResult<Self> {
        if !is_file_input(input) {
            log::debug!("Using literal domain '{}'", input);
            return Ok(DomainSource::Literal(Some(input.to_string())));
        }

        let path = PathBuf::from(input);
        if !path.is_file() {
            return Err(DomainError::NotFound { path });
        }

        let file = File::open(&path).map_err(|source| DomainError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("Reading domains from {}", path.display());
        Ok(DomainSource::File(DomainRecords::new(
            BufReader::new(file),
            path,
            suffix,
        )))
    }
}

impl Iterator for DomainSource {
    type Item = DomainResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            DomainSource::Literal(domain) => domain.take().map(Ok),
            DomainSource::File(records) => records.next(),
        }
    }
}

impl std::fmt::Debug for DomainSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainSource::Literal(domain) => f.debug_tuple("Literal").field(domain).finish(),
            DomainSource::File(records) => f.debug_tuple("File").field(&records.origin).finish(),
        }
    }
}
