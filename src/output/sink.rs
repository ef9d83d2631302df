//! Result Sink
//!
//! One [`OutputTable`] per scanner, each a `<scanner>.csv` file in the results
//! directory. Every `.csv` left by a previous run is removed when the sink is
//! created, so tables from different runs never sit side by side. Tables are
//! seeded with the `Domain` + headers row and receive body rows as soon as
//! scanners produce them.
//!
//! [`ResultSink::close`] consumes the sink so every table is closed exactly
//! once. If a run aborts and the sink is dropped instead, buffered rows are
//! still flushed so the table on disk stays a valid CSV.

use crate::output::csv::CsvFormatter;
use crate::output::error::{OutputError, OutputResult};
use crate::scanner::types::{ResultRow, ScannerInfo};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// First column of every table
pub const DOMAIN_HEADER: &str = "Domain";

/// Summary of a closed table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSummary {
    pub scanner: String,
    pub path: PathBuf,
    pub rows: usize,
}

/// Output table owned by exactly one scanner
#[derive(Debug)]
pub struct OutputTable {
    scanner: String,
    path: PathBuf,
    width: usize,
    rows_written: usize,
    formatter: CsvFormatter,
    writer: BufWriter<File>,
}

impl OutputTable {
    /// Delete any stale table for this scanner, create a new one and write its header
    pub fn create(dir: &Path, info: &ScannerInfo) -> OutputResult<Self> {
        let path = dir.join(info.table_file_name());

        if path.exists() {
            fs::remove_file(&path).map_err(|e| OutputError::io(&path, e))?;
            log::debug!("Removed stale table {}", path.display());
        }

        let file = File::create(&path).map_err(|e| OutputError::io(&path, e))?;
        let mut table = Self {
            scanner: info.name.clone(),
            width: info.headers.len() + 1,
            rows_written: 0,
            formatter: CsvFormatter::new(),
            writer: BufWriter::new(file),
            path,
        };

        let header: Vec<&str> = std::iter::once(DOMAIN_HEADER)
            .chain(info.headers.iter().map(String::as_str))
            .collect();
        table.write_line(&header)?;

        Ok(table)
    }

    /// Write `[domain] + row`; empty rows are skipped and return `false`
    pub fn write_row(&mut self, domain: &str, row: &ResultRow) -> OutputResult<bool> {
        if row.is_empty() {
            return Ok(false);
        }

        if row.len() + 1 != self.width {
            return Err(OutputError::ColumnCount {
                scanner: self.scanner.clone(),
                domain: domain.to_string(),
                expected: self.width - 1,
                actual: row.len(),
            });
        }

        let record: Vec<&str> = std::iter::once(domain)
            .chain(row.values().iter().map(String::as_str))
            .collect();
        self.write_line(&record)?;
        self.rows_written += 1;
        Ok(true)
    }

    fn write_line(&mut self, values: &[&str]) -> OutputResult<()> {
        let line = self.formatter.format_record(values);
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| OutputError::io(&self.path, e))
    }

    pub fn scanner(&self) -> &str {
        &self.scanner
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and close the table
    pub fn close(mut self) -> OutputResult<TableSummary> {
        self.writer
            .flush()
            .map_err(|e| OutputError::io(&self.path, e))?;
        Ok(TableSummary {
            scanner: self.scanner,
            path: self.path,
            rows: self.rows_written,
        })
    }
}

/// Collection of output tables, indexed in scanner declaration order
#[derive(Debug)]
pub struct ResultSink {
    tables: Vec<OutputTable>,
}

impl ResultSink {
    /// Create the results directory, clear old tables and open one fresh table per scanner
    pub fn create(dir: &Path, scanners: &[ScannerInfo]) -> OutputResult<Self> {
        fs::create_dir_all(dir).map_err(|e| OutputError::io(dir, e))?;
        let removed = clear_tables(dir)?;
        if removed > 0 {
            log::debug!("Removed {} tables from {}", removed, dir.display());
        }

        let tables = scanners
            .iter()
            .map(|info| {
                let table = OutputTable::create(dir, info)?;
                log::debug!("Opened table {}", table.path().display());
                Ok(table)
            })
            .collect::<OutputResult<Vec<_>>>()?;

        Ok(Self { tables })
    }

    /// Forward a row to the table at `index`
    pub fn write_row(&mut self, index: usize, domain: &str, row: &ResultRow) -> OutputResult<bool> {
        let tables = self.tables.len();
        match self.tables.get_mut(index) {
            Some(table) => table.write_row(domain, row),
            None => Err(OutputError::NoTable { index, tables }),
        }
    }

    pub fn tables(&self) -> &[OutputTable] {
        &self.tables
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Close every table exactly once
    pub fn close(self) -> OutputResult<Vec<TableSummary>> {
        self.tables.into_iter().map(OutputTable::close).collect()
    }
}

/// Remove every `.csv` file directly inside `dir`; other files stay
fn clear_tables(dir: &Path) -> OutputResult<usize> {
    let entries = fs::read_dir(dir).map_err(|e| OutputError::io(dir, e))?;
    let mut removed = 0;
    for entry in entries {
        let path = entry.map_err(|e| OutputError::io(dir, e))?.path();
        let is_table = path.is_file()
            && path
                .extension()
                .map(|ext| ext.eq_ignore_ascii_case("csv"))
                .unwrap_or(false);
        if is_table {
            fs::remove_file(&path).map_err(|e| OutputError::io(&path, e))?;
            removed += 1;
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn status() -> ScannerInfo {
        ScannerInfo::new("status", "test", &["Status", "Code"])
    }

    #[test]
    fn test_header_written_on_create() {
        let dir = TempDir::new().unwrap();
        let sink = ResultSink::create(dir.path(), &[status()]).unwrap();
        let summaries = sink.close().unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].rows, 0);
        let content = fs::read_to_string(dir.path().join("status.csv")).unwrap();
        assert_eq!(content, "Domain,Status,Code\n");
    }

    #[test]
    fn test_rows_prefixed_with_domain_and_empty_skipped() {
        let dir = TempDir::new().unwrap();
        let mut sink = ResultSink::create(dir.path(), &[status()]).unwrap();

        assert!(sink
            .write_row(0, "example.com", &ResultRow::from(vec!["ok", "200"]))
            .unwrap());
        assert!(!sink.write_row(0, "other.org", &ResultRow::empty()).unwrap());
        assert!(sink
            .write_row(0, "third.net", &ResultRow::from(vec!["a,b", "\"q\""]))
            .unwrap());
        sink.close().unwrap();

        let content = fs::read_to_string(dir.path().join("status.csv")).unwrap();
        assert_eq!(
            content,
            "Domain,Status,Code\nexample.com,ok,200\nthird.net,\"a,b\",\"\"\"q\"\"\"\n"
        );
    }

    #[test]
    fn test_column_count_mismatch_rejected() {
        let dir = TempDir::new().unwrap();
        let mut sink = ResultSink::create(dir.path(), &[status()]).unwrap();
        let err = sink
            .write_row(0, "example.com", &ResultRow::from(vec!["only-one"]))
            .unwrap_err();
        assert!(matches!(
            err,
            OutputError::ColumnCount { expected: 2, actual: 1, .. }
        ));
    }

    #[test]
    fn test_stale_table_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("status.csv");
        fs::write(&path, "Domain,Old\nstale.com,1\n").unwrap();

        ResultSink::create(dir.path(), &[status()])
            .unwrap()
            .close()
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Domain,Status,Code\n");
    }

    #[test]
    fn test_tables_from_other_scanners_removed() {
        let dir = TempDir::new().unwrap();
        let old_table = dir.path().join("other.csv");
        let upper = dir.path().join("LEGACY.CSV");
        let metadata = dir.path().join("meta.json");
        let notes = dir.path().join("notes.txt");
        fs::write(&old_table, "Domain\nold.run\n").unwrap();
        fs::write(&upper, "Domain\n").unwrap();
        fs::write(&metadata, "{}").unwrap();
        fs::write(&notes, "keep").unwrap();

        ResultSink::create(dir.path(), &[status()])
            .unwrap()
            .close()
            .unwrap();

        assert!(!old_table.exists());
        assert!(!upper.exists());
        assert!(metadata.exists());
        assert!(notes.exists());
        assert!(dir.path().join("status.csv").exists());
    }

    #[test]
    fn test_unknown_table_index_rejected() {
        let dir = TempDir::new().unwrap();
        let mut sink = ResultSink::create(dir.path(), &[status()]).unwrap();
        let err = sink
            .write_row(3, "example.com", &ResultRow::from(vec!["ok", "200"]))
            .unwrap_err();
        assert!(matches!(err, OutputError::NoTable { index: 3, tables: 1 }));
        assert!(err.to_string().contains("3"));
    }

    #[test]
    fn test_dropped_sink_still_flushes() {
        let dir = TempDir::new().unwrap();
        {
            let mut sink = ResultSink::create(dir.path(), &[status()]).unwrap();
            sink.write_row(0, "example.com", &ResultRow::from(vec!["ok", "200"]))
                .unwrap();
        }
        let content = fs::read_to_string(dir.path().join("status.csv")).unwrap();
        assert_eq!(content, "Domain,Status,Code\nexample.com,ok,200\n");
    }

    #[test]
    fn test_creates_missing_results_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("results");
        let sink = ResultSink::create(&nested, &[status()]).unwrap();
        assert_eq!(sink.len(), 1);
        assert!(nested.join("status.csv").exists());
    }
}
