//! Post-run table sorting
//!
//! Rewrites a closed table with its body rows stably sorted by the domain
//! column. The header stays first. The sorted copy is written next to the
//! original and renamed over it.

use crate::output::csv::{CsvFormatter, CsvRecordReader};
use crate::output::error::{OutputError, OutputResult};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Sort a table's body rows by domain, returning the number of body rows
pub fn sort_table(path: &Path) -> OutputResult<usize> {
    let file = File::open(path).map_err(|e| OutputError::io(path, e))?;
    let mut records = CsvRecordReader::new(BufReader::new(file))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| OutputError::io(path, e))?;

    if records.is_empty() {
        return Err(OutputError::Malformed {
            path: path.to_path_buf(),
            message: "missing header row".to_string(),
        });
    }

    let header = records.remove(0);
    records.sort_by(|a, b| a.first().cmp(&b.first()));

    let tmp_path = path.with_extension("csv.tmp");
    {
        let tmp = File::create(&tmp_path).map_err(|e| OutputError::io(&tmp_path, e))?;
        let mut writer = BufWriter::new(tmp);
        let formatter = CsvFormatter::new();
        for record in std::iter::once(&header).chain(records.iter()) {
            writer
                .write_all(formatter.format_record(record).as_bytes())
                .map_err(|e| OutputError::io(&tmp_path, e))?;
        }
        writer.flush().map_err(|e| OutputError::io(&tmp_path, e))?;
    }
    fs::rename(&tmp_path, path).map_err(|e| OutputError::io(path, e))?;

    Ok(records.len())
}
