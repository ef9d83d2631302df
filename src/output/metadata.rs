//! Run metadata record
//!
//! Start time, end time and the invoking command line for a run, written once
//! as `meta.json` in the results directory after every table is closed.

use crate::core::time::utc_timestamp;
use crate::output::error::{OutputError, OutputResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const METADATA_FILE_NAME: &str = "meta.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub start_time: String,
    pub end_time: String,
    pub command: String,
}

impl RunMetadata {
    pub fn new(start: &DateTime<Utc>, end: &DateTime<Utc>, command: &str) -> Self {
        Self {
            start_time: utc_timestamp(start),
            end_time: utc_timestamp(end),
            command: command.to_string(),
        }
    }

    /// Write `meta.json` into `dir`, replacing any previous record
    pub fn write_to(&self, dir: &Path) -> OutputResult<PathBuf> {
        let path = dir.join(METADATA_FILE_NAME);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json + "\n").map_err(|e| OutputError::io(&path, e))?;
        Ok(path)
    }

    /// Read a previously written record
    pub fn read_from(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(METADATA_FILE_NAME);
        let content = std::fs::read_to_string(&path).map_err(|e| OutputError::io(&path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}
