//! WHOIS scanner
//!
//! Shells out to the system `whois` client and extracts the registrar and the
//! registration expiry date. Option `whois.server` queries a specific server
//! (`whois -h <server>`).

use crate::core::config::RunConfig;
use crate::scanner::error::{ScannerError, ScannerResult};
use crate::scanner::traits::Scanner;
use crate::scanner::types::{ResultRow, ScannerInfo};
use regex::Regex;
use std::ffi::OsStr;
use std::process::Command;
use std::sync::OnceLock;

crate::scanner!(|| Box::new(WhoisScanner));

pub const SERVER_OPTION: &str = "whois.server";

static REGISTRAR_RE: OnceLock<Regex> = OnceLock::new();
static EXPIRY_RE: OnceLock<Regex> = OnceLock::new();

fn registrar_re() -> &'static Regex {
    REGISTRAR_RE.get_or_init(|| {
        Regex::new(r"(?im)^\s*(?:Registrar|Sponsoring Registrar):[ \t]*(\S.*?)\s*$")
            .expect("registrar pattern is valid")
    })
}

fn expiry_re() -> &'static Regex {
    EXPIRY_RE.get_or_init(|| {
        Regex::new(
            r"(?im)^\s*(?:Registry Expiry Date|Registrar Registration Expiration Date|Expiration Date|Expiry Date|paid-till):[ \t]*(\S.*?)\s*$",
        )
        .expect("expiry pattern is valid")
    })
}

#[derive(Debug, Default)]
pub struct WhoisScanner;

impl WhoisScanner {
    pub fn static_scanner_info() -> ScannerInfo {
        ScannerInfo::new(
            "whois",
            "Looks up registrar and expiry date with the whois client",
            &["Registrar", "Expires"],
        )
        .with_command("whois")
    }
}

/// Extract a single result row from raw whois output
///
/// The first match of each field wins. Output with neither field yields an
/// empty row.
pub fn parse_whois(output: &str) -> ResultRow {
    let registrar = registrar_re()
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());
    let expires = expiry_re()
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string());

    if registrar.is_none() && expires.is_none() {
        return ResultRow::empty();
    }

    ResultRow::new(vec![
        registrar.unwrap_or_default(),
        expires.unwrap_or_default(),
    ])
}

impl Scanner for WhoisScanner {
    fn info(&self) -> ScannerInfo {
        Self::static_scanner_info()
    }

    fn init(&self, config: &RunConfig) -> ScannerResult<bool> {
        match config.option(SERVER_OPTION) {
            Some(server) if server.trim().is_empty() || server.contains(char::is_whitespace) => {
                log::error!("{} must be a host name, got '{}'", SERVER_OPTION, server);
                Ok(false)
            }
            _ => Ok(true),
        }
    }

    fn scan(&self, domain: &str, config: &RunConfig) -> ScannerResult<Vec<ResultRow>> {
        run_whois(OsStr::new("whois"), domain, config)
    }
}

/// Build the client invocation; `--` keeps a domain starting with `-` from
/// being read as a flag
fn whois_command(program: &OsStr, domain: &str, config: &RunConfig) -> Command {
    let mut command = Command::new(program);
    if let Some(server) = config.option(SERVER_OPTION) {
        command.arg("-h").arg(server);
    }
    command.arg("--").arg(domain);
    command
}

fn run_whois(program: &OsStr, domain: &str, config: &RunConfig) -> ScannerResult<Vec<ResultRow>> {
    let output = whois_command(program, domain, config)
        .output()
        .map_err(|e| ScannerError::ScanFailed {
            scanner: "whois".to_string(),
            domain: domain.to_string(),
            cause: format!("could not run whois: {}", e),
        })?;

    // whois exits non-zero for "no match"; the parsed output decides
    if !output.status.success() {
        log::debug!("whois exited with {} for {}", output.status, domain);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(vec![parse_whois(&stdout)])
}
