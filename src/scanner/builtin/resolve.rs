//! DNS resolution scanner
//!
//! Resolves each domain with the system resolver and writes one row per
//! distinct address. Domains that do not resolve produce no rows.
//!
//! Option `resolve.family` limits output to `ipv4`, `ipv6` or `any` (default).

use crate::core::config::RunConfig;
use crate::scanner::error::{ScannerError, ScannerResult};
use crate::scanner::traits::Scanner;
use crate::scanner::types::{ResultRow, ScannerInfo};
use std::net::{IpAddr, ToSocketAddrs};

crate::scanner!(|| Box::new(ResolveScanner));

pub const FAMILY_OPTION: &str = "resolve.family";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Any,
    V4,
    V6,
}

impl AddressFamily {
    fn from_option(value: Option<&str>) -> Option<Self> {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("any") => Some(Self::Any),
            Some("ipv4") | Some("4") => Some(Self::V4),
            Some("ipv6") | Some("6") => Some(Self::V6),
            Some(_) => None,
        }
    }

    fn accepts(self, addr: &IpAddr) -> bool {
        match self {
            Self::Any => true,
            Self::V4 => addr.is_ipv4(),
            Self::V6 => addr.is_ipv6(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ResolveScanner;

impl ResolveScanner {
    pub fn static_scanner_info() -> ScannerInfo {
        ScannerInfo::new(
            "resolve",
            "Resolves each domain and lists its IPv4/IPv6 addresses",
            &["Address", "Family"],
        )
    }

    fn family(config: &RunConfig) -> ScannerResult<AddressFamily> {
        let raw = config.option(FAMILY_OPTION);
        AddressFamily::from_option(raw).ok_or_else(|| ScannerError::InitFailed {
            scanner: "resolve".to_string(),
            reason: format!(
                "{} must be one of any, ipv4, ipv6 (got '{}')",
                FAMILY_OPTION,
                raw.unwrap_or_default()
            ),
        })
    }
}

/// One row per distinct address, in resolver order
pub fn address_rows(addrs: impl IntoIterator<Item = IpAddr>, family: AddressFamily) -> Vec<ResultRow> {
    let mut seen: Vec<IpAddr> = Vec::new();
    for addr in addrs {
        if family.accepts(&addr) && !seen.contains(&addr) {
            seen.push(addr);
        }
    }

    seen.into_iter()
        .map(|addr| {
            let family = if addr.is_ipv4() { "IPv4" } else { "IPv6" };
            ResultRow::from(vec![addr.to_string(), family.to_string()])
        })
        .collect()
}

impl Scanner for ResolveScanner {
    fn info(&self) -> ScannerInfo {
        Self::static_scanner_info()
    }

    fn init(&self, config: &RunConfig) -> ScannerResult<bool> {
        Self::family(config).map(|_| true)
    }

    fn scan(&self, domain: &str, config: &RunConfig) -> ScannerResult<Vec<ResultRow>> {
        let family = Self::family(config)?;

        match (domain, 0u16).to_socket_addrs() {
            Ok(addrs) => Ok(address_rows(addrs.map(|a| a.ip()), family)),
            Err(e) => {
                log::debug!("{} did not resolve: {}", domain, e);
                Ok(Vec::new())
            }
        }
    }
}
