//! Scanner API
//!
//! Public facade for the scanner subsystem. Other modules and external
//! scanner implementations import from here.

pub use crate::scanner::builtin::api::{get_all_scanner_factories, ScannerFactory};
pub use crate::scanner::error::{ScannerError, ScannerResult};
pub use crate::scanner::registry::{command_available, ScannerRegistry};
pub use crate::scanner::traits::Scanner;
pub use crate::scanner::types::{ResultRow, ScannerInfo};
