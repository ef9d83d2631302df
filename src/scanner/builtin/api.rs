//! API for builtin scanner registration and discovery
//!
//! Scanners use the `scanner!` macro to register a factory at compile time.
//! The registry collects every submitted factory at startup; nothing is
//! loaded dynamically.

use crate::scanner::traits::Scanner;

/// Factory producing a fresh scanner instance
pub type ScannerFactory = fn() -> Box<dyn Scanner>;

/// Entry for a builtin scanner in the compile-time registry
pub struct BuiltinScannerEntry {
    pub factory: ScannerFactory,
}

inventory::collect!(BuiltinScannerEntry);

/// Macro for registering scanners
///
/// ```rust,ignore
/// domainscan::scanner!(|| Box::new(MyScanner));
/// ```
#[macro_export]
macro_rules! scanner {
    ($factory_expr:expr) => {
        $crate::inventory::submit!($crate::scanner::builtin::api::BuiltinScannerEntry {
            factory: $factory_expr
        });
    };
}

/// Get the factories of every registered scanner
pub fn get_all_scanner_factories() -> Vec<ScannerFactory> {
    inventory::iter::<BuiltinScannerEntry>()
        .map(|entry| entry.factory)
        .collect()
}
