//! Scanner subsystem
//!
//! The capability trait, the compile-time registry of built-in scanners and
//! the resolution step that validates a scanner selection before a run.

pub mod api;
pub mod builtin;
pub mod error;
pub mod registry;
pub mod traits;
pub mod types;
