//! Built-in Scanner Implementations
//!
//! Scanners that ship with the tool. Each registers itself with `scanner!`.

pub mod api;
pub mod noop;
pub mod resolve;
pub mod whois;
