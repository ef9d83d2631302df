//! Output subsystem
//!
//! Delimited-text encoding, one streaming table per scanner, the optional
//! post-run sort and the run metadata record.

pub mod csv;
pub mod error;
pub mod metadata;
pub mod sink;
pub mod sort;
