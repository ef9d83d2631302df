//! Domain Source
//!
//! Turns the positional input into a lazy sequence of domains: either the
//! literal value itself or the first column of every record in a `.csv` file.

pub mod error;
pub mod source;

pub use error::{DomainError, DomainResult};
pub use source::{DomainRecords, DomainSource};
