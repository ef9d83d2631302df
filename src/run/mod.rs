//! Run driver
//!
//! Couples the scanner registry, the domain source and the result sink into a
//! single run: resolve scanners, open the domains, create the tables, stream
//! the cross product, close, optionally sort, then record metadata.

pub mod driver;
pub mod error;
pub mod orchestrator;

pub use driver::{execute, execute_with, RunSummary};
pub use error::{RunError, RunResult};
pub use orchestrator::{Orchestrator, RunStats};
