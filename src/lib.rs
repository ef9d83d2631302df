pub mod app;
pub mod core;
pub mod domains;
pub mod output;
pub mod run;
pub mod scanner;

// Used by the `scanner!` registration macro
#[doc(hidden)]
pub use inventory;
