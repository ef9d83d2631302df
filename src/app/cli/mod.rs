//! CLI module containing argument parsing and related functionality

pub mod args;
pub mod config;
pub mod display;
pub mod validation;

#[cfg(test)]
mod tests;

pub use args::Args;
pub use config::load_config_file;
