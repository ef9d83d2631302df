//! CLI Integration Test Modules

pub mod argument_parsing;
pub mod startup;
pub mod toml_config;
