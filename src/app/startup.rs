//! Application startup
//!
//! Parses arguments, merges the configuration file, starts logging and hands
//! the validated run configuration to the run driver. Exits with status 1 on
//! any fatal error.

use crate::app::cli::config::load_config_file;
use crate::app::cli::display::display_scanner_table;
use crate::app::cli::Args;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{effective_level, init_logging};
use crate::core::version::long_version;
use crate::run::execute;
use crate::scanner::registry::ScannerRegistry;
use clap::Parser;
use std::io::IsTerminal;

/// Initialize application startup
pub fn startup() {
    let argv: Vec<String> = std::env::args().collect();
    std::process::exit(run_from_args(&argv));
}

/// Run the application for an argument vector and return the exit status
pub fn run_from_args(argv: &[String]) -> i32 {
    let mut args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here
            let _ = e.print();
            return if e.use_stderr() { 1 } else { 0 };
        }
    };

    match load_config_file(args.config_file.as_deref()) {
        Ok(Some((_, table))) => {
            if let Err(e) = Args::apply_toml_values(&mut args, &table) {
                eprintln!("Error in configuration file: {}", e);
                return 1;
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    }

    let use_color = !args.no_color && std::io::stdout().is_terminal();
    colored::control::set_override(use_color);

    let level = effective_level(args.log_level.as_deref(), args.verbosity());
    let log_file = args
        .effective_log_file()
        .map(|p| p.to_string_lossy().into_owned());
    if let Err(e) = init_logging(
        Some(&level),
        args.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("Error: failed to start logging: {}", e);
        return 1;
    }

    log::info!("domainscan {} starting", long_version());

    if args.list_scanners {
        return match ScannerRegistry::discover() {
            Ok(registry) => {
                display_scanner_table(&registry.scanner_infos(), use_color);
                0
            }
            Err(e) => {
                log_error_with_context(&e, "Scanner discovery failed");
                1
            }
        };
    }

    let config = match args.to_run_config(&argv.join(" ")) {
        Ok(config) => config,
        Err(e) => {
            log_error_with_context(&e, "Invalid arguments");
            return 1;
        }
    };
    log::debug!("Run configuration: {:?}", config);

    match execute(&config) {
        Ok(summary) => {
            log::info!(
                "Done: {} domains, {} rows in {}",
                summary.stats.domains,
                summary.stats.total_rows(),
                config.output_dir.display()
            );
            0
        }
        Err(e) => {
            log_error_with_context(&e, "Run failed");
            1
        }
    }
}
