//! Command-line parsing into a run configuration

use clap::Parser;
use domainscan::app::cli::Args;
use std::path::PathBuf;

#[test]
fn test_full_command_line() {
    let argv = [
        "domainscan",
        "current-federal.csv",
        "--scan",
        "whois,noop",
        "--suffix",
        "gov",
        "--output",
        "out",
        "--sort",
        "--option",
        "whois.server=whois.nic.gov",
        "-l",
        "debug",
        "--log-format",
        "json",
    ];
    let args = Args::try_parse_from(argv).unwrap();
    args.validate().unwrap();

    let config = args.to_run_config(&argv.join(" ")).unwrap();
    assert_eq!(config.input, "current-federal.csv");
    assert_eq!(config.scanners, vec!["whois", "noop"]);
    assert_eq!(config.suffix.as_deref(), Some("gov"));
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert!(config.sort);
    assert_eq!(config.option("whois.server"), Some("whois.nic.gov"));
    assert!(config.command_line.starts_with("domainscan current-federal.csv"));
    assert_eq!(args.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_list_scanners_needs_no_input() {
    let args = Args::try_parse_from(["domainscan", "--list-scanners"]).unwrap();
    assert!(args.list_scanners);
    assert!(args.input.is_none());
}

#[test]
fn test_unknown_flag_rejected() {
    assert!(Args::try_parse_from(["domainscan", "x", "--bogus"]).is_err());
}
