//! Configuration file discovery and merging

use clap::Parser;
use domainscan::app::cli::config::load_config_file;
use domainscan::app::cli::Args;
use tempfile::TempDir;

#[test]
fn test_config_file_supplies_scanners_and_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("domainscan.toml");
    std::fs::write(
        &path,
        r#"
scan = "noop, status"
output = "nightly"

[options]
"whois.server" = "whois.example.org"
retries = 2
"#,
    )
    .unwrap();

    let mut args = Args::try_parse_from(["domainscan", "example.com"]).unwrap();
    let (_, table) = load_config_file(Some(&path)).unwrap().unwrap();
    Args::apply_toml_values(&mut args, &table).unwrap();

    let config = args.to_run_config("").unwrap();
    assert_eq!(config.scanners, vec!["noop", "status"]);
    assert_eq!(config.output_dir, std::path::PathBuf::from("nightly"));
    assert_eq!(config.option("whois.server"), Some("whois.example.org"));
    assert_eq!(config.option("retries"), Some("2"));
}

#[test]
fn test_cli_scan_overrides_config_scan() {
    let mut args = Args::try_parse_from(["domainscan", "example.com", "-s", "status"]).unwrap();
    let table: toml::Table = toml::from_str("scan = [\"noop\", \"whois\"]").unwrap();
    Args::apply_toml_values(&mut args, &table).unwrap();

    assert_eq!(args.to_run_config("").unwrap().scanners, vec!["status"]);
}
