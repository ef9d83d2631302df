//! Exit status of the application entry point
//!
//! Only paths that finish before logging starts are exercised here; the
//! global logger can be installed once per process.

use domainscan::app::startup::run_from_args;

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_version_exits_zero() {
    assert_eq!(run_from_args(&argv(&["domainscan", "--version"])), 0);
}

#[test]
fn test_bad_flag_exits_one() {
    assert_eq!(run_from_args(&argv(&["domainscan", "--no-such-flag"])), 1);
}

#[test]
fn test_missing_config_file_exits_one() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");
    let status = run_from_args(&argv(&[
        "domainscan",
        "example.com",
        "--scan",
        "noop",
        "--config-file",
        missing.to_str().unwrap(),
    ]));
    assert_eq!(status, 1);
}
