//! End-to-end run tests
//!
//! Drive `run::execute` against real files in a temporary directory with the
//! built-in scanners plus the test scanners from `common`.

mod common;

use common::*;
use domainscan::core::config::RunConfig;
use domainscan::output::metadata::RunMetadata;
use domainscan::run::{execute, RunError};
use domainscan::scanner::api::ScannerError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_status_over_domain_file() {
    let dir = TempDir::new().unwrap();
    let input = write_domains(dir.path(), "domains.csv", "Domain\nExample.com\n\nOther.ORG\n");
    let out = dir.path().join("results");

    let config = RunConfig::new(input, names(&["status"])).with_output_dir(&out);
    let summary = execute(&config).unwrap();

    assert_eq!(summary.stats.domains, 2);
    assert_eq!(
        read_table(&out, "status"),
        "Domain,Status\nexample.com,ok\nother.org,ok\n"
    );
}

#[test]
fn test_suffix_applies_to_file_domains_only() {
    let dir = TempDir::new().unwrap();
    let input = write_domains(dir.path(), "domains.csv", "Domain\nExample.com\n");
    let out = dir.path().join("results");

    let config = RunConfig::new(input, names(&["status"]))
        .with_output_dir(&out)
        .with_suffix("test");
    execute(&config).unwrap();
    assert_eq!(read_table(&out, "status"), "Domain,Status\nexample.com.test,ok\n");

    let config = RunConfig::new("Example.com", names(&["noop"]))
        .with_output_dir(&out)
        .with_suffix("test");
    execute(&config).unwrap();
    assert_eq!(
        read_table(&out, "noop"),
        "Domain,Completed,Constant,Variable\nExample.com,true,12345,Example.com\n"
    );
}

#[test]
fn test_one_table_per_selected_scanner() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");

    let config = RunConfig::new("example.com", names(&["noop", "status"]))
        .with_output_dir(&out)
        .with_command_line("domainscan example.com --scan noop,status");
    let summary = execute(&config).unwrap();

    assert_eq!(summary.tables.len(), 2);
    assert_eq!(
        csv_files(&out),
        vec![out.join("noop.csv"), out.join("status.csv")]
    );

    let meta = RunMetadata::read_from(&out).unwrap();
    assert_eq!(meta.command, "domainscan example.com --scan noop,status");
    assert!(meta.start_time <= meta.end_time);
}

#[test]
fn test_unknown_scanner_aborts_before_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");

    let config = RunConfig::new("example.com", names(&["status", "bogus"])).with_output_dir(&out);
    let err = execute(&config).unwrap_err();

    assert!(matches!(
        err,
        RunError::Scanner(ScannerError::NotFound { ref name, .. }) if name == "bogus"
    ));
    assert!(!out.exists());
}

#[test]
fn test_missing_command_aborts_before_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");

    let config =
        RunConfig::new("example.com", names(&["status", "needs-tool"])).with_output_dir(&out);
    let err = execute(&config).unwrap_err();

    assert!(err.to_string().contains(MISSING_TOOL));
    assert!(!out.exists());
}

#[test]
fn test_failed_init_leaves_previous_tables_alone() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("status.csv"), "Domain,Status\nold.com,ok\n").unwrap();

    let config = RunConfig::new("example.com", names(&["status", "refuses"])).with_output_dir(&out);
    let err = execute(&config).unwrap_err();

    assert!(matches!(
        err,
        RunError::Scanner(ScannerError::InitFailed { ref scanner, .. }) if scanner == "refuses"
    ));
    assert_eq!(read_table(&out, "status"), "Domain,Status\nold.com,ok\n");
}

#[test]
fn test_rerun_replaces_table() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");

    let first = write_domains(dir.path(), "first.csv", "a.com\nb.com\n");
    execute(&RunConfig::new(first, names(&["status"])).with_output_dir(&out)).unwrap();

    let second = write_domains(dir.path(), "second.csv", "c.com\n");
    execute(&RunConfig::new(second, names(&["status"])).with_output_dir(&out)).unwrap();

    assert_eq!(read_table(&out, "status"), "Domain,Status\nc.com,ok\n");
}

#[test]
fn test_sorted_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");
    let input = write_domains(dir.path(), "domains.csv", "zeta.com\nalpha.com\nmid.com\n");

    execute(
        &RunConfig::new(input, names(&["status"]))
            .with_output_dir(&out)
            .with_sort(true),
    )
    .unwrap();

    assert_eq!(
        read_table(&out, "status"),
        "Domain,Status\nalpha.com,ok\nmid.com,ok\nzeta.com,ok\n"
    );
}

#[test]
fn test_header_only_file_yields_header_only_tables() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");
    let input = write_domains(dir.path(), "empty.csv", "Domain Name\n");

    let summary = execute(&RunConfig::new(input, names(&["status"])).with_output_dir(&out)).unwrap();

    assert_eq!(summary.stats.domains, 0);
    assert_eq!(read_table(&out, "status"), "Domain,Status\n");
}

#[test]
fn test_missing_domain_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");
    let missing = dir.path().join("nowhere.csv");

    let err = execute(
        &RunConfig::new(missing.to_string_lossy(), names(&["status"])).with_output_dir(&out),
    )
    .unwrap_err();

    assert!(matches!(err, RunError::Domain(_)));
    assert!(!out.exists());
}

#[test]
fn test_second_run_drops_tables_of_unselected_scanners() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");

    execute(&RunConfig::new("a.com", names(&["status"])).with_output_dir(&out)).unwrap();
    assert_eq!(csv_files(&out), vec![out.join("status.csv")]);

    execute(&RunConfig::new("b.com", names(&["noop"])).with_output_dir(&out)).unwrap();
    assert_eq!(csv_files(&out), vec![out.join("noop.csv")]);
    assert!(RunMetadata::read_from(&out).is_ok());
}

#[test]
fn test_domain_file_inside_results_rejected() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("results");
    fs::create_dir_all(&out).unwrap();
    let input = write_domains(&out, "domains.csv", "a.com\n");

    let err = execute(&RunConfig::new(input, names(&["status"])).with_output_dir(&out)).unwrap_err();
    assert!(matches!(err, RunError::Validation(_)));
    assert_eq!(csv_files(&out), vec![out.join("domains.csv")]);
}
