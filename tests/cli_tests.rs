//! End-to-end tests for the security-test binary

mod common;

use assert_cmd::Command;
use common::{project_with_manifest, react_frontend_manifest};
use predicates::prelude::*;

fn security_test() -> Command {
    Command::new(env!("CARGO_BIN_EXE_security-test"))
}

#[test]
fn test_cli_help() {
    security_test()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Security Test Framework CLI bundles canned security checks",
        ));
}

#[test]
fn test_cli_version() {
    security_test()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("security-test 0.1.0"));
}

#[test]
fn test_no_args_prints_usage_and_succeeds() {
    security_test()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_unknown_command_exits_one() {
    security_test()
        .arg("definitely-not-a-command")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_security_command_flags_canned_vulnerabilities() {
    // The fixture sets always trip five checks, so the command exits 1
    security_test()
        .arg("security")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[VULN] XSS Prevention"));
}

#[test]
fn test_single_check_command_passes_for_sql_injection() {
    security_test().arg("security:sql-injection").assert().success();
}

#[test]
fn test_single_check_command_fails_for_xss() {
    security_test().arg("security:xss").assert().code(1);
}

#[test]
fn test_coverage_meets_default_threshold() {
    security_test().arg("coverage").assert().success();
}

#[test]
fn test_coverage_exits_one_below_threshold() {
    security_test()
        .args(["coverage", "--threshold", "95"])
        .assert()
        .code(1);
}

#[test]
fn test_analyze_without_manifest_is_fatal() {
    let temp = tempfile::TempDir::new().unwrap();

    security_test()
        .current_dir(temp.path())
        .arg("analyze")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("package.json not found"));
}

#[test]
fn test_analyze_prints_project_type() {
    let project = project_with_manifest(react_frontend_manifest());

    security_test()
        .current_dir(project.path())
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Type: react-frontend"));
}

#[test]
fn test_auto_writes_the_config_artifact() {
    let project = project_with_manifest(react_frontend_manifest());

    security_test()
        .current_dir(project.path())
        .arg("auto")
        .assert()
        .success();

    let artifact = project.path().join("security-test.config.js");
    assert!(artifact.exists());
    let content = std::fs::read_to_string(artifact).unwrap();
    assert!(content.contains("export default"));
}

#[test]
fn test_report_coverage_saves_a_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let reports = temp.path().join("reports");

    security_test()
        .args([
            "report:coverage",
            "json",
            reports.to_str().unwrap(),
        ])
        .assert()
        .success();

    let entries: Vec<_> = std::fs::read_dir(&reports).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_json_format_emits_machine_readable_summary() {
    let output = security_test()
        .args(["--format", "json", "security"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["passed"].as_u64().unwrap() + value["failed"].as_u64().unwrap(), 16);
}
