use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "childinfo";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage:").and(contains("start")).and(contains("record")));
}

#[test]
/// Record command should print the sample record as JSON.
fn record_prints_sample_json() {
    let output = Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("record")
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["name"], "John Doe");
    assert_eq!(record["total_grade"], "A");
    assert_eq!(record["marks"].as_array().map(Vec::len), Some(3));
}

/// Runs a headless plain-text login and returns stdout.
fn headless_stdout(role: &str) -> String {
    let output = Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["start", "--headless", "--as", role])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
/// Headless child login shows the profile fields only.
fn headless_child_dashboard() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--as", "child"])
        .assert()
        .success()
        .stdout(
            contains("Name: John Doe")
                .and(contains("Overall Attendance: 85%"))
                .and(contains("CGPA").not()),
        )
        .stderr(contains("Starting ChildInfo in headless mode"));
}

#[test]
/// Stdout carries exactly one line per dashboard field and nothing else.
fn headless_plain_output_is_one_line_per_field() {
    let child = headless_stdout("child");
    assert_eq!(child.lines().count(), 6, "child stdout: {:?}", child);
    assert!(child.starts_with("Name: John Doe\n"));
    assert!(!child.contains('\x1b'));

    let parent = headless_stdout("parent");
    assert_eq!(parent.lines().count(), 10, "parent stdout: {:?}", parent);
    assert!(parent.ends_with("CGPA: 8.9\n"));
    assert!(!parent.contains("[INFO]"));
}

#[test]
/// Headless parent login in JSON mode lists all ten fields.
fn headless_parent_dashboard_json() {
    let output = Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["start", "--headless", "--as", "parent", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let fields: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let fields = fields.as_array().unwrap();
    assert_eq!(fields.len(), 10);
    assert!(
        fields
            .iter()
            .any(|f| f["label"] == "CGPA" && f["value"] == "8.9")
    );
}

#[test]
/// Headless mode without a role should fail with a helpful message.
fn headless_without_role_fails() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless"])
        .assert()
        .failure()
        .stderr(contains("--as"));
}

#[test]
/// A role only makes sense together with headless mode.
fn role_without_headless_is_rejected() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--as", "parent"])
        .assert()
        .failure()
        .stderr(contains("--headless"));
}
