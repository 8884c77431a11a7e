//! Binary-level tests. None of these reach the TUI: every case exits during
//! startup.

mod common;

use common::temp_config;
use std::process::Command;

fn purrfect_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_purrfect"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_options() {
    let output = purrfect_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--fact-interval-ms"));
    assert!(stdout.contains("--log-level"));
}

#[test]
fn version_is_printed() {
    let output = purrfect_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_config_file_exits_with_error() {
    let output = purrfect_cmd()
        .arg("--config")
        .arg("/nonexistent/purrfect/config.toml")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config file"), "got: {stderr}");
    assert!(stderr.contains("does not exist"), "got: {stderr}");
}

#[test]
fn unparsable_config_exits_with_error() {
    let (_dir, path) = temp_config("[rotator\n");
    let output = purrfect_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"), "got: {stderr}");
}

#[test]
fn zero_interval_flag_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = purrfect_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--fact-interval-ms")
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"), "got: {stderr}");
}

#[test]
fn empty_fact_list_exits_with_configuration_error() {
    let (dir, path) = temp_config("");
    let log_file = dir.path().join("purrfect.log");
    std::fs::write(
        &path,
        format!(
            "[content]\nfacts = []\n\n[logging]\nfile = {:?}\n",
            log_file.display().to_string()
        ),
    )
    .unwrap();

    let output = purrfect_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Fact rotator configuration error: fact list is empty"),
        "got: {stderr}"
    );
}

#[test]
fn missing_flag_value_is_a_usage_error() {
    let output = purrfect_cmd()
        .arg("--fact-interval-ms")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {stderr}"
    );
}
