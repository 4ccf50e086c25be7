// Integration tests for the dataholder binary
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

/// Run the binary against an isolated, empty config file
fn run_with_config(config: &str, args: &[&str]) -> (Output, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("dataholder.toml");
    fs::write(&config_path, config).expect("Failed to write config file");

    let output = Command::new(env!("CARGO_BIN_EXE_dataholder"))
        .arg("--config-file")
        .arg(&config_path)
        .args(args)
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    (output, temp_dir)
}

fn run(args: &[&str]) -> Output {
    run_with_config("", args).0
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_lists_options() {
    let output = run(&["--help"]);
    let text = stdout(&output);

    assert!(output.status.success());
    assert!(text.contains("--take") && text.contains("--capacity") && text.contains("--log-format"),
        "Expected help output to list options, got: {}", text);
}

#[test]
fn test_values_round_trip_in_fifo_order() {
    let output = run(&["3", "-1", "4"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "3\n-1\n4\n");
}

#[test]
fn test_json_output() {
    let output = run(&["--output", "json", "--take", "1", "5", "6"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["added"], serde_json::json!([5, 6]));
    assert_eq!(value["retrieved"], serde_json::json!([5]));
}

#[test]
fn test_taking_from_empty_queue_fails() {
    let output = run(&["--quiet", "--take", "2", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Queue is empty"), "unexpected stderr: {}", stderr);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_capacity_from_config_file() {
    let (output, _dir) = run_with_config("[queue]\ncapacity = 1\n", &["--quiet", "1", "2"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Failed to add value 2"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_capacity_flag_overrides_config_file() {
    let (output, _dir) = run_with_config("[queue]\ncapacity = 1\n", &["--capacity", "2", "1", "2"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n2\n");
}

#[test]
fn test_conflicting_log_flags_rejected() {
    let output = run(&["--verbose", "--quiet", "1"]);
    assert!(!output.status.success());
}

#[test]
fn test_json_logs_written_to_file() {
    let (output, dir) = run_with_config("", &["--log-format", "json", "--log-file", "run.log", "--log-file-level", "debug", "1"]);
    assert!(output.status.success());

    let log_path = Path::new(dir.path()).join("run.log");
    let content = fs::read_to_string(&log_path).expect("log file should exist");
    let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();

    assert!(first["timestamp"].is_string());
    assert!(first["level"].is_string());
    assert!(first["message"].is_string());
}

/// Run the binary with config discovery confined to `dir`
fn run_discovering(dir: &Path, env_config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dataholder"))
        .args(args)
        .env("DATAHOLDER_CONFIG", env_config)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir)
        .current_dir(dir)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_missing_env_config_file_fails() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    let output = run_discovering(temp_dir.path(), &missing, &["-v", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("missing.toml"), "unexpected stderr: {}", stderr);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_env_config_file_is_used() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("env.toml");
    fs::write(&config_path, "[queue]\ncapacity = 1\n").unwrap();

    let output = run_discovering(temp_dir.path(), &config_path, &["--quiet", "1", "2"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Failed to add value 2"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_file_log_level_without_log_file_in_config_still_runs() {
    let (output, _dir) = run_with_config("[base]\nfile-log-level = \"debug\"\n", &["1"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(stdout(&output), "1\n");
}
