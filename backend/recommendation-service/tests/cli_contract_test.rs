mod common;

use serde_json::{json, Value};
use std::path::Path;
use std::process::{Command, Output};

fn command(model_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_recommend"));
    cmd.args(args).env("MODEL_DIR", model_dir).env_remove("RUST_LOG");
    cmd
}

fn run(model_dir: &Path, args: &[&str]) -> Output {
    command(model_dir, args)
        .output()
        .expect("Failed to spawn recommend binary")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should hold one JSON object")
}

fn stderr_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stderr).expect("stderr should hold one JSON object")
}

#[test]
fn test_success_prints_response_on_stdout() {
    let dir = common::model_dir(true);
    let output = run(dir.path(), &["5"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_eq!(
        stdout_json(&output),
        json!({
            "user_id": 5,
            "recommendations": [{"product_id": 102, "predicted_rating": 8.0}],
            "count": 1
        })
    );
}

#[test]
fn test_optional_arguments() {
    let dir = common::model_dir(true);
    let output = run(dir.path(), &["99", "2", "0.0"]);

    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["count"], 2);
    assert_eq!(body["recommendations"][0]["product_id"], 103);
    assert_eq!(body["recommendations"][1]["product_id"], 101);
}

#[test]
fn test_missing_user_id() {
    let dir = common::model_dir(true);
    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_json(&output)["error"]
        .as_str()
        .unwrap()
        .contains("User ID required"));
}

#[test]
fn test_parse_errors_exit_with_code_one() {
    let dir = common::model_dir(true);

    for args in [&["five"][..], &["5", "ten"][..], &["5", "10", "high"][..]] {
        let output = run(dir.path(), args);
        assert_eq!(output.status.code(), Some(1), "args: {:?}", args);
        assert!(output.stdout.is_empty());
        assert!(stderr_json(&output)["error"].is_string());
    }
}

#[test]
fn test_input_validated_before_artifacts_are_loaded() {
    let output = run(Path::new("/nonexistent/model/dir"), &["not-a-user"]);

    assert_eq!(output.status.code(), Some(1));
    let error = stderr_json(&output)["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Invalid input"), "got: {}", error);
}

#[test]
fn test_missing_artifacts_reported_as_error() {
    let output = run(Path::new("/nonexistent/model/dir"), &["5"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let error = stderr_json(&output)["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Artifact unavailable"), "got: {}", error);
}

#[test]
fn test_missing_interaction_table_is_not_an_error() {
    let dir = common::model_dir(false);
    let output = run(dir.path(), &["5", "10", "0"]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert_eq!(stdout_json(&output)["count"], 4);
}

#[test]
fn test_server_settings_do_not_affect_cli() {
    let dir = common::model_dir(true);
    let output = command(dir.path(), &["5"])
        .env("HTTP_PORT", "http")
        .env("MAX_TOP_N", "many")
        .env("DEFAULT_MIN_RATING", "high")
        .output()
        .expect("Failed to spawn recommend binary");

    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    assert!(output.stderr.is_empty());
    assert_eq!(stdout_json(&output)["count"], 1);
}
