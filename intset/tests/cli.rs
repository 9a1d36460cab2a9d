//! End-to-end checks of the `intset` binary

#![cfg(feature = "cli")]

use std::process::{Command, Output};

fn intset(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_intset"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run intset binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn json_stdout(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_render() {
    let output = intset(&["render", "144", "1", "9", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{1 9 144}");

    let output = intset(&["render"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{}");
}

#[test]
fn test_render_rejects_negative() {
    let output = intset(&["render", "1", "-3"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr(&output).contains("cannot add -3"));
}

#[test]
fn test_render_json() {
    let output = intset(&["--format", "json", "render", "2", "1"]);
    assert!(output.status.success());
    assert_eq!(
        json_stdout(&output),
        serde_json::json!({ "members": [1, 2], "len": 2 })
    );
}

#[test]
fn test_has() {
    let output = intset(&["has", "{1 2}", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "true");

    let output = intset(&["has", "1,2", "1000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "false");

    let output = intset(&["--format", "json", "has", "{5}", "5"]);
    assert_eq!(
        json_stdout(&output),
        serde_json::json!({ "value": 5, "member": true })
    );
}

#[test]
fn test_has_rejects_negative() {
    let output = intset(&["has", "{1 2}", "-1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot look up -1"));
}

#[test]
fn test_len() {
    let output = intset(&["len", "{1 9 144}"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3");

    let output = intset(&["--format", "json", "len", "1,2,3"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), r#"{"len":3}"#);
}

#[test]
fn test_eval() {
    let output = intset(&["eval", "intersection", "{1 2 3}", "2,3,4"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{2 3}");

    let output = intset(&["eval", "union", "{1 2 3}", "{2 3 4}"]);
    assert_eq!(stdout(&output), "{1 2 3 4}");

    let output = intset(&["eval", "difference", "{1 2 3}", "{2 3 4}"]);
    assert_eq!(stdout(&output), "{1}");

    let output = intset(&[
        "--format",
        "json",
        "eval",
        "symmetric-difference",
        "{1 2 3}",
        "{2 3 4}",
    ]);
    assert!(output.status.success());
    assert_eq!(
        json_stdout(&output),
        serde_json::json!({ "op": "symmetric_difference", "members": [1, 4], "len": 2 })
    );
}

#[test]
fn test_malformed_operand() {
    let output = intset(&["len", "{1 2"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to parse set"));
}

#[test]
fn test_huge_input_is_rejected_not_allocated() {
    let output = intset(&["len", "{18446744073709551615}"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to parse set"));

    let output = intset(&["render", "4294967296"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot add 4294967296"));

    let output = intset(&["--capacity", "18446744073709551615", "render", "1"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid capacity"));
}
