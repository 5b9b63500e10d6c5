//! CLI integration tests.
//!
//! Runs the litjson binary as a subprocess and checks its stdout and exit code.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

fn litjson_path() -> &'static Path {
    Path::new(env!("CARGO_BIN_EXE_litjson"))
}

fn run(args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(litjson_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn litjson: {}", e));

    {
        let stdin_pipe = child.stdin.as_mut().unwrap();
        stdin_pipe.write_all(stdin.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn parse_stdout(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout))
}

// ============================================================================
// parse
// ============================================================================

#[test]
fn cli_parse_number_from_stdin() {
    let (code, stdout, _stderr) = run(&["parse"], " 1.5 \n");
    assert_eq!(code, 0);
    let out = parse_stdout(&stdout);
    assert_eq!(out["ok"]["kind"], "NUMBER");
    assert_eq!(out["ok"]["number"], 1.5);
}

#[test]
fn cli_parse_literal_argument() {
    let (code, stdout, _stderr) = run(&["parse", "true"], "");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), r#"{"ok":{"kind":"TRUE"}}"#);
}

#[test]
fn cli_parse_error_exit_code() {
    let (code, stdout, _stderr) = run(&["parse", "1 2"], "");
    assert_eq!(code, 1);
    let out = parse_stdout(&stdout);
    assert_eq!(out["err"]["code"], 3);
    assert_eq!(out["err"]["name"], "PARSE_ROOT_NOT_SINGULAR");
}

#[test]
fn cli_parse_empty_stdin() {
    let (code, stdout, _stderr) = run(&["parse"], "");
    assert_eq!(code, 1);
    assert_eq!(parse_stdout(&stdout)["err"]["name"], "PARSE_EXPECT_VALUE");
}

#[test]
fn cli_parse_strict_leading_zero() {
    let (_, compat, _) = run(&["parse", "0123"], "");
    assert_eq!(parse_stdout(&compat)["err"]["code"], 3);

    let (code, strict, _) = run(&["parse", "--strict", "0123"], "");
    assert_eq!(code, 1);
    assert_eq!(parse_stdout(&strict)["err"]["code"], 2);
}

// ============================================================================
// names / corpus / version
// ============================================================================

#[test]
fn cli_names_lists_tables() {
    let (code, stdout, _stderr) = run(&["names"], "");
    assert_eq!(code, 0);
    let out = parse_stdout(&stdout);
    assert_eq!(out["kinds"][3], "NUMBER");
    assert_eq!(out["outcomes"][4], "PARSE_NUMBER_TOO_BIG");
}

#[test]
fn cli_corpus_passes() {
    let corpus = Path::new(env!("CARGO_MANIFEST_DIR")).join("corpus/parse_corpus.json");
    let (code, stdout, stderr) = run(&["corpus", corpus.to_str().unwrap()], "");
    assert_eq!(code, 0, "stdout: {}\nstderr: {}", stdout, stderr);
    assert!(stdout.contains("0 failed"), "{}", stdout);
}

#[test]
fn cli_corpus_missing_file() {
    let (code, _stdout, _stderr) = run(&["corpus", "/nonexistent/corpus.json"], "");
    assert_eq!(code, 2);
}

#[test]
fn cli_version() {
    let (code, stdout, _stderr) = run(&["version"], "");
    assert_eq!(code, 0);
    assert!(stdout.starts_with("litjson v"));
}
