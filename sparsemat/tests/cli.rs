//! Runs of the `sparsemat` binary over the files in `tests/data`

#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

const PROMPTS: &str = "Choose operation (add, subtract, multiply): \
                       Enter path to first matrix file: \
                       Enter path to second matrix file: ";

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn sparsemat() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sparsemat"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    sparsemat().args(args).output().unwrap()
}

fn run_data(args: &[&str], files: &[&str]) -> Output {
    let paths: Vec<PathBuf> = files.iter().map(|f| data(f)).collect();
    sparsemat()
        .args(args)
        .args(&paths)
        .output()
        .unwrap()
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = sparsemat()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn answers(op: &str, a: &Path, b: &Path) -> String {
    format!("{op}\n{}\n{}\n", a.display(), b.display())
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn multiply_prints_result() {
    let output = run_data(&["multiply"], &["c_2x2.txt", "d_2x2.txt"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Result matrix (2 x 2):\n(0, 0, 11)\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn subtract_prints_sorted_entries() {
    let output = run_data(&["subtract"], &["a_3x3.txt", "b_3x3.txt"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Result matrix (3 x 3):\n(0, 1, 10)\n(1, 1, -7)\n(2, 0, -2)\n"
    );
}

#[test]
fn dimension_mismatch_fails() {
    let output = run_data(&["multiply"], &["e_2x3.txt", "c_2x2.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "Error: Matrix dimensions do not match for multiplication: 2x3 and 2x2\n"
    );
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = sparsemat()
        .arg("add")
        .arg(&missing)
        .arg(data("a_3x3.txt"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("Error: Failed to access"), "{err}");
    assert!(err.contains("missing.txt"));
}

#[test]
fn interactive_is_default() {
    let input = answers("ADD", &data("a_3x3.txt"), &data("b_3x3.txt"));
    let output = run_with_stdin(&[], &input);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        format!("{PROMPTS}Result matrix (3 x 3):\n(1, 1, 7)\n(2, 0, -2)\n")
    );
}

#[test]
fn interactive_unknown_operation() {
    let input = answers("divide", &data("a_3x3.txt"), &data("b_3x3.txt"));
    let output = run_with_stdin(&["interactive"], &input);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), PROMPTS);
    assert_eq!(
        stderr(&output),
        "Error: Invalid operation. Choose add, subtract, or multiply.\n"
    );
}

#[test]
fn json_output() {
    let output = run_data(&["--json", "multiply"], &["c_2x2.txt", "d_2x2.txt"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "rows": 2,
            "cols": 2,
            "entries": [{"row": 0, "col": 0, "value": 11}]
        })
    );
}

#[test]
fn sum_duplicates_flag() {
    let dir = tempfile::tempdir().unwrap();
    let dup = dir.path().join("dup.txt");
    let zero = dir.path().join("zero.txt");
    fs::write(&dup, "rows=1\ncols=1\n(0, 0, 1)\n(0, 0, 2)\n").unwrap();
    fs::write(&zero, "rows=1\ncols=1\n").unwrap();

    let output = sparsemat().arg("add").arg(&dup).arg(&zero).output().unwrap();
    assert_eq!(stdout(&output), "Result matrix (1 x 1):\n(0, 0, 2)\n");

    let output = sparsemat()
        .args(["add", "--sum-duplicates"])
        .arg(&dup)
        .arg(&zero)
        .output()
        .unwrap();
    assert_eq!(stdout(&output), "Result matrix (1 x 1):\n(0, 0, 3)\n");
}

#[test]
fn bounds_check_flag() {
    let dir = tempfile::tempdir().unwrap();
    let outside = dir.path().join("outside.txt");
    fs::write(&outside, "rows=2\ncols=2\n(5, 5, 1)\n").unwrap();

    let output = sparsemat()
        .arg("add")
        .arg(&outside)
        .arg(data("c_2x2.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = sparsemat()
        .args(["--bounds-check", "add"])
        .arg(&outside)
        .arg(data("c_2x2.txt"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "Error: Entry out of bounds at line 3: (5, 5, 1) outside 2x2\n"
    );
}

#[test]
fn info_subcommand() {
    let output = run(&["info", data("a_3x3.txt").to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Dimensions: 3 x 3\nNon-zero elements: 2\nDensity: 0.222222\nOut-of-bounds entries: 0\n"
    );
}
