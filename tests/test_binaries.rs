//! Integration tests for the clockmatrix binary
//!
//! Runs the compiled binary and checks its output and exit status.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn clockmatrix(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_clockmatrix"))
        .args(args)
        .output()
        .expect("Failed to execute clockmatrix")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_lists_subcommands() {
    let output = clockmatrix(&["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for cmd in ["lookup", "table", "check", "header", "index"] {
        assert!(text.contains(cmd), "help does not mention {}", cmd);
    }
}

#[test]
fn test_version() {
    let output = clockmatrix(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("clockmatrix"));
}

#[test]
fn test_no_arguments_shows_help_and_fails() {
    let output = clockmatrix(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_lookup_by_index() {
    let output = clockmatrix(&["--rows", "6", "--cols", "6", "lookup", "18"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "27");
}

#[test]
fn test_lookup_alias_and_trailing_global_args() {
    let output = clockmatrix(&["l", "3", "--rows", "6", "--cols", "6"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "9");
}

#[test]
fn test_lookup_by_time_on_default_wall() {
    // 11:59 is the bottom-right clock: (row 23, col 29)
    let output = clockmatrix(&["lookup", "--time", "11:59"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "638");
}

#[test]
fn test_lookup_out_of_range_fails() {
    let output = clockmatrix(&["--rows", "6", "--cols", "6", "lookup", "36"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"));
}

#[test]
fn test_zero_tile_side_fails() {
    let output = clockmatrix(&["--tile-side", "0", "check"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid grid"));
}

#[test]
fn test_huge_tile_side_is_one_tile() {
    let output = clockmatrix(&[
        "--rows",
        "2",
        "--cols",
        "2",
        "--tile-side",
        "8589934592",
        "table",
    ]);
    assert!(output.status.success());
    let values: Vec<usize> = stdout(&output)
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(values, vec![0, 1, 2, 3]);
}

#[test]
fn test_table_output() {
    let output = clockmatrix(&["--rows", "4", "--cols", "4", "--no-parallel", "table"]);
    assert!(output.status.success());
    let values: Vec<usize> = stdout(&output)
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(
        values,
        vec![0, 1, 2, 9, 3, 4, 5, 10, 6, 7, 8, 11, 13, 14, 15, 12]
    );
}

#[test]
fn test_inverse_table_output() {
    let output = clockmatrix(&["--rows", "2", "--cols", "5", "table", "--inverse"]);
    assert!(output.status.success());
    let values: Vec<usize> = stdout(&output)
        .lines()
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(values, vec![0, 1, 2, 5, 6, 7, 3, 4, 8, 9]);
}

#[test]
fn test_check_reports_bijection() {
    let output = clockmatrix(&["--rows", "9", "--cols", "7", "check"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("exactly once"));
}

#[test]
fn test_check_quiet_prints_nothing() {
    let output = clockmatrix(&["-q", "check"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_header_and_index_files() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("led_arrays.h");
    let index = dir.path().join("index.txt");

    let output = clockmatrix(&["-q", "header", "-o", header.to_str().unwrap()]);
    assert!(output.status.success());
    let text = fs::read_to_string(&header).unwrap();
    assert!(text.contains("ledMap[720]"));

    let output = clockmatrix(&["-q", "index", "--output", index.to_str().unwrap()]);
    assert!(output.status.success());
    let text = fs::read_to_string(&index).unwrap();
    assert_eq!(text.lines().count(), 720);
}

#[test]
fn test_header_needs_room_for_every_clock() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("led_arrays.h");

    let output = clockmatrix(&[
        "--rows",
        "6",
        "--cols",
        "6",
        "header",
        "-o",
        header.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(!header.exists());
}

#[test]
fn test_header_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("nope").join("led_arrays.h");

    let output = clockmatrix(&["header", "-o", header.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Output directory does not exist"));
}

#[test]
fn test_header_and_index_report_the_grid() {
    let dir = TempDir::new().unwrap();
    let header = dir.path().join("led_arrays.h");
    let index = dir.path().join("index.txt");

    for (cmd, path) in [("header", &header), ("index", &index)] {
        let output = clockmatrix(&[cmd, "-o", path.to_str().unwrap()]);
        assert!(output.status.success());
        let text = stdout(&output);
        assert!(text.contains("Grid: 24x30 grid, 3x3 tiles"), "{}: {}", cmd, text);
        assert!(text.contains("Wrote"), "{}: {}", cmd, text);
    }
}
