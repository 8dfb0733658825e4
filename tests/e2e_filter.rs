// LineSift - tests/e2e_filter.rs
//
// End-to-end tests for the filter pipeline.
//
// These tests exercise the real filesystem: real files written into a
// temporary directory, read back through the line source, filtered, and
// written through the line sink. No mocks, no stubs.

use linesift::app::demo::{self, DemoSettings};
use linesift::{process, FileDataProcessor, TextEncoding};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write_input(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.path(name);
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(&path, content).unwrap();
        path
    }
}

fn read_output(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

// =============================================================================
// Counting
// =============================================================================

/// The count equals the number of lines containing the keyword.
#[test]
fn e2e_count_matches_lines_containing_keyword() {
    let ws = Workspace::new();
    let lines = [
        "error: disk full",
        "info: started",
        "error: retrying",
        "warn: slow",
        "terror in the logs",
    ];
    let input = ws.write_input("in.txt", &lines);
    let output = ws.path("out.txt");

    let expected = lines.iter().filter(|l| l.contains("error")).count();
    let count = process(&input, &output, "error").unwrap();

    assert_eq!(count, expected);
    assert_eq!(
        read_output(&output),
        vec!["error: disk full", "error: retrying", "terror in the logs"]
    );
}

/// input = ["foo","bar keyword","baz"], keyword = "keyword" -> ["bar keyword"].
#[test]
fn e2e_single_match_scenario() {
    let ws = Workspace::new();
    let input = ws.write_input("in.txt", &["foo", "bar keyword", "baz"]);
    let output = ws.path("out.txt");

    assert_eq!(process(&input, &output, "keyword").unwrap(), 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "bar keyword\n");
}

// =============================================================================
// Round-trip and idempotence
// =============================================================================

/// When every line matches, output equals input line-for-line.
#[test]
fn e2e_all_lines_match_round_trips() {
    let ws = Workspace::new();
    let lines = ["k one", "two k", "thrke", "k"];
    let input = ws.path("in.txt");
    // No trailing newline on the last line: output normalises it.
    fs::write(&input, lines.join("\n")).unwrap();
    let output = ws.path("out.txt");

    assert_eq!(process(&input, &output, "k").unwrap(), lines.len());
    assert_eq!(read_output(&output), lines);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!("{}\n", lines.join("\n"))
    );
}

/// Two runs into fresh outputs produce byte-identical files.
#[test]
fn e2e_repeated_runs_are_byte_identical() {
    let ws = Workspace::new();
    let input = ws.write_input("in.txt", &["alpha x", "beta", "gamma x", "x"]);
    let first = ws.path("out1.txt");
    let second = ws.path("out2.txt");

    let processor = FileDataProcessor::new(TextEncoding::Utf8);
    processor.process(&input, &first, "x").unwrap();
    processor.process(&input, &second, "x").unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

/// An existing output file is truncated, not appended to.
#[test]
fn e2e_output_is_truncated() {
    let ws = Workspace::new();
    let input = ws.write_input("in.txt", &["keep me", "drop"]);
    let output = ws.path("out.txt");
    fs::write(&output, "old line 1\nold line 2\nold line 3\n").unwrap();

    process(&input, &output, "keep").unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me\n");
}

// =============================================================================
// Boundaries
// =============================================================================

/// Empty input -> empty output file exists, count 0.
#[test]
fn e2e_empty_input_creates_empty_output() {
    let ws = Workspace::new();
    let input = ws.path("in.txt");
    fs::write(&input, "").unwrap();
    let output = ws.path("out.txt");

    assert_eq!(process(&input, &output, "anything").unwrap(), 0);
    assert!(output.exists());
    assert_eq!(fs::metadata(&output).unwrap().len(), 0);
}

/// Empty keyword keeps every line.
#[test]
fn e2e_empty_keyword_keeps_everything() {
    let ws = Workspace::new();
    let lines = ["first", "", "third"];
    let input = ws.write_input("in.txt", &lines);
    let output = ws.path("out.txt");

    assert_eq!(process(&input, &output, "").unwrap(), lines.len());
    assert_eq!(read_output(&output), lines);
}

/// Matching is case-sensitive.
#[test]
fn e2e_keyword_is_case_sensitive() {
    let ws = Workspace::new();
    let input = ws.write_input("in.txt", &["Keyword", "keyword", "KEYWORD"]);
    let output = ws.path("out.txt");

    assert_eq!(process(&input, &output, "keyword").unwrap(), 1);
    assert_eq!(read_output(&output), vec!["keyword"]);
}

/// CRLF input is normalised to LF output.
#[test]
fn e2e_crlf_input_normalised() {
    let ws = Workspace::new();
    let input = ws.path("in.txt");
    fs::write(&input, "a hit\r\nmiss\r\nhit b\r\n").unwrap();
    let output = ws.path("out.txt");

    assert_eq!(process(&input, &output, "hit").unwrap(), 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "a hit\nhit b\n");
}

/// Classic-Mac input terminated by lone `\r` splits into separate lines.
#[test]
fn e2e_cr_only_input_split_into_lines() {
    let ws = Workspace::new();
    let input = ws.path("in.txt");
    fs::write(&input, "foo\rbar keyword\rbaz\r").unwrap();
    let output = ws.path("out.txt");

    assert_eq!(process(&input, &output, "keyword").unwrap(), 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "bar keyword\n");
}

// =============================================================================
// Failures
// =============================================================================

/// Missing input fails with an I/O error and never creates the output.
#[test]
fn e2e_missing_input_fails_without_creating_output() {
    let ws = Workspace::new();
    let output = ws.path("out.txt");

    let err = process(&ws.path("missing.txt"), &output, "keyword").unwrap_err();
    assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    assert!(!output.exists());
}

/// Unwritable output path fails with an I/O error.
#[test]
fn e2e_unwritable_output_fails() {
    let ws = Workspace::new();
    let input = ws.write_input("in.txt", &["keyword"]);
    let output = ws.path("no_such_dir").join("out.txt");

    let err = process(&input, &output, "keyword").unwrap_err();
    assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
}

/// Strict decoding rejects invalid UTF-8 and leaves no output behind.
#[test]
fn e2e_invalid_utf8_fails_in_strict_mode() {
    let ws = Workspace::new();
    let input = ws.path("in.txt");
    fs::write(&input, b"good keyword\n\xc3\x28 keyword\n").unwrap();
    let output = ws.path("out.txt");

    let err = process(&input, &output, "keyword").unwrap_err();
    assert_eq!(err.io_kind(), Some(io::ErrorKind::InvalidData));
    assert!(!output.exists());
}

// =============================================================================
// Demo workload
// =============================================================================

/// The default demo finds every 1000th of 100,000 lines and cleans up.
#[test]
fn e2e_demo_default_workload() {
    let ws = Workspace::new();
    let settings = DemoSettings::default();

    let result = demo::run_demo(ws.dir.path(), &settings, FileDataProcessor::default()).unwrap();

    assert_eq!(result.matched_line_count, 100);
    assert_eq!(result.matched_line_count, settings.keyword_lines());
    assert_eq!(fs::read_dir(ws.dir.path()).unwrap().count(), 0);
}
