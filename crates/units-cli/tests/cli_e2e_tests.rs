//! End-to-end tests that invoke the compiled `units` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use units_test_utils::TestWorkspace;
use units_test_utils::fixtures::{SAMPLE_UNITS_JS, sample};

/// A `units` command running inside `ws`.
fn units(ws: &TestWorkspace) -> Command {
    let mut cmd = Command::cargo_bin("units").expect("Failed to find units binary");
    cmd.current_dir(ws.root()).env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help and invocation
// ============================================================================

#[test]
fn test_help_lists_subcommands() {
    let ws = TestWorkspace::new();
    units(&ws)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("strip-props"))
        .stdout(predicate::str::contains("strip-quizzes"));
}

#[test]
fn test_no_command_shows_help_hint() {
    let ws = TestWorkspace::new();
    units(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("units --help"));
}

#[test]
fn test_missing_data_file_is_fatal() {
    let ws = TestWorkspace::new();
    units(&ws)
        .arg("analyze")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("units.js"));
}

#[test]
fn test_malformed_config_is_fatal() {
    let ws = TestWorkspace::with_sample();
    ws.write_config("preview_width = \"wide\"\n");

    units(&ws)
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("units-tool.toml"));
}

// ============================================================================
// analyze
// ============================================================================

#[test]
fn test_analyze_summary() {
    let ws = TestWorkspace::with_sample();
    units(&ws)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines in file: 93"))
        .stdout(predicate::str::contains("Total quizzes arrays found: 7"))
        .stdout(predicate::str::contains("  - Empty arrays: 3"))
        .stdout(predicate::str::contains("  - Populated arrays: 4"))
        .stdout(predicate::str::contains("  Lines 28-36 (9 lines): quizzes: ["))
        .stdout(predicate::str::contains("Total lines to be removed: 18"))
        .stdout(predicate::str::contains(
            "File will shrink from 93 to approximately 75 lines",
        ))
        .stdout(predicate::str::contains("'quizzes: [' pattern: 4 occurrences"))
        .stdout(predicate::str::contains("'quizzes:[' pattern: 2 occurrences"));

    assert_eq!(ws.read_units(), SAMPLE_UNITS_JS);
}

#[test]
fn test_analyze_json() {
    let ws = TestWorkspace::with_sample();
    let output = units(&ws).args(["analyze", "--json"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_lines"], sample::TOTAL_LINES);
    assert_eq!(report["lines_to_remove"], sample::QUIZ_LINES);
    assert_eq!(report["empty"].as_array().unwrap().len(), sample::EMPTY_BLOCKS);
    assert_eq!(report["patterns"]["multiline_start"], 1);
}

#[test]
fn test_analyze_sample_limits_from_config() {
    let ws = TestWorkspace::with_sample();
    ws.write_config("empty_samples = 1\npopulated_samples = 2\n");

    units(&ws)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("... and 2 more"))
        .stdout(predicate::str::contains("Line 44").not());
}

#[test]
fn test_file_flag_targets_other_path() {
    let ws = TestWorkspace::new();
    std::fs::write(ws.root().join("other.js"), "quizzes: [],\n").unwrap();

    units(&ws)
        .args(["analyze", "--file", "other.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines in file: 1"));
}

// ============================================================================
// strip-props
// ============================================================================

#[test]
fn test_strip_props_rewrites_file() {
    let ws = TestWorkspace::with_sample();
    units(&ws)
        .arg("strip-props")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing 93 lines..."))
        .stdout(predicate::str::contains("Removed 'completionDate: null' at line 17"))
        .stdout(predicate::str::contains("Removed 2 'completed: false,' lines"))
        .stdout(predicate::str::contains("Removed 6 'current: false' lines"))
        .stdout(predicate::str::contains("Total lines removed: 10"))
        .stdout(predicate::str::contains("New file: 83 lines"));

    assert_eq!(
        ws.read_units().lines().count(),
        sample::TOTAL_LINES - sample::DEPRECATED_TOTAL
    );
}

#[test]
fn test_strip_props_dry_run_with_diff() {
    let ws = TestWorkspace::with_units("a,\n  current: false\nb,\n");
    units(&ws)
        .args(["strip-props", "--dry-run", "--diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-  current: false"))
        .stdout(predicate::str::contains("[dry-run]"));

    assert_eq!(ws.read_units(), "a,\n  current: false\nb,\n");
}

// ============================================================================
// strip-quizzes
// ============================================================================

#[test]
fn test_strip_quizzes_rewrites_file() {
    let ws = TestWorkspace::with_sample();
    units(&ws)
        .arg("strip-quizzes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed empty quizzes at line 20"))
        .stdout(predicate::str::contains(
            "Removed populated quizzes at lines 28-36 (9 lines)",
        ))
        .stdout(predicate::str::contains("Removed 7 quizzes arrays"))
        .stdout(predicate::str::contains("Removed 18 total lines"))
        .stdout(predicate::str::contains("Reduction: 18 lines"));

    ws.assert_units_not_contains("quizzes:");
}

#[test]
fn test_strip_quizzes_twice_reports_nothing_to_remove() {
    let ws = TestWorkspace::with_sample();
    units(&ws).arg("strip-quizzes").assert().success();
    let after_first = ws.read_units();

    units(&ws)
        .arg("strip-quizzes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 0 quizzes arrays"))
        .stdout(predicate::str::contains("left untouched"));

    assert_eq!(ws.read_units(), after_first);
}

#[test]
fn test_strip_quizzes_warns_on_unterminated_block() {
    let ws = TestWorkspace::with_units("keep,\nquizzes: [\n  1,\n");
    units(&ws)
        .arg("strip-quizzes")
        .assert()
        .success()
        .stdout(predicate::str::contains("never closes"));

    assert_eq!(ws.read_units(), "keep,\n");
}
