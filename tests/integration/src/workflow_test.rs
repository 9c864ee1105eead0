//! Whole-workflow tests: analyze, strip properties, strip quizzes, on disk.

use pretty_assertions::assert_eq;
use units_blocks::{
    QUIZZES_KEY, ReportOptions, UnitsDocument, WriteOutcome, analyze, strip_blocks,
    strip_properties,
};
use units_fs::compute_content_checksum;
use units_test_utils::TestWorkspace;
use units_test_utils::fixtures::{SAMPLE_UNITS_JS, sample};

#[test]
fn full_cleanup_of_sample() {
    let ws = TestWorkspace::with_sample();

    // Analysis predicts what the block remover will drop.
    let doc = UnitsDocument::open(ws.units_path()).unwrap();
    let report = analyze(doc.text(), QUIZZES_KEY, ReportOptions::default());
    assert_eq!(report.lines_to_remove, sample::QUIZ_LINES);
    assert_eq!(doc.checksum(), compute_content_checksum(SAMPLE_UNITS_JS));

    let props = strip_properties(doc.text());
    assert_eq!(doc.replace(&props.output).unwrap(), WriteOutcome::Written);

    let doc = UnitsDocument::open(ws.units_path()).unwrap();
    assert_eq!(doc.line_count(), sample::TOTAL_LINES - sample::DEPRECATED_TOTAL);

    let quizzes = strip_blocks(doc.text(), QUIZZES_KEY);
    assert_eq!(doc.replace(&quizzes.output).unwrap(), WriteOutcome::Written);

    let doc = UnitsDocument::open(ws.units_path()).unwrap();
    assert_eq!(doc.line_count(), sample::FULLY_CLEANED_LINES);
    ws.assert_units_not_contains(QUIZZES_KEY);
    ws.assert_units_not_contains("completionDate: null");
    ws.assert_units_contains("unitId: \"unit1\"");
}

#[test]
fn rerunning_removers_leaves_file_untouched() {
    let ws = TestWorkspace::with_sample();

    let doc = UnitsDocument::open(ws.units_path()).unwrap();
    doc.replace(&strip_blocks(doc.text(), QUIZZES_KEY).output).unwrap();

    let doc = UnitsDocument::open(ws.units_path()).unwrap();
    let again = strip_blocks(doc.text(), QUIZZES_KEY);
    assert!(again.blocks.is_empty());
    assert_eq!(doc.replace(&again.output).unwrap(), WriteOutcome::Unchanged);

    let props = strip_properties(doc.text());
    doc.replace(&props.output).unwrap();
    let doc = UnitsDocument::open(ws.units_path()).unwrap();
    let props_again = strip_properties(doc.text());
    assert_eq!(props_again.total_removed(), 0);
    assert_eq!(doc.replace(&props_again.output).unwrap(), WriteOutcome::Unchanged);
}

#[test]
fn crlf_file_keeps_its_line_endings() {
    let crlf = SAMPLE_UNITS_JS.replace('\n', "\r\n");
    let ws = TestWorkspace::with_units(&crlf);

    let doc = UnitsDocument::open(ws.units_path()).unwrap();
    let quizzes = strip_blocks(doc.text(), QUIZZES_KEY);
    assert_eq!(quizzes.lines_removed(), sample::STRIPPED_QUIZ_LINES);
    doc.replace(&quizzes.output).unwrap();

    let content = ws.read_units();
    assert_eq!(content.matches("\r\n").count(), content.matches('\n').count());
}

#[test]
fn report_is_read_only() {
    let ws = TestWorkspace::with_sample();
    let doc = UnitsDocument::open(ws.units_path()).unwrap();

    let _ = analyze(doc.text(), QUIZZES_KEY, ReportOptions::default());

    assert_eq!(ws.read_units(), SAMPLE_UNITS_JS);
}
