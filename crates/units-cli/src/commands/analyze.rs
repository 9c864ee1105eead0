//! Analyze command implementation
//!
//! Reports on every block of the configured key. Never writes.

use colored::Colorize;

use units_blocks::{QuizReport, UnitsDocument, analyze};

use crate::error::Result;
use crate::settings::Settings;

/// Run the analyze command
pub fn run_analyze(settings: &Settings, json: bool) -> Result<()> {
    let doc = UnitsDocument::open(&settings.file)?;
    let report = analyze(doc.text(), &settings.key, settings.report_options());

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, settings);
    }
    Ok(())
}

fn heading(text: &str) {
    println!();
    println!("{}", format!("=== {} ===", text.to_uppercase()).bold());
}

fn print_report(report: &QuizReport, settings: &Settings) {
    let name = settings.block_name();

    println!("Total lines in file: {}", report.total_lines);

    heading(&format!("{name} array analysis"));
    println!("Total {} arrays found: {}", name, report.total_blocks());
    println!("  - Empty arrays: {}", report.empty.len());
    println!("  - Populated arrays: {}", report.populated.len());

    heading(&format!("empty {name} (first {})", settings.empty_samples));
    for entry in report.empty.iter().take(settings.empty_samples) {
        println!("  Line {}: {}", entry.line, entry.content.dimmed());
    }
    if report.empty.len() > settings.empty_samples {
        println!("  ... and {} more", report.empty.len() - settings.empty_samples);
    }

    heading(&format!("populated {name} (first {})", settings.populated_samples));
    for entry in report.populated.iter().take(settings.populated_samples) {
        let marker = if entry.closed {
            String::new()
        } else {
            format!(" {}", "[unterminated]".yellow())
        };
        println!(
            "  Lines {}-{} ({} lines): {}{}",
            entry.start,
            entry.end,
            entry.lines,
            entry.preview.dimmed(),
            marker
        );
    }
    if report.populated.len() > settings.populated_samples {
        println!(
            "  ... and {} more",
            report.populated.len() - settings.populated_samples
        );
    }

    heading("removal impact");
    println!("Total lines to be removed: {}", report.lines_to_remove);
    println!(
        "File will shrink from {} to approximately {} lines",
        report.total_lines,
        report.remaining_lines()
    );

    let open = report.unterminated().count();
    if open > 0 {
        println!(
            "{} {} block(s) never close; they run to the end of the file.",
            "warning:".yellow().bold(),
            open
        );
    }

    heading("formatting patterns");
    let key = &report.key;
    println!("  '{} [' pattern: {} occurrences", key, report.patterns.with_space);
    println!("  '{}[' pattern: {} occurrences", key, report.patterns.no_space);
    println!(
        "  '{}' on separate line from '[': {} occurrences",
        key, report.patterns.multiline_start
    );
}
