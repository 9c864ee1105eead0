//! Shared tail of the mutating commands: diff, dry run, write.

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use units_blocks::{UnitsDocument, WriteOutcome};

use crate::error::Result;

/// Flags shared by `strip-props` and `strip-quizzes`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditOptions {
    pub dry_run: bool,
    pub diff: bool,
}

/// Print before/after line totals.
pub fn print_line_totals(original: usize, new: usize) {
    println!("Original file: {} lines", original);
    println!("New file: {} lines", new);
    println!("Reduction: {} lines", original - new);
}

/// Finish an edit: optionally show the diff, then write unless dry-running.
pub fn apply(doc: &UnitsDocument, new_text: &str, options: EditOptions) -> Result<()> {
    if options.diff {
        print_diff(doc, new_text);
    }

    println!();
    if options.dry_run {
        println!(
            "{} {} was not modified.",
            "[dry-run]".yellow().bold(),
            doc.path().display()
        );
        return Ok(());
    }

    match doc.replace(new_text)? {
        WriteOutcome::Written => println!(
            "{} {} has been updated.",
            "OK".green().bold(),
            doc.path().display()
        ),
        WriteOutcome::Unchanged => println!(
            "{} Nothing to remove; {} left untouched.",
            "OK".green().bold(),
            doc.path().display()
        ),
    }
    Ok(())
}

fn print_diff(doc: &UnitsDocument, new_text: &str) {
    let old_text = doc.text();
    if old_text == new_text {
        println!("{}", "No differences.".dimmed());
        return;
    }

    let name = doc.path().display().to_string();
    let diff = TextDiff::from_lines(old_text, new_text);

    println!();
    println!("{}", format!("--- {name}").red());
    println!("{}", format!("+++ {name}").green());
    for group in diff.grouped_ops(2) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        let old_range = first.old_range().start..last.old_range().end;
        let new_range = first.new_range().start..last.new_range().end;
        println!(
            "{}",
            format!(
                "@@ -{},{} +{},{} @@",
                old_range.start + 1,
                old_range.len(),
                new_range.start + 1,
                new_range.len()
            )
            .cyan()
        );
        for op in &group {
            for change in diff.iter_changes(op) {
                let line = change.value().trim_end_matches(['\n', '\r']);
                match change.tag() {
                    ChangeTag::Delete => println!("{}", format!("-{line}").red()),
                    ChangeTag::Insert => println!("{}", format!("+{line}").green()),
                    ChangeTag::Equal => println!(" {line}"),
                }
            }
        }
    }
}
