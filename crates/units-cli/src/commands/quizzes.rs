//! Strip-quizzes command implementation

use colored::Colorize;

use units_blocks::{BlockKind, UnitsDocument, strip_blocks};

use super::edit::{self, EditOptions};
use crate::error::Result;
use crate::settings::Settings;

/// Run the strip-quizzes command
pub fn run_strip_quizzes(settings: &Settings, options: EditOptions) -> Result<()> {
    let doc = UnitsDocument::open(&settings.file)?;
    let name = settings.block_name();
    println!("Processing {} lines...", doc.line_count());

    let strip = strip_blocks(doc.text(), &settings.key);
    for block in &strip.blocks {
        match block.kind {
            BlockKind::Empty => println!("Removed empty {} at line {}", name, block.start_line),
            BlockKind::Populated => println!(
                "Removed populated {} at lines {}-{} ({} lines)",
                name,
                block.start_line,
                block.end_line,
                block.line_count()
            ),
        }
        if !block.closed {
            println!(
                "{} block at line {} never closes; removed through end of file",
                "warning:".yellow().bold(),
                block.start_line
            );
        }
    }

    println!();
    println!("{}", "=== REMOVAL SUMMARY ===".bold());
    println!("Removed {} {} arrays", strip.blocks.len(), name);
    println!("Removed {} total lines", strip.lines_removed());
    edit::print_line_totals(strip.original_lines, strip.new_lines);

    edit::apply(&doc, &strip.output, options)
}
