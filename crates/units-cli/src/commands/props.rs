//! Strip-props command implementation

use colored::Colorize;

use units_blocks::{DeprecatedProperty, UnitsDocument, strip_properties};

use super::edit::{self, EditOptions};
use crate::error::Result;
use crate::settings::Settings;

/// Run the strip-props command
pub fn run_strip_props(settings: &Settings, options: EditOptions) -> Result<()> {
    let doc = UnitsDocument::open(&settings.file)?;
    println!("Processing {} lines...", doc.line_count());

    let strip = strip_properties(doc.text());
    for removed in &strip.removed {
        println!("Removed '{}' at line {}", removed.property, removed.line);
    }

    println!();
    println!("{}", "=== REMOVAL SUMMARY ===".bold());
    for property in DeprecatedProperty::ALL {
        println!("Removed {} '{}' lines", strip.count(property), property);
    }
    println!("Total lines removed: {}", strip.total_removed());
    edit::print_line_totals(strip.original_lines, strip.new_lines);

    edit::apply(&doc, &strip.output, options)
}
