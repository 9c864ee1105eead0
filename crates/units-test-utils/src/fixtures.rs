//! `units.js` fixtures.

/// Two-unit sample covering every block shape the tools care about:
/// same-line empty arrays with and without a space, a trailing-comma-free
/// empty array, multi-line arrays, a key on its own line and a one-line
/// populated array.
pub const SAMPLE_UNITS_JS: &str = include_str!("../../../test-fixtures/units/units.js");

/// Known statistics of [`SAMPLE_UNITS_JS`].
pub mod sample {
    pub const TOTAL_LINES: usize = 93;

    pub const EMPTY_BLOCKS: usize = 3;
    pub const POPULATED_BLOCKS: usize = 4;
    /// Lines the report expects a full removal to drop.
    pub const QUIZ_LINES: usize = 18;

    /// Blocks dropped by `strip-quizzes` (trailing-comma empty rule).
    pub const STRIPPED_BLOCKS: usize = 7;
    pub const STRIPPED_QUIZ_LINES: usize = 18;

    pub const COMPLETED: usize = 2;
    pub const COMPLETION_DATE: usize = 2;
    pub const CURRENT: usize = 6;
    pub const DEPRECATED_TOTAL: usize = COMPLETED + COMPLETION_DATE + CURRENT;

    /// Lines left after stripping deprecated properties, then quizzes.
    pub const FULLY_CLEANED_LINES: usize = 67;
}

/// Generate a synthetic `units.js` with `units` units of `topics` topics each.
///
/// Every third topic has an empty `quizzes: [],`; the others carry a
/// three-quiz multi-line array. Used for benchmarks and larger scans.
pub fn generate_units_js(units: usize, topics: usize) -> String {
    let mut out = String::from("const ALL_UNITS_DATA = [\n");
    for u in 1..=units {
        out.push_str(&format!("  {{\n    unitId: \"unit{u}\",\n    topics: [\n"));
        for t in 1..=topics {
            out.push_str(&format!("      {{\n        id: \"{u}-{t}\",\n"));
            if t % 3 == 0 {
                out.push_str("        quizzes: [],\n");
            } else {
                out.push_str("        quizzes: [\n");
                for q in 1..=3 {
                    out.push_str(&format!(
                        "          {{ quizId: \"{u}-{t}_q{q}\", completed: false }},\n"
                    ));
                }
                out.push_str("        ],\n");
            }
            out.push_str("        completed: false,\n        completionDate: null\n      },\n");
        }
        out.push_str("    ]\n  },\n");
    }
    out.push_str("];\n");
    out
}
