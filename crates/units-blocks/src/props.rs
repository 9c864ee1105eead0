//! Deprecated single-line property removal.
//!
//! Unlike block removal this is plain whole-line matching: a line is dropped
//! only when its trimmed content equals one of the deprecated literals.

use crate::lines::split_lines;
use serde::Serialize;

/// Properties that older generators emitted and nothing reads any more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeprecatedProperty {
    Completed,
    CompletionDate,
    Current,
}

impl DeprecatedProperty {
    pub const ALL: [Self; 3] = [Self::Completed, Self::CompletionDate, Self::Current];

    /// The exact trimmed line this property appears as.
    pub fn literal(&self) -> &'static str {
        match self {
            Self::Completed => "completed: false,",
            Self::CompletionDate => "completionDate: null",
            Self::Current => "current: false",
        }
    }

    /// Match a whole line, ignoring surrounding whitespace.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        Self::ALL.into_iter().find(|p| p.literal() == trimmed)
    }
}

impl std::fmt::Display for DeprecatedProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.literal())
    }
}

/// One dropped line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemovedProperty {
    /// 1-based line number in the original text.
    pub line: usize,
    pub property: DeprecatedProperty,
}

/// Result of [`strip_properties`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyStrip {
    /// The kept lines, joined with their original terminators.
    pub output: String,
    pub removed: Vec<RemovedProperty>,
    pub original_lines: usize,
    pub new_lines: usize,
}

impl PropertyStrip {
    /// How many lines of `property` were dropped.
    pub fn count(&self, property: DeprecatedProperty) -> usize {
        self.removed.iter().filter(|r| r.property == property).count()
    }

    pub fn total_removed(&self) -> usize {
        self.removed.len()
    }
}

/// Drops every line that is exactly a deprecated property literal.
///
/// Kept lines stay in order and byte-identical.
///
/// # Example
/// ```
/// use units_blocks::{DeprecatedProperty, strip_properties};
///
/// let strip = strip_properties("completed: false,\nkeep,\ncurrent: false\n");
/// assert_eq!(strip.output, "keep,\n");
/// assert_eq!(strip.count(DeprecatedProperty::Current), 1);
/// ```
pub fn strip_properties(text: &str) -> PropertyStrip {
    let lines = split_lines(text);
    let mut output = String::with_capacity(text.len());
    let mut removed = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        match DeprecatedProperty::from_line(line) {
            Some(property) => {
                tracing::debug!(line = idx + 1, %property, "dropping deprecated property");
                removed.push(RemovedProperty {
                    line: idx + 1,
                    property,
                });
            }
            None => output.push_str(line),
        }
    }

    PropertyStrip {
        new_lines: lines.len() - removed.len(),
        original_lines: lines.len(),
        output,
        removed,
    }
}
