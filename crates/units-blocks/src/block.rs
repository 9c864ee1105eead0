//! Block types.

use serde::Serialize;
use std::ops::RangeInclusive;

/// How a matched key line was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// `key: []` closed on the same line.
    Empty,
    /// Located by bracket balance; may span one or more lines.
    Populated,
}

/// One matched construct: an inclusive range of 1-based line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    /// The 1-based line holding the key.
    pub start_line: usize,
    /// The 1-based line where the bracket balance returned to zero.
    pub end_line: usize,
    /// False when input ended while brackets were still open.
    pub closed: bool,
}

impl Block {
    pub fn empty(line: usize) -> Self {
        Self {
            kind: BlockKind::Empty,
            start_line: line,
            end_line: line,
            closed: true,
        }
    }

    pub fn populated(start_line: usize, end_line: usize, closed: bool) -> Self {
        debug_assert!(start_line <= end_line);
        Self {
            kind: BlockKind::Populated,
            start_line,
            end_line,
            closed,
        }
    }

    /// Number of lines the block covers.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    pub fn is_populated(&self) -> bool {
        self.kind == BlockKind::Populated
    }

    pub fn lines(&self) -> RangeInclusive<usize> {
        self.start_line..=self.end_line
    }
}

/// Which same-line empty forms make a match an [`BlockKind::Empty`] block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyLiteral {
    /// `key: []` or `key:[]`, anything may follow.
    #[default]
    Bare,
    /// `key: [],` or `key:[],`, the comma is required.
    TrailingComma,
}

impl EmptyLiteral {
    /// The literal spellings this rule accepts for `key`.
    pub fn patterns(&self, key: &str) -> [String; 2] {
        match self {
            Self::Bare => [format!("{key} []"), format!("{key}[]")],
            Self::TrailingComma => [format!("{key} [],"), format!("{key}[],")],
        }
    }

    pub fn matches(&self, line: &str, key: &str) -> bool {
        self.patterns(key).iter().any(|p| line.contains(p.as_str()))
    }
}
