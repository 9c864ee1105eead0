//! Read-only analysis of a key's blocks.

use crate::block::{Block, BlockKind, EmptyLiteral};
use crate::extractor::find_blocks;
use crate::lines::split_lines;
use serde::Serialize;

/// Tunables for [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Characters of a populated block's first line kept in its preview.
    pub preview_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { preview_width: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyEntry {
    pub line: usize,
    /// The trimmed source line.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulatedEntry {
    pub start: usize,
    pub end: usize,
    pub lines: usize,
    pub preview: String,
    pub closed: bool,
}

/// How the key is spelled across the file.
///
/// Each line lands in at most one bucket, checked in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FormatPatterns {
    /// `key: [`
    pub with_space: usize,
    /// `key:[`
    pub no_space: usize,
    /// `key` with no `[` anywhere on the line
    pub multiline_start: usize,
}

impl FormatPatterns {
    pub fn count<L: AsRef<str>>(lines: &[L], key: &str) -> Self {
        let with_space = format!("{key} [");
        let no_space = format!("{key}[");

        let mut patterns = Self::default();
        for line in lines {
            let line = line.as_ref();
            if line.contains(&with_space) {
                patterns.with_space += 1;
            } else if line.contains(&no_space) {
                patterns.no_space += 1;
            } else if line.contains(key) && !line.contains('[') {
                patterns.multiline_start += 1;
            }
        }
        patterns
    }
}

/// Statistics about every block of one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizReport {
    pub key: String,
    pub total_lines: usize,
    pub empty: Vec<EmptyEntry>,
    pub populated: Vec<PopulatedEntry>,
    /// Lines a full removal of every reported block would drop.
    pub lines_to_remove: usize,
    pub patterns: FormatPatterns,
}

impl QuizReport {
    pub fn total_blocks(&self) -> usize {
        self.empty.len() + self.populated.len()
    }

    /// Line count left after removing every reported block.
    pub fn remaining_lines(&self) -> usize {
        self.total_lines.saturating_sub(self.lines_to_remove)
    }

    /// Populated blocks whose brackets never closed.
    pub fn unterminated(&self) -> impl Iterator<Item = &PopulatedEntry> {
        self.populated.iter().filter(|p| !p.closed)
    }
}

/// Builds a [`QuizReport`] for `key` without modifying anything.
///
/// Same-line empty arrays are recognized without requiring a trailing
/// comma.
pub fn analyze(text: &str, key: &str, options: ReportOptions) -> QuizReport {
    let lines = split_lines(text);
    let blocks = find_blocks(&lines, key, EmptyLiteral::Bare);

    let mut empty = Vec::new();
    let mut populated = Vec::new();
    for block in &blocks {
        let first = lines[block.start_line - 1].trim();
        match block.kind {
            BlockKind::Empty => empty.push(EmptyEntry {
                line: block.start_line,
                content: first.to_string(),
            }),
            BlockKind::Populated => populated.push(PopulatedEntry {
                start: block.start_line,
                end: block.end_line,
                lines: block.line_count(),
                preview: preview(first, options.preview_width),
                closed: block.closed,
            }),
        }
    }

    QuizReport {
        key: key.to_string(),
        total_lines: lines.len(),
        lines_to_remove: blocks.iter().map(Block::line_count).sum(),
        patterns: FormatPatterns::count(&lines, key),
        empty,
        populated,
    }
}

/// First `width` characters of `line`, with `...` appended if cut.
pub fn preview(line: &str, width: usize) -> String {
    match line.char_indices().nth(width) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line.to_string(),
    }
}
