//! Whole-block removal.

use crate::block::{Block, EmptyLiteral};
use crate::extractor::find_blocks;
use crate::lines::split_lines;

/// Result of [`strip_blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStrip {
    pub output: String,
    /// Blocks that were dropped, in file order.
    pub blocks: Vec<Block>,
    pub original_lines: usize,
    pub new_lines: usize,
}

impl BlockStrip {
    pub fn lines_removed(&self) -> usize {
        self.blocks.iter().map(Block::line_count).sum()
    }
}

/// Drops every block introduced by `key`.
///
/// Only `key: [],` and `key:[],` count as same-line empty arrays here; a
/// bare `key: []` goes through bracket balancing instead, which still
/// removes just that line. All other lines are kept in order.
///
/// # Example
/// ```
/// use units_blocks::strip_blocks;
///
/// let strip = strip_blocks("a,\nquizzes: [\n  1,\n],\nb,\n", "quizzes:");
/// assert_eq!(strip.output, "a,\nb,\n");
/// assert_eq!(strip.lines_removed(), 3);
/// ```
pub fn strip_blocks(text: &str, key: &str) -> BlockStrip {
    let lines = split_lines(text);
    let blocks = find_blocks(&lines, key, EmptyLiteral::TrailingComma);
    let output = retain_outside(&lines, &blocks);

    let removed: usize = blocks.iter().map(Block::line_count).sum();
    BlockStrip {
        output,
        original_lines: lines.len(),
        new_lines: lines.len() - removed,
        blocks,
    }
}

/// Joins the lines not covered by `blocks`, which must be sorted and disjoint.
fn retain_outside(lines: &[&str], blocks: &[Block]) -> String {
    let mut output = String::new();
    let mut next = blocks.iter().peekable();

    for (idx, line) in lines.iter().enumerate() {
        let line_no = idx + 1;
        while next.next_if(|b| b.end_line < line_no).is_some() {}
        match next.peek() {
            Some(block) if block.lines().contains(&line_no) => {}
            _ => output.push_str(line),
        }
    }
    output
}
