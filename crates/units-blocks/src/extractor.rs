//! Bracket-balanced block extraction.

use crate::block::{Block, EmptyLiteral};
use crate::lines::bracket_balance;

/// Finds every block introduced by a line containing `key`.
///
/// A key line accepted by `empty` becomes a one-line [`Block::empty`].
/// Any other key line starts a populated block: the `[`/`]` balance of the
/// start line is taken, then following lines are added one at a time while
/// the running balance stays positive. The block ends on the line where it
/// drops to zero or below, so a start line that opens nothing (or closes
/// everything it opens) is a populated block of one line.
///
/// Scanning resumes after each block, which keeps the returned ranges
/// non-overlapping and in increasing order. When the input ends with
/// brackets still open the block runs to the last line and is marked as
/// not [`closed`](Block::closed); no error is raised.
///
/// An empty `key` matches nothing.
///
/// # Example
/// ```
/// use units_blocks::{BlockKind, EmptyLiteral, find_blocks};
///
/// let lines = ["a,", "quizzes: [", "  1,", "],", "quizzes: [],"];
/// let blocks = find_blocks(&lines, "quizzes:", EmptyLiteral::Bare);
///
/// assert_eq!(blocks.len(), 2);
/// assert_eq!((blocks[0].start_line, blocks[0].end_line), (2, 4));
/// assert_eq!(blocks[1].kind, BlockKind::Empty);
/// ```
pub fn find_blocks<L: AsRef<str>>(lines: &[L], key: &str, empty: EmptyLiteral) -> Vec<Block> {
    let mut blocks = Vec::new();
    if key.is_empty() {
        return blocks;
    }

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].as_ref();
        if !line.contains(key) {
            i += 1;
            continue;
        }

        if empty.matches(line, key) {
            blocks.push(Block::empty(i + 1));
            i += 1;
            continue;
        }

        let mut balance = bracket_balance(line);
        let mut end = i;
        while balance > 0 && end + 1 < lines.len() {
            end += 1;
            balance += bracket_balance(lines[end].as_ref());
        }

        let closed = balance <= 0;
        if !closed {
            tracing::warn!(
                start = i + 1,
                end = end + 1,
                open = balance,
                "block still open at end of input"
            );
        }
        blocks.push(Block::populated(i + 1, end + 1, closed));
        i = end + 1;
    }

    tracing::debug!(key, blocks = blocks.len(), "extracted blocks");
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;
    use pretty_assertions::assert_eq;

    const KEY: &str = "quizzes:";

    #[test]
    fn no_matches() {
        let lines = ["const units = [", "];"];
        assert!(find_blocks(&lines, KEY, EmptyLiteral::Bare).is_empty());
    }

    #[test]
    fn empty_literal_is_one_line() {
        let blocks = find_blocks(&["quizzes: []"], KEY, EmptyLiteral::Bare);
        assert_eq!(blocks, vec![Block::empty(1)]);
    }

    #[test]
    fn open_then_close_spans_two_lines() {
        let blocks = find_blocks(&["quizzes: [", "],"], KEY, EmptyLiteral::Bare);
        assert_eq!(blocks, vec![Block::populated(1, 2, true)]);
    }

    #[test]
    fn same_line_open_and_close_is_single_line_populated() {
        let lines = ["a,", "quizzes: [1,2],", "b,"];
        let blocks = find_blocks(&lines, KEY, EmptyLiteral::Bare);

        assert_eq!(blocks, vec![Block::populated(2, 2, true)]);
        assert_eq!(blocks[0].kind, BlockKind::Populated);
    }

    #[test]
    fn multi_line_block() {
        let lines = ["quizzes: [", "  1,", "  2,", "],"];
        let blocks = find_blocks(&lines, KEY, EmptyLiteral::Bare);
        assert_eq!(blocks, vec![Block::populated(1, 4, true)]);
    }

    #[test]
    fn nested_brackets_are_balanced() {
        let lines = [
            "quizzes: [",
            "  { tags: [",
            "    \"a\",",
            "  ] },",
            "],",
            "after,",
        ];
        let blocks = find_blocks(&lines, KEY, EmptyLiteral::Bare);
        assert_eq!(blocks, vec![Block::populated(1, 5, true)]);
    }

    #[test]
    fn key_without_bracket_is_single_line() {
        let lines = ["quizzes:", "  [", "  ],"];
        let blocks = find_blocks(&lines, KEY, EmptyLiteral::Bare);
        assert_eq!(blocks, vec![Block::populated(1, 1, true)]);
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let lines = ["x,", "quizzes: [", "  1,", "  2,"];
        let blocks = find_blocks(&lines, KEY, EmptyLiteral::Bare);

        assert_eq!(blocks, vec![Block::populated(2, 4, false)]);
        assert!(!blocks[0].closed);
    }

    #[test]
    fn interior_key_lines_are_not_reinspected() {
        let lines = ["quizzes: [", "  { quizzes: [] },", "],", "quizzes: [],"];
        let blocks = find_blocks(&lines, KEY, EmptyLiteral::Bare);
        assert_eq!(blocks, vec![Block::populated(1, 3, true), Block::empty(4)]);
    }

    #[test]
    fn trailing_comma_rule_reclassifies_bare_empty() {
        let lines = ["quizzes: []", "quizzes: [],"];

        let bare = find_blocks(&lines, KEY, EmptyLiteral::Bare);
        assert_eq!(bare, vec![Block::empty(1), Block::empty(2)]);

        let strict = find_blocks(&lines, KEY, EmptyLiteral::TrailingComma);
        assert_eq!(strict, vec![Block::populated(1, 1, true), Block::empty(2)]);
    }

    #[test]
    fn empty_key_matches_nothing() {
        assert!(find_blocks(&["anything"], "", EmptyLiteral::Bare).is_empty());
    }
}
