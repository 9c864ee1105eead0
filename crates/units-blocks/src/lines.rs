//! Line splitting and bracket counting.

/// Split text into lines, each keeping its own terminator.
///
/// Joining the result gives back `text` byte for byte. A trailing fragment
/// without a newline is still a line; empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Count of `[` minus count of `]` on one line.
pub fn bracket_balance(line: &str) -> i64 {
    line.bytes().fold(0, |acc, b| match b {
        b'[' => acc + 1,
        b']' => acc - 1,
        _ => acc,
    })
}
