//! SHA-256 content checksums
//!
//! Used to tell whether a filtering pass actually changed anything before
//! a file is rewritten. Format is `sha256:<hex>`.

use sha2::{Digest, Sha256};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Compute the SHA-256 checksum of string content.
pub fn compute_content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Returns true if both contents hash to the same checksum.
pub fn content_unchanged(before: &str, after: &str) -> bool {
    compute_content_checksum(before) == compute_content_checksum(after)
}
