//! Block extraction and line filtering for generated `units.js` files.
//!
//! Everything here works on lines of text and never parses JavaScript.
//! A *block* is the inclusive line range of one `key:` construct:
//!
//! ```text
//! quizzes: [],             <- Empty, one line
//! quizzes: [               <- Populated, start
//!   { quizId: "1-2_q1" },
//! ],                       <- Populated, end (bracket balance back to zero)
//! ```
//!
//! - [`extractor`] finds blocks by bracket balance
//! - [`remover`] drops every block of a key
//! - [`props`] drops deprecated single-line properties
//! - [`report`] summarizes blocks without changing anything
//! - [`document`] reads and atomically rewrites the target file

pub mod block;
pub mod document;
pub mod error;
pub mod extractor;
pub mod lines;
pub mod props;
pub mod remover;
pub mod report;

pub use block::{Block, BlockKind, EmptyLiteral};
pub use document::{UnitsDocument, WriteOutcome};
pub use error::{Error, Result};
pub use extractor::find_blocks;
pub use props::{DeprecatedProperty, PropertyStrip, RemovedProperty, strip_properties};
pub use remover::{BlockStrip, strip_blocks};
pub use report::{EmptyEntry, FormatPatterns, PopulatedEntry, QuizReport, ReportOptions, analyze};

/// Key whose blocks the tools look for.
pub const QUIZZES_KEY: &str = "quizzes:";
