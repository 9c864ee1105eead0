//! Command implementations for units-cli

pub mod analyze;
pub mod edit;
pub mod props;
pub mod quizzes;

pub use analyze::run_analyze;
pub use edit::EditOptions;
pub use props::run_strip_props;
pub use quizzes::run_strip_quizzes;
