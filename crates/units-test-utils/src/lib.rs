//! Shared test utilities for the units-tool workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`fixtures`]: sample `units.js` content with known statistics
//! - [`workspace`]: [`TestWorkspace`] temp directory laid out like a project

pub mod fixtures;
pub mod workspace;

pub use workspace::TestWorkspace;
