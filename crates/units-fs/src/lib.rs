//! Filesystem layer for units-tool
//!
//! Whole-file reads, atomic locked writes, content checksums and
//! optional TOML configuration loading.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;

pub use checksum::compute_content_checksum;
pub use config::ConfigStore;
pub use constants::UnitsPath;
pub use error::{Error, Result};
