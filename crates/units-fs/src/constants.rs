//! Well-known paths used by the units tools.

use std::path::Path;

/// Default locations, relative to the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitsPath {
    /// The generated course data file (`data/units.js`)
    DataFile,
    /// Optional tool configuration (`units-tool.toml`)
    ConfigFile,
}

impl UnitsPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataFile => "data/units.js",
            Self::ConfigFile => "units-tool.toml",
        }
    }
}

impl AsRef<Path> for UnitsPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for UnitsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
