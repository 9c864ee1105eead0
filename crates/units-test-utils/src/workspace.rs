//! [`TestWorkspace`]: a temporary project directory for tool tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Relative path of the data file inside a workspace.
pub const UNITS_FILE: &str = "data/units.js";

/// A temporary directory holding `data/units.js` and, optionally,
/// `units-tool.toml`.
///
/// # Example
///
/// ```rust,no_run
/// use units_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::with_units("quizzes: [],\n");
/// ws.assert_units_contains("quizzes");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestWorkspace::new: failed to create temp dir"),
        }
    }

    /// Create a workspace whose `data/units.js` holds `content`.
    pub fn with_units(content: &str) -> Self {
        let ws = Self::new();
        ws.write_units(content);
        ws
    }

    /// Create a workspace holding the sample fixture.
    pub fn with_sample() -> Self {
        Self::with_units(crate::fixtures::SAMPLE_UNITS_JS)
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `data/units.js`.
    pub fn units_path(&self) -> PathBuf {
        self.root().join(UNITS_FILE)
    }

    /// Write `data/units.js`, creating `data/` if needed.
    pub fn write_units(&self, content: &str) {
        let path = self.units_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    /// Write `units-tool.toml` at the workspace root.
    pub fn write_config(&self, toml: &str) {
        fs::write(self.root().join("units-tool.toml"), toml).unwrap();
    }

    /// Read back `data/units.js`.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_units(&self) -> String {
        let path = self.units_path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Could not read {}: {e}", path.display()))
    }

    /// Assert that `data/units.js` contains `content`.
    pub fn assert_units_contains(&self, content: &str) {
        let file_content = self.read_units();
        assert!(
            file_content.contains(content),
            "units.js does not contain expected content.\nExpected: {}\nActual: {}",
            content,
            file_content
        );
    }

    /// Assert that `data/units.js` does **not** contain `content`.
    pub fn assert_units_not_contains(&self, content: &str) {
        let file_content = self.read_units();
        assert!(
            !file_content.contains(content),
            "units.js unexpectedly contains {:?}",
            content
        );
    }
}
