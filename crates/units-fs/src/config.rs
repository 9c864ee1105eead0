//! Configuration loading

use crate::{Error, Result, io};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Loads tool configuration files.
///
/// Only TOML is accepted; the format is picked from the file extension.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if extension != "toml" {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            format: "TOML".into(),
            message: e.to_string(),
        })
    }

    /// Load configuration if the file exists.
    ///
    /// A missing file yields `Ok(None)`; any other failure, including a
    /// parse error, is returned as an error.
    pub fn load_optional<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        match self.load(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
