//! Effective settings for a run
//!
//! Built from, in order of precedence: command-line flags, the optional
//! `units-tool.toml` in the working directory, and built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use units_blocks::{QUIZZES_KEY, ReportOptions};
use units_fs::{ConfigStore, UnitsPath};

use crate::error::{CliError, Result};

/// Contents of `units-tool.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub file: Option<PathBuf>,
    pub key: Option<String>,
    pub preview_width: Option<usize>,
    pub empty_samples: Option<usize>,
    pub populated_samples: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Absolute (or cwd-relative) path of the target file.
    pub file: PathBuf,
    pub key: String,
    pub preview_width: usize,
    pub empty_samples: usize,
    pub populated_samples: usize,
}

impl Settings {
    /// Resolve settings for a run started in `cwd`.
    pub fn resolve(cwd: &Path, file_flag: Option<&Path>) -> Result<Self> {
        let config: FileConfig = ConfigStore::new()
            .load_optional(&cwd.join(UnitsPath::ConfigFile))?
            .unwrap_or_default();

        let key = config.key.unwrap_or_else(|| QUIZZES_KEY.to_string());
        if key.trim().is_empty() {
            return Err(CliError::user(format!(
                "`key` in {} must not be empty",
                UnitsPath::ConfigFile
            )));
        }

        let file = file_flag
            .map(Path::to_path_buf)
            .or(config.file)
            .unwrap_or_else(|| PathBuf::from(UnitsPath::DataFile.as_str()));

        Ok(Self {
            file: cwd.join(file),
            key,
            preview_width: config.preview_width.unwrap_or(ReportOptions::default().preview_width),
            empty_samples: config.empty_samples.unwrap_or(5),
            populated_samples: config.populated_samples.unwrap_or(10),
        })
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            preview_width: self.preview_width,
        }
    }

    /// The key without its colon, for messages: `quizzes:` -> `quizzes`.
    pub fn block_name(&self) -> &str {
        self.key.trim().trim_end_matches(':')
    }
}
