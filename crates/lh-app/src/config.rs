//! Settings file support.
//!
//! ```yaml
//! input: network.txt
//! output: MinimumChange.csv
//! delimiter: ","
//! unreachable: "-"
//! parallel_closure: false
//! ```
//!
//! Relative paths are resolved against the settings file's directory.

use std::path::{Path, PathBuf};

use lh_results::UnreachableMarker;
use lh_transfer::ClosureStrategy;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default)]
    pub unreachable: UnreachableMarker,
    #[serde(default)]
    pub parallel_closure: bool,
}

fn default_delimiter() -> char {
    ','
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            delimiter: default_delimiter(),
            unreachable: UnreachableMarker::default(),
            parallel_closure: false,
        }
    }
}

impl Settings {
    pub fn closure_strategy(&self) -> ClosureStrategy {
        if self.parallel_closure {
            ClosureStrategy::Parallel
        } else {
            ClosureStrategy::Sequential
        }
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.input, &mut self.output].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Load settings from a YAML file.
pub fn load_settings(path: &Path) -> AppResult<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::SettingsRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut settings: Settings = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Settings(format!("Failed to parse settings YAML: {}", e)))?;

    if let Some(base) = path.parent() {
        settings.resolve_relative_to(base);
    }
    Ok(settings)
}
