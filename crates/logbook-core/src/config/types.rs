//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog configuration
    pub changelog: ChangelogConfig,
}

/// Changelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Release metadata file (YAML, TOML or JSON)
    pub input: PathBuf,

    /// Changelog file path
    pub file: PathBuf,

    /// Text file appended verbatim after all versions
    pub suffix_file: Option<PathBuf>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("releases.yaml"),
            file: PathBuf::from("CHANGELOG.md"),
            suffix_file: None,
        }
    }
}
