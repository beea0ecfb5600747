//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.input.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.input".to_string(),
            message: "input cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    if let Some(suffix) = &config.changelog.suffix_file {
        if suffix.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "changelog.suffix_file".to_string(),
                message: "suffix_file cannot be empty when set".to_string(),
            }
            .into());
        }
    }

    Ok(())
}
