//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, Result};

use super::defaults::config_file_names;
use super::types::Config;
use super::validation::validate_config;

/// Load configuration from a file
pub fn load_config(path: &Path) -> Result<Config> {
    let format = if path.extension().is_some_and(|e| e == "toml") {
        "TOML"
    } else {
        "YAML"
    };
    info!(path = %path.display(), format, "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

    let config: Config = if format == "TOML" {
        toml::from_str(&content).map_err(ConfigError::TomlError)?
    } else {
        serde_yaml::from_str(&content).map_err(ConfigError::YamlError)?
    };

    validate_config(&config)?;
    debug!(path = %path.display(), "config loaded and validated");
    Ok(config)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks `<dir>/<name>` and then
/// `<dir>/.github/<name>`. The first match wins.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.exists() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.exists() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load configuration from directory (searching parent directories)
pub fn load_config_from_dir(dir: &Path) -> Result<(Config, PathBuf)> {
    let config_path = find_config(dir).ok_or_else(|| ConfigError::NotFound(dir.to_path_buf()))?;

    let config = load_config(&config_path)?;
    Ok((config, config_path))
}

/// Load configuration or use defaults
pub fn load_config_or_default(dir: &Path) -> (Config, Option<PathBuf>) {
    match load_config_from_dir(dir) {
        Ok((config, path)) => (config, Some(path)),
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "no usable config found, using defaults");
            (Config::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_yaml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("logbook.yaml");
        std::fs::write(&config_path, "changelog:\n  file: CHANGES.md\n").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_prefers_yaml_over_toml() {
        let temp = TempDir::new().unwrap();
        let yaml_path = temp.path().join("logbook.yaml");
        let toml_path = temp.path().join("logbook.toml");
        std::fs::write(&yaml_path, "changelog:\n  file: CHANGES.md\n").unwrap();
        std::fs::write(&toml_path, "[changelog]\nfile = \"OTHER.md\"\n").unwrap();

        let found = find_config(temp.path()).unwrap();
        assert_eq!(found, yaml_path);
    }

    #[test]
    fn test_find_config_in_github_dir() {
        let temp = TempDir::new().unwrap();
        let github_dir = temp.path().join(".github");
        std::fs::create_dir_all(&github_dir).unwrap();
        let config_path = github_dir.join("logbook.toml");
        std::fs::write(&config_path, "[changelog]\nfile = \"CHANGES.md\"\n").unwrap();

        let found = find_config(temp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("logbook.yaml");
        std::fs::write(&config_path, "changelog:\n  file: CHANGES.md\n").unwrap();
        let nested = temp.path().join("docs").join("release");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_load_config_toml() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("logbook.toml");
        std::fs::write(
            &config_path,
            "[changelog]\ninput = \"meta/releases.json\"\nsuffix_file = \"footer.md\"\n",
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.changelog.input, PathBuf::from("meta/releases.json"));
        assert_eq!(config.changelog.suffix_file, Some(PathBuf::from("footer.md")));
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("logbook.yaml");
        std::fs::write(&config_path, "changelog:\n  file: \"\"\n").unwrap();

        assert!(load_config(&config_path).is_err());
    }

    #[test]
    fn test_load_config_or_default_falls_back_on_invalid_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("logbook.yaml"), "changelog:\n  input: \"\"\n").unwrap();

        let (config, path) = load_config_or_default(temp.path());

        assert!(path.is_none());
        assert_eq!(config.changelog.input, PathBuf::from("releases.yaml"));
    }

    #[test]
    fn test_load_config_or_default_with_file() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("logbook.yaml");
        std::fs::write(&config_path, "changelog:\n  file: HISTORY.md\n").unwrap();

        let (config, path) = load_config_or_default(temp.path());

        assert_eq!(path, Some(config_path));
        assert_eq!(config.changelog.file, PathBuf::from("HISTORY.md"));
    }
}
