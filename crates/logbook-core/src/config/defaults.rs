//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "logbook.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "logbook.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".logbook.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".logbook.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Logbook Configuration

changelog:
  # Release metadata to render
  input: releases.yaml
  # Where `logbook render --write` puts the document
  file: CHANGELOG.md
  # Optional text appended after all versions
  # suffix_file: CHANGELOG.footer.md
"#;

/// Default configuration template (TOML)
pub const DEFAULT_CONFIG_TOML_TEMPLATE: &str = r#"# Logbook Configuration

[changelog]
input = "releases.yaml"
file = "CHANGELOG.md"
# suffix_file = "CHANGELOG.footer.md"
"#;
