//! Release metadata loading

use std::path::Path;

use logbook_core::ChangelogError;
use tracing::{debug, info};

use crate::types::ReleaseSet;

/// Serialization format of a release metadata file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseFormat {
    Yaml,
    Toml,
    Json,
}

impl ReleaseFormat {
    /// Pick a format from a file extension. Unknown extensions read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse release metadata and reject versions that cannot be ordered
pub fn parse_release_set(content: &str, format: ReleaseFormat) -> Result<ReleaseSet, ChangelogError> {
    let release_set: ReleaseSet = match format {
        ReleaseFormat::Yaml => serde_yaml::from_str(content)?,
        ReleaseFormat::Toml => toml::from_str(content)?,
        ReleaseFormat::Json => serde_json::from_str(content)?,
    };

    release_set.validate()?;
    Ok(release_set)
}

/// Load release metadata from a file
pub fn load_release_set(path: &Path) -> Result<ReleaseSet, ChangelogError> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }

    let format = ReleaseFormat::from_path(path);
    info!(path = %path.display(), ?format, "loading release metadata");

    let content = std::fs::read_to_string(path)?;
    let release_set = parse_release_set(&content, format)?;

    debug!(
        version_count = release_set.versions.len(),
        entry_count = release_set.versions.iter().map(|v| v.entries.len()).sum::<usize>(),
        "release metadata loaded"
    );
    Ok(release_set)
}

/// Read a suffix file verbatim
pub fn load_suffix(path: &Path) -> Result<String, ChangelogError> {
    if !path.exists() {
        return Err(ChangelogError::FileNotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "loading changelog suffix");
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const YAML: &str = r#"
versions:
  - version: 1.0.0
    date: 2024-01-15
    entries:
      - header:
          type: Fix
          subject: fix A
      - header:
          subject: misc B
        text: |
          detail
          more detail
  - version: 1.1.0
suffix: Thanks for reading
"#;

    #[test]
    fn test_parse_yaml() {
        let release_set = parse_release_set(YAML, ReleaseFormat::Yaml).unwrap();

        assert_eq!(release_set.versions.len(), 2);
        let first = &release_set.versions[0];
        assert_eq!(first.version, "1.0.0");
        assert_eq!(first.entries[0].header.label(), "Fix");
        assert_eq!(first.entries[1].header.label(), "Misc");
        assert_eq!(first.entries[1].text, "detail\nmore detail\n");
        assert!(release_set.versions[1].entries.is_empty());
        assert_eq!(release_set.suffix.as_deref(), Some("Thanks for reading"));
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
[[versions]]
version = "0.2.0"

[[versions.entries]]
text = "line1\nline2"

[versions.entries.header]
type = "Feature"
subject = "new thing"
"#;

        let release_set = parse_release_set(content, ReleaseFormat::Toml).unwrap();

        let entry = &release_set.versions[0].entries[0];
        assert_eq!(entry.header.subject, "new thing");
        assert_eq!(entry.text, "line1\nline2");
        assert!(release_set.suffix.is_none());
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{"versions":[{"version":"3.0.0","entries":[{"header":{"type":"","subject":"x"}}]}]}"#;

        let release_set = parse_release_set(content, ReleaseFormat::Json).unwrap();

        assert_eq!(release_set.versions[0].entries[0].header.label(), "Misc");
    }

    #[test]
    fn test_parse_json_nulls_read_as_missing() {
        let content = r#"{
            "versions": [
                {"version": "1.0.0", "entries": [{"header": {"type": null, "subject": "a"}, "text": null}]},
                {"version": "0.9.0", "date": null, "entries": null}
            ],
            "suffix": null
        }"#;

        let release_set = parse_release_set(content, ReleaseFormat::Json).unwrap();

        let entry = &release_set.versions[0].entries[0];
        assert_eq!(entry.text, "");
        assert_eq!(entry.header.label(), "Misc");
        assert!(release_set.versions[1].entries.is_empty());
        assert_eq!(
            crate::render(&release_set),
            "## 1.0.0\n\n### Misc\n\n- a\n\n## 0.9.0\n\n"
        );
    }

    #[test]
    fn test_parse_json_null_versions() {
        let release_set =
            parse_release_set(r#"{"versions": null, "suffix": "Thanks"}"#, ReleaseFormat::Json)
                .unwrap();

        assert!(release_set.versions.is_empty());
        assert_eq!(crate::render(&release_set), "Thanks");
    }

    #[test]
    fn test_parse_yaml_empty_text() {
        let content = "versions:\n  - version: 1.0.0\n    entries:\n      - header:\n          subject: a\n        text:\n";

        let release_set = parse_release_set(content, ReleaseFormat::Yaml).unwrap();

        assert_eq!(release_set.versions[0].entries[0].text, "");
    }

    #[test]
    fn test_parse_rejects_invalid_version() {
        let content = r#"{"versions":[{"version":"1..0"}]}"#;

        let err = parse_release_set(content, ReleaseFormat::Json).unwrap_err();

        assert!(matches!(err, ChangelogError::InvalidVersion { .. }));
    }

    #[test]
    fn test_parse_malformed_content() {
        let err = parse_release_set("versions: [", ReleaseFormat::Yaml).unwrap_err();
        assert!(matches!(err, ChangelogError::ParseFailed(_)));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(ReleaseFormat::from_path(Path::new("r.toml")), ReleaseFormat::Toml);
        assert_eq!(ReleaseFormat::from_path(Path::new("r.json")), ReleaseFormat::Json);
        assert_eq!(ReleaseFormat::from_path(Path::new("r.yml")), ReleaseFormat::Yaml);
        assert_eq!(ReleaseFormat::from_path(Path::new("releases")), ReleaseFormat::Yaml);
    }

    #[test]
    fn test_load_release_set_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("releases.yaml");
        std::fs::write(&path, YAML).unwrap();

        let release_set = load_release_set(&path).unwrap();

        assert_eq!(release_set.versions.len(), 2);
    }

    #[test]
    fn test_load_release_set_missing_file() {
        let err = load_release_set(&PathBuf::from("/nonexistent/releases.yaml")).unwrap_err();
        assert!(matches!(err, ChangelogError::FileNotFound(_)));
    }

    #[test]
    fn test_load_suffix_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("footer.md");
        std::fs::write(&path, "\n[1.0.0]: https://example.com\n").unwrap();

        assert_eq!(load_suffix(&path).unwrap(), "\n[1.0.0]: https://example.com\n");
    }
}
