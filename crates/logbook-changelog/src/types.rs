//! Changelog types

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use logbook_core::ChangelogError;

use crate::version::validate_version_id;

/// Group label for entries without a type
pub const DEFAULT_TYPE_LABEL: &str = "Misc";

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Everything a single render call consumes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReleaseSet {
    /// Versions in any order
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<Version>,
    /// Text appended verbatim after all versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl ReleaseSet {
    /// Create an empty release set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a version
    pub fn with_version(mut self, version: Version) -> Self {
        self.versions.push(version);
        self
    }

    /// Set the trailing suffix
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Check that every version identifier can be ordered
    pub fn validate(&self) -> Result<(), ChangelogError> {
        self.versions
            .iter()
            .try_for_each(|v| validate_version_id(&v.version))
    }

    /// Check if there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty() && self.suffix.as_deref().map_or(true, str::is_empty)
    }
}

/// A release and its recorded changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Version {
    /// Version identifier (e.g. "1.2.0")
    pub version: String,
    /// Release date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Entries in recorded order
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<Entry>,
}

impl Version {
    /// Create a version with no entries
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: None,
            entries: Vec::new(),
        }
    }

    /// Set the release date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Add an entry
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }
}

/// One recorded change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub header: Header,
    /// Free-form detail, possibly spanning several lines
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl Entry {
    /// Create an entry with a type label
    pub fn new(entry_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            header: Header {
                entry_type: Some(entry_type.into()),
                subject: subject.into(),
            },
            text: String::new(),
        }
    }

    /// Create an entry without a type label
    pub fn untyped(subject: impl Into<String>) -> Self {
        Self {
            header: Header {
                entry_type: None,
                subject: subject.into(),
            },
            text: String::new(),
        }
    }

    /// Set the body text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Entry header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Category label (e.g. "Feature", "Fix")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    /// One-line summary
    pub subject: String,
}

impl Header {
    /// Label of the group this header belongs to
    pub fn label(&self) -> &str {
        match self.entry_type.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => DEFAULT_TYPE_LABEL,
        }
    }
}

/// Entries of one version sharing a label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeGroup<'a> {
    pub label: &'a str,
    pub entries: Vec<&'a Entry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_label() {
        assert_eq!(Entry::new("Fix", "a").header.label(), "Fix");
        assert_eq!(Entry::new("", "b").header.label(), DEFAULT_TYPE_LABEL);
        assert_eq!(Entry::untyped("c").header.label(), "Misc");
    }

    #[test]
    fn test_release_set_is_empty() {
        assert!(ReleaseSet::new().is_empty());
        assert!(ReleaseSet::new().with_suffix("").is_empty());
        assert!(!ReleaseSet::new().with_suffix("Thanks").is_empty());
        assert!(!ReleaseSet::new().with_version(Version::new("1.0.0")).is_empty());
    }

    #[test]
    fn test_release_set_validate() {
        let ok = ReleaseSet::new()
            .with_version(Version::new("1.0.0"))
            .with_version(Version::new("v2.0.0-rc.1"));
        assert!(ok.validate().is_ok());

        let bad = ReleaseSet::new().with_version(Version::new("1..0"));
        assert!(matches!(
            bad.validate(),
            Err(ChangelogError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_entry_deserialize_missing_fields() {
        let entry: Entry = serde_json::from_str(r#"{"header":{"subject":"misc B"}}"#).unwrap();
        assert_eq!(entry.header.entry_type, None);
        assert_eq!(entry.text, "");
        assert_eq!(entry.header.label(), "Misc");
    }

    #[test]
    fn test_version_date_deserialize() {
        let version: Version =
            serde_json::from_str(r#"{"version":"1.0.0","date":"2024-05-01"}"#).unwrap();
        assert_eq!(version.date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(version.entries.is_empty());
    }
}
