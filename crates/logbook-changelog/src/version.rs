//! Version ordering

use std::cmp::Ordering;

use logbook_core::ChangelogError;
use tracing::{debug, instrument};

use crate::types::Version;

/// One dot-separated piece of a version identifier
#[derive(Debug, Clone, PartialEq, Eq)]
enum Component {
    /// Digits only, stored without leading zeros
    Numeric(String),
    Alpha(String),
}

impl Component {
    fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            let trimmed = raw.trim_start_matches('0');
            let digits = if trimmed.is_empty() { "0" } else { trimmed };
            Self::Numeric(digits.to_string())
        } else {
            Self::Alpha(raw.to_string())
        }
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Without leading zeros a longer digit string is a larger number
            (Self::Numeric(a), Self::Numeric(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Self::Numeric(_), Self::Alpha(_)) => Ordering::Less,
            (Self::Alpha(_), Self::Numeric(_)) => Ordering::Greater,
            (Self::Alpha(a), Self::Alpha(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key for a version identifier.
///
/// `v1.2.0-rc.1+build.5` splits into the release `1.2.0` and the pre-release
/// tag `rc.1`; build metadata and the leading `v` do not take part in
/// ordering. Release components compare pairwise, numeric ones by value and
/// others lexically, and a release without a pre-release tag ranks above the
/// same release with one. For well-formed semantic versions this is semver
/// precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionKey {
    release: Vec<Component>,
    pre: Option<Vec<Component>>,
}

impl VersionKey {
    /// Build the sort key for an identifier. Never fails; see
    /// [`validate_version_id`] for rejecting identifiers up front.
    pub fn parse(id: &str) -> Self {
        let (release, pre) = split_id(id);
        Self {
            release: release.split('.').map(Component::parse).collect(),
            pre: pre.map(|p| p.split('.').map(Component::parse).collect()),
        }
    }
}

impl Ord for VersionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.release
            .cmp(&other.release)
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for VersionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split an identifier into its release part and optional pre-release tag
fn split_id(id: &str) -> (&str, Option<&str>) {
    let id = id.trim();
    let id = match id.strip_prefix(['v', 'V']) {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => id,
    };
    let id = id.split_once('+').map_or(id, |(head, _)| head);
    match id.split_once('-') {
        Some((release, pre)) => (release, Some(pre)),
        None => (id, None),
    }
}

/// Reject identifiers that cannot take part in ordering.
///
/// Called where release metadata is constructed, never while rendering.
pub fn validate_version_id(id: &str) -> Result<(), ChangelogError> {
    if id.trim().is_empty() {
        return Err(ChangelogError::invalid_version(id, "version is empty"));
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ChangelogError::invalid_version(id, "contains whitespace"));
    }

    let (release, pre) = split_id(id);
    if release.split('.').any(str::is_empty) {
        return Err(ChangelogError::invalid_version(
            id,
            "release has an empty component",
        ));
    }

    if let Some(pre) = pre {
        if pre.split('.').any(str::is_empty) {
            return Err(ChangelogError::invalid_version(
                id,
                "pre-release has an empty component",
            ));
        }
    }

    Ok(())
}

/// Order versions from newest to oldest.
///
/// Sorts ascending and reverses, so versions with equal keys come out in the
/// reverse of their input order.
#[instrument(skip(versions), fields(version_count = versions.len()))]
pub fn sort_versions(versions: &[Version]) -> Vec<&Version> {
    let mut keyed: Vec<(VersionKey, &Version)> = versions
        .iter()
        .map(|v| (VersionKey::parse(&v.version), v))
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.reverse();

    debug!(
        newest = keyed.first().map(|(_, v)| v.version.as_str()),
        "versions ordered"
    );
    keyed.into_iter().map(|(_, v)| v).collect()
}
