//! Changelog generation

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::group::group_by_header;
use crate::types::{ReleaseSet, TypeGroup};
use crate::version::sort_versions;

/// A release set ordered newest first with each version's entries grouped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Changelog<'a> {
    pub versions: Vec<VersionSection<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<&'a str>,
}

/// One version of a [`Changelog`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionSection<'a> {
    pub version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub groups: Vec<TypeGroup<'a>>,
}

/// Changelog generator
pub struct ChangelogGenerator {
    formatter: Box<dyn ChangelogFormatter>,
}

impl ChangelogGenerator {
    /// Create a new generator with the markdown formatter
    pub fn new() -> Self {
        Self {
            formatter: Box::new(MarkdownFormatter::new()),
        }
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Order versions and group their entries
    #[instrument(skip(self, release_set), fields(version_count = release_set.versions.len()))]
    pub fn generate<'a>(&self, release_set: &'a ReleaseSet) -> Changelog<'a> {
        info!(
            version_count = release_set.versions.len(),
            "generating changelog"
        );

        let versions: Vec<VersionSection<'a>> = sort_versions(&release_set.versions)
            .into_iter()
            .map(|v| VersionSection {
                version: &v.version,
                date: v.date,
                groups: group_by_header(&v.entries),
            })
            .collect();

        debug!(
            group_count = versions.iter().map(|v| v.groups.len()).sum::<usize>(),
            has_suffix = release_set.suffix.is_some(),
            "changelog sections built"
        );

        Changelog {
            versions,
            suffix: release_set.suffix.as_deref(),
        }
    }

    /// Format a generated changelog to string
    pub fn format(&self, changelog: &Changelog<'_>) -> String {
        self.formatter.format(changelog)
    }

    /// Generate and format in one step
    #[instrument(skip(self, release_set), fields(version_count = release_set.versions.len()))]
    pub fn render(&self, release_set: &ReleaseSet) -> String {
        let changelog = self.generate(release_set);
        let output = self.format(&changelog);
        debug!(output_len = output.len(), "changelog rendered");
        output
    }
}

impl Default for ChangelogGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a release set as a markdown changelog
pub fn render(release_set: &ReleaseSet) -> String {
    ChangelogGenerator::new().render(release_set)
}
