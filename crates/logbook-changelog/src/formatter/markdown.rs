//! Markdown changelog formatter

use tracing::{debug, instrument};

use super::{indent, ChangelogFormatter, INDENT_WIDTH};
use crate::generator::{Changelog, VersionSection};
use crate::types::{Entry, TypeGroup};

/// Markdown changelog formatter
///
/// ```text
/// ## 1.0.0 - 2024-05-01
///
/// ### Fix
///
/// - fix A
///   detail
///
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    fn push_version(&self, output: &mut String, section: &VersionSection<'_>) {
        match section.date {
            Some(date) => output.push_str(&format!(
                "## {} - {}\n\n",
                section.version,
                date.format("%Y-%m-%d")
            )),
            None => output.push_str(&format!("## {}\n\n", section.version)),
        }

        for group in &section.groups {
            self.push_group(output, group);
        }
    }

    fn push_group(&self, output: &mut String, group: &TypeGroup<'_>) {
        output.push_str(&format!("### {}\n\n", group.label));

        for entry in &group.entries {
            self.push_entry(output, entry);
        }

        output.push('\n');
    }

    fn push_entry(&self, output: &mut String, entry: &Entry) {
        output.push_str(&format!("- {}\n", entry.header.subject));

        if !entry.text.is_empty() {
            output.push_str(&indent(&entry.text, INDENT_WIDTH));
            output.push('\n');
        }
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, changelog), fields(version_count = changelog.versions.len()))]
    fn format(&self, changelog: &Changelog<'_>) -> String {
        let mut output = String::new();

        for section in &changelog.versions {
            self.push_version(&mut output, section);
        }

        if let Some(suffix) = changelog.suffix.filter(|s| !s.is_empty()) {
            output.push_str(suffix);
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
