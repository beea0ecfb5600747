//! Logbook Changelog - Changelog rendering from release metadata
//!
//! This crate orders versions, groups their entries by type and renders the
//! result as a markdown document.

pub mod formatter;
pub mod generator;
pub mod group;
pub mod loader;
pub mod types;
pub mod version;

pub use formatter::{indent, ChangelogFormatter, MarkdownFormatter, INDENT_WIDTH};
pub use generator::{render, Changelog, ChangelogGenerator, VersionSection};
pub use group::group_by_header;
pub use loader::{load_release_set, load_suffix, parse_release_set, ReleaseFormat};
pub use types::{Entry, Header, ReleaseSet, TypeGroup, Version, DEFAULT_TYPE_LABEL};
pub use version::{sort_versions, validate_version_id, VersionKey};
