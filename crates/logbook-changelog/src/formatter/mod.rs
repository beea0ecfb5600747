//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::generator::Changelog;

/// Spaces prepended to each line of an entry body
pub const INDENT_WIDTH: usize = 2;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Format an ordered, grouped changelog to string
    fn format(&self, changelog: &Changelog<'_>) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// Shift every line of `text` right by `width` spaces.
///
/// Blank lines become `width` spaces so nested blocks survive markdown
/// rendering. Lines are joined with `\n` without a trailing newline.
pub fn indent(text: &str, width: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}
