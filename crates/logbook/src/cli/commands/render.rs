//! Render command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info};

use logbook_changelog::{load_release_set, load_suffix, ChangelogGenerator, ReleaseSet};
use logbook_core::config::{load_config_or_default, ChangelogConfig};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Render the changelog
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Release metadata file (defaults to the configured input)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File appended after all versions, replacing any suffix in the metadata
    #[arg(long)]
    pub suffix_file: Option<PathBuf>,

    /// Write to file (default: print to stdout)
    #[arg(short, long)]
    pub write: bool,

    /// Output file (defaults to the configured changelog file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Execute the render command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(input = ?self.input, write = self.write, "executing render command");
        let cwd = std::env::current_dir()?;
        let (config, _) = load_config_or_default(&cwd);

        let release_set = self.load(&cwd, &config.changelog)?;
        let document = document(&release_set, cli.format)?;

        if self.write {
            let output_path = self.output_path(&cwd, &config.changelog, cli.format);
            std::fs::write(&output_path, &document)?;
            debug!(path = %output_path.display(), bytes = document.len(), "changelog written");

            if !cli.quiet {
                output::success(&format!(
                    "Changelog written to {}",
                    output::path_style().apply_to(output_path.display())
                ));
            }
            return Ok(());
        }

        match cli.format {
            OutputFormat::Json => println!("{}", document),
            OutputFormat::Text => print!("{}", document),
        }

        Ok(())
    }

    /// Where `--write` puts the document. JSON defaults next to the
    /// configured changelog file with a `.json` extension.
    fn output_path(&self, cwd: &Path, config: &ChangelogConfig, format: OutputFormat) -> PathBuf {
        if let Some(path) = &self.output {
            return path.clone();
        }

        let file = cwd.join(&config.file);
        match format {
            OutputFormat::Text => file,
            OutputFormat::Json => file.with_extension("json"),
        }
    }

    /// Load the release set and apply the suffix override
    fn load(&self, cwd: &Path, config: &ChangelogConfig) -> anyhow::Result<ReleaseSet> {
        let input = self
            .input
            .clone()
            .unwrap_or_else(|| cwd.join(&config.input));
        let mut release_set = load_release_set(&input)?;

        let suffix_file = self
            .suffix_file
            .clone()
            .or_else(|| config.suffix_file.as_ref().map(|p| cwd.join(p)));
        if let Some(path) = suffix_file {
            release_set.suffix = Some(load_suffix(&path)?);
        }

        Ok(release_set)
    }
}

/// Render the release set in the requested output format
fn document(release_set: &ReleaseSet, format: OutputFormat) -> anyhow::Result<String> {
    let generator = ChangelogGenerator::new();
    match format {
        OutputFormat::Text => Ok(generator.render(release_set)),
        OutputFormat::Json => {
            let changelog = generator.generate(release_set);
            Ok(serde_json::to_string_pretty(&changelog)?)
        }
    }
}
