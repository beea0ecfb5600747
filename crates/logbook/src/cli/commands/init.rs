//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::{Confirm, Select};
use tracing::info;

use logbook_core::config::defaults::{
    DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML_TEMPLATE, DEFAULT_CONFIG_YAML,
};

use crate::cli::output;
use crate::cli::Cli;

/// Initialize a new Logbook configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, yes = self.yes, "executing init command");
        let cwd = std::env::current_dir()?;
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_CONFIG_YAML));

        if config_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Configuration file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Configuration file already exists at {}. Overwrite?",
                    config_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                output::warning("Aborted.");
                return Ok(());
            }
        }

        let format = if self.yes || self.output.is_some() {
            format_for(&config_path)
        } else {
            let formats = ["yaml", "toml"];
            let selection = Select::new()
                .with_prompt("Configuration format")
                .items(&formats)
                .default(0)
                .interact()?;
            formats[selection]
        };

        let config_path = if format == "toml" && config_path.extension().is_some_and(|e| e == "yaml") {
            config_path.with_extension("toml")
        } else {
            config_path
        };

        std::fs::write(&config_path, template_for(format))?;

        if !cli.quiet {
            output::success(&format!(
                "Created configuration at {}",
                output::path_style().apply_to(config_path.display())
            ));
            println!();
            println!("Next steps:");
            println!("  1. Describe your releases in the configured input file");
            println!("  2. Run {} to verify your setup", style("logbook validate").cyan());
            println!("  3. Run {} to write the changelog", style("logbook render --write").cyan());
        }

        Ok(())
    }
}

/// Config format implied by a path's extension
fn format_for(path: &Path) -> &'static str {
    if path.extension().is_some_and(|e| e == "toml") {
        "toml"
    } else {
        "yaml"
    }
}

fn template_for(format: &str) -> &'static str {
    match format {
        "toml" => DEFAULT_CONFIG_TOML_TEMPLATE,
        _ => DEFAULT_CONFIG_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbook_core::config::load_config;
    use tempfile::TempDir;

    #[test]
    fn test_format_for_path() {
        assert_eq!(format_for(Path::new("logbook.toml")), "toml");
        assert_eq!(format_for(Path::new("logbook.yaml")), "yaml");
        assert_eq!(format_for(Path::new(".logbook")), "yaml");
    }

    #[test]
    fn test_templates_load_as_valid_config() {
        let temp = TempDir::new().unwrap();
        for name in ["logbook.yaml", "logbook.toml"] {
            let path = temp.path().join(name);
            std::fs::write(&path, template_for(format_for(&path))).unwrap();
            assert!(load_config(&path).is_ok(), "{} template invalid", name);
        }
    }
}
