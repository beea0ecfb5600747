//! Validate command

use std::path::Path;

use clap::Args;
use console::style;
use tracing::info;

use logbook_changelog::load_release_set;
use logbook_core::config::{find_config, load_config, Config};

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes::{CommandFailed, VALIDATION_ERROR};

/// Validate configuration and release metadata
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Only validate configuration file
    #[arg(long)]
    pub config_only: bool,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Problems found while validating
#[derive(Debug, Default)]
struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Report {
    /// Fail with the validation exit code when there are errors
    fn into_result(self) -> anyhow::Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }

        Err(CommandFailed::new(
            VALIDATION_ERROR,
            format!("Validation failed with {} error(s)", self.errors.len()),
        )
        .into())
    }
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            config_only = self.config_only,
            strict = self.strict,
            "executing validate command"
        );
        let cwd = std::env::current_dir()?;

        let config_path = find_config(&cwd);
        let mut report = self.check(&cwd, config_path.as_deref());

        if self.strict {
            report.errors.append(&mut report.warnings);
        }

        let passed = report.errors.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "valid": passed,
                    "config_path": config_path.map(|p| p.to_string_lossy().to_string()),
                    "errors": report.errors,
                    "warnings": report.warnings
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    print_report(&report, config_path.as_deref());
                }
            }
        }

        report.into_result()
    }

    fn check(&self, cwd: &Path, config_path: Option<&Path>) -> Report {
        let mut report = Report::default();

        let config = match config_path {
            Some(path) => match load_config(path) {
                Ok(config) => config,
                Err(e) => {
                    report.errors.push(format!("Configuration: {}", e));
                    return report;
                }
            },
            None => {
                report
                    .warnings
                    .push("No configuration file found, using defaults".to_string());
                Config::default()
            }
        };

        if self.config_only {
            return report;
        }

        let input = cwd.join(&config.changelog.input);
        match load_release_set(&input) {
            Ok(release_set) => {
                if release_set.is_empty() {
                    report
                        .warnings
                        .push(format!("Nothing to render in {}", input.display()));
                }
                for version in release_set.versions.iter().filter(|v| v.entries.is_empty()) {
                    report
                        .warnings
                        .push(format!("Version {} has no entries", version.version));
                }
            }
            Err(e) => report.errors.push(format!("Release metadata: {}", e)),
        }

        if let Some(suffix) = &config.changelog.suffix_file {
            let path = cwd.join(suffix);
            if !path.exists() {
                report
                    .errors
                    .push(format!("Suffix file not found at {}", path.display()));
            }
        }

        report
    }
}

fn print_report(report: &Report, config_path: Option<&Path>) {
    println!("{}", style("Validation Results").bold());
    println!();

    if let Some(path) = config_path {
        println!("Config: {}", style(path.display()).cyan());
        println!();
    }

    if !report.errors.is_empty() {
        println!("{}", style("Errors:").red().bold());
        for error in &report.errors {
            println!("  {} {}", style("✗").red(), error);
        }
        println!();
    }

    if !report.warnings.is_empty() {
        println!("{}", style("Warnings:").yellow().bold());
        for warning in &report.warnings {
            println!("  {} {}", style("!").yellow(), warning);
        }
        println!();
    }

    if report.errors.is_empty() {
        if report.warnings.is_empty() {
            println!("{}", style("✓ All checks passed").green().bold());
        } else {
            println!(
                "{} with {} warning(s)",
                style("✓ Validation passed").green().bold(),
                report.warnings.len()
            );
        }
    } else {
        println!(
            "{} with {} error(s)",
            style("✗ Validation failed").red().bold(),
            report.errors.len()
        );
    }
}
