//! Auto Command - Analyze and write the recommended configuration
//!
//! Runs the analyzer, derives the recommended configuration, and writes
//! `security-test.config.js` at the project root. The existing file is
//! replaced without prompting; regeneration is idempotent.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::application::analyzer::ProjectAnalyzer;
use crate::application::autoconfig::AutoConfigurator;
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::OutputFormat;
use crate::cli::Cli;

/// Arguments for the auto command
#[derive(Args, Debug)]
pub struct AutoArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

/// Run the auto command
pub async fn run(ctx: &CliContext, cli: &Cli, args: &AutoArgs) -> Result<i32> {
    let path = ctx.resolve(&args.path);

    if !path.exists() {
        ctx.output.error(&format!("Path does not exist: {:?}", path));
        return Ok(exit_codes::FAILURE);
    }

    if !cli.quiet {
        ctx.output.header("Auto-Configuration");
        ctx.output.info(&format!("Analyzing: {:?}", path));
    }

    let analysis = ProjectAnalyzer::new(&path).analyze().await?;
    let configurator = AutoConfigurator::new(analysis);
    let config = configurator.build();
    let saved = configurator.save(&config, &path)?;

    match ctx.output.format() {
        OutputFormat::Json => {
            ctx.output.json(&config)?;
        }
        OutputFormat::Table | OutputFormat::Plain => {
            ctx.output.success("Auto-configuration completed");
            ctx.output
                .print(&format!("Configuration saved to: {}", saved.display()));
            ctx.output.print(&format!(
                "Project type detected: {}",
                configurator.analysis().project_type
            ));
            ctx.output.print(&format!(
                "Security tests configured: {}",
                config.security.enabled.len()
            ));
            ctx.output.print(&format!(
                "Coverage threshold set to: {}%",
                config.coverage.threshold
            ));

            ctx.output.print("\nNext steps:");
            ctx.output
                .print("  1. Review the generated security-test.config.js file");
            ctx.output.print("  2. Run: security-test run");
            ctx.output
                .print("  3. Generate reports: security-test report:security");
        }
    }

    Ok(exit_codes::SUCCESS)
}
