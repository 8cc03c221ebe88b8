//! Analyze Command - Project structure analysis
//!
//! Reads the project manifest and directory tree, then prints the
//! detected type, frameworks, and recommendations. A missing manifest is
//! fatal and exits non-zero.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::application::analyzer::ProjectAnalyzer;
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::OutputFormat;
use crate::cli::Cli;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Run the analyze command
pub async fn run(ctx: &CliContext, cli: &Cli, args: &AnalyzeArgs) -> Result<i32> {
    let path = ctx.resolve(&args.path);

    if !path.exists() {
        ctx.output.error(&format!("Path does not exist: {:?}", path));
        return Ok(exit_codes::FAILURE);
    }

    if !cli.quiet {
        ctx.output.header("Project Analysis");
        ctx.output.info(&format!("Analyzing: {:?}", path));
    }

    let analysis = ProjectAnalyzer::new(path).analyze().await?;

    match ctx.output.format() {
        OutputFormat::Json => {
            ctx.output.json(&analysis)?;
        }
        OutputFormat::Table | OutputFormat::Plain => {
            ctx.output.print(&format!("Project Type: {}", analysis.project_type));
            ctx.output
                .print(&format!("Frameworks: {}", analysis.frameworks.join(", ")));
            ctx.output
                .print(&format!("Has React: {}", yes_no(analysis.has_react)));
            ctx.output
                .print(&format!("Has NestJS: {}", yes_no(analysis.has_nestjs)));
            ctx.output
                .print(&format!("Has Express: {}", yes_no(analysis.has_express)));
            ctx.output
                .print(&format!("Has TypeScript: {}", yes_no(analysis.has_typescript)));
            ctx.output
                .print(&format!("Has Vitest: {}", yes_no(analysis.has_vitest)));
            ctx.output.print(&format!(
                "Has Testing Library: {}",
                yes_no(analysis.has_testing_library)
            ));

            if !analysis.security_features.is_empty() {
                ctx.output.print(&format!(
                    "Security Features: {}",
                    analysis.security_features.join(", ")
                ));
            }

            ctx.output.print("\nRecommendations:");
            for (index, recommendation) in analysis.recommendations.iter().enumerate() {
                ctx.output.print(&format!("  {}. {}", index + 1, recommendation));
            }

            ctx.output.success("\nAnalysis completed successfully");
        }
    }

    Ok(exit_codes::SUCCESS)
}
