//! Coverage Command - Coverage analysis against the configured threshold

use anyhow::Result;
use clap::Args;

use crate::application::coverage::{CoverageAnalyzer, CoverageOptions};
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::OutputFormat;
use crate::cli::Cli;

/// Arguments for the coverage command
#[derive(Args, Debug)]
pub struct CoverageArgs {
    /// Override the configured coverage threshold
    #[arg(long)]
    pub threshold: Option<u8>,
}

/// Run the coverage command
pub async fn run(ctx: &CliContext, cli: &Cli, args: &CoverageArgs) -> Result<i32> {
    let threshold = args.threshold.unwrap_or(ctx.config.coverage.threshold);

    if !cli.quiet {
        ctx.output.header("Coverage Analysis");
    }

    let snapshot = CoverageAnalyzer::new()
        .analyze(&CoverageOptions {
            threshold: Some(threshold),
            include_security_coverage: Some(ctx.config.coverage.include_security_coverage),
        })
        .await;

    let meets_threshold = snapshot.overall >= threshold;

    match ctx.output.format() {
        OutputFormat::Json => {
            ctx.output.json(&snapshot)?;
        }
        OutputFormat::Table | OutputFormat::Plain => {
            ctx.output.print(&format!(
                "Overall coverage: {}% (threshold {}%)",
                snapshot.overall, threshold
            ));
            ctx.output.print(&format!(
                "  statements: {}%  branches: {}%  functions: {}%  lines: {}%",
                snapshot.by_category.statements,
                snapshot.by_category.branches,
                snapshot.by_category.functions,
                snapshot.by_category.lines,
            ));

            for recommendation in &snapshot.recommendations {
                ctx.output.verbose(&format!("  - {recommendation}"));
            }

            if meets_threshold {
                ctx.output.success("Coverage threshold met");
            } else {
                ctx.output.warn("Coverage below threshold");
            }
        }
    }

    if meets_threshold {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::FAILURE)
    }
}
