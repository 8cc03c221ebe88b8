//! Report Command - Render and save reports
//!
//! `report:<kind> [format] [output]` with positional defaults `html` and
//! `./reports`. Security and comprehensive reports run the checks first to
//! have data to project.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::application::checks;
use crate::application::reporting::{ReportFormat, ReportGenerator, ReportKind};
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::Cli;
use crate::domain::check::CheckOptions;

/// Arguments shared by the report commands
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report format (html, json, text)
    #[arg(id = "report_format", default_value = "html")]
    pub format: String,

    /// Output directory for the report file
    #[arg(default_value = "./reports")]
    pub output: PathBuf,
}

/// Run a report command for the given kind
pub async fn run(ctx: &CliContext, cli: &Cli, kind: ReportKind, args: &ReportArgs) -> Result<i32> {
    let format: ReportFormat = args.format.parse().map_err(anyhow::Error::msg)?;
    let output_dir = ctx.resolve(&args.output);
    let generator = ReportGenerator::new();
    let threshold = ctx.config.coverage.threshold;

    if !cli.quiet {
        ctx.output.header(&format!("{} Report", kind.title()));
    }

    let content = match kind {
        ReportKind::Security => {
            let summary = checks::run_all(&CheckOptions::default()).await;
            generator.render(&generator.security_report(&summary), format)?
        }
        ReportKind::Coverage => generator.render(&generator.coverage_report(threshold), format)?,
        ReportKind::Performance => generator.render(&generator.performance_report(), format)?,
        ReportKind::Comprehensive => {
            let summary = checks::run_all(&CheckOptions::default()).await;
            let report = generator.comprehensive_report(&summary, threshold);
            generator.render_comprehensive(&report, format)?
        }
    };

    let path = generator.save(&content, kind, format, &output_dir)?;
    ctx.output
        .success(&format!("Report saved: {}", path.display()));

    Ok(exit_codes::SUCCESS)
}
