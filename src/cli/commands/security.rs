//! Security Command - Run the canned security checks
//!
//! Runs all sixteen checks (or a single named one) against their fixture
//! sets and reports the verdicts. Exit code 1 when any check flags.

use anyhow::Result;
use clap::Args;

use crate::application::checks;
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::{OutputFormat, ProgressIndicator};
use crate::cli::Cli;
use crate::domain::check::{CheckKind, CheckOptions};

/// Arguments for the security command
#[derive(Args, Debug)]
pub struct SecurityArgs {
    /// Show per-vulnerability detail lines
    #[arg(long)]
    pub details: bool,
}

/// Run the security command
pub async fn run(ctx: &CliContext, cli: &Cli, args: &SecurityArgs) -> Result<i32> {
    if !cli.quiet {
        ctx.output.header("Security Checks");
    }

    let progress = if !cli.quiet && ctx.output.format() != OutputFormat::Json {
        Some(ProgressIndicator::spinner("Running security checks..."))
    } else {
        None
    };

    let summary = checks::run_all(&CheckOptions::default()).await;

    if let Some(p) = progress {
        p.finish_and_clear();
    }

    match ctx.output.format() {
        OutputFormat::Json => {
            ctx.output.json(&summary)?;
        }
        OutputFormat::Table | OutputFormat::Plain => {
            ctx.output.print(&format!(
                "Checks passed: {}/{}",
                summary.passed,
                summary.total()
            ));

            for entry in &summary.vulnerabilities {
                let message = entry
                    .error
                    .clone()
                    .or_else(|| entry.details.as_ref().map(|d| d.message.clone()))
                    .unwrap_or_else(|| "Vulnerability detected".to_string());
                ctx.output.print(&format!("  [VULN] {}: {}", entry.kind, message));

                if args.details {
                    if let Some(details) = &entry.details {
                        for sub in details.details.values() {
                            ctx.output.print(&format!("         - {}: {}", sub.name, sub.message));
                        }
                        for issue in &details.issues {
                            ctx.output.print(&format!("         - {issue}"));
                        }
                    }
                }
            }

            if summary.failed == 0 {
                ctx.output.success("No vulnerabilities detected");
            }
        }
    }

    if summary.failed > 0 {
        Ok(exit_codes::FAILURE)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Run a single named check (security:xss and friends)
pub async fn run_single(ctx: &CliContext, cli: &Cli, kind: CheckKind) -> Result<i32> {
    if !cli.quiet {
        ctx.output.header(kind.display_name());
    }

    let result = kind.run(&CheckOptions::default()).await?;

    match ctx.output.format() {
        OutputFormat::Json => {
            ctx.output.json(&result)?;
        }
        OutputFormat::Table | OutputFormat::Plain => {
            ctx.output.print(&result.message);
            if result.vulnerable {
                ctx.output.error(&format!("{} is vulnerable", kind.display_name()));
            } else {
                ctx.output.success(&format!("{} passed", kind.display_name()));
            }
        }
    }

    if result.vulnerable {
        Ok(exit_codes::FAILURE)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
