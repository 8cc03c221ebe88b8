//! Run Command - Security, coverage, and performance in one pass

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::application::checks;
use crate::application::coverage::{CoverageAnalyzer, CoverageOptions, CoverageSnapshot};
use crate::application::performance::{LoadTestOptions, LoadTestSnapshot, PerformanceTester};
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::{OutputFormat, ProgressIndicator};
use crate::cli::Cli;
use crate::domain::check::{CheckOptions, RunSummary};

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Skip the security checks
    #[arg(long)]
    pub skip_security: bool,

    /// Skip coverage analysis
    #[arg(long)]
    pub skip_coverage: bool,

    /// Skip performance load tests
    #[arg(long)]
    pub skip_performance: bool,
}

/// Combined result of a full run
#[derive(Debug, Serialize)]
pub struct FullRunResult {
    pub security: Option<RunSummary>,
    pub coverage: Option<CoverageSnapshot>,
    pub performance: Option<LoadTestSnapshot>,
}

/// Run the run command
pub async fn run(ctx: &CliContext, cli: &Cli, args: &RunArgs) -> Result<i32> {
    if !cli.quiet {
        ctx.output.header("Full Test Run");
    }

    let progress = if !cli.quiet && ctx.output.format() != OutputFormat::Json {
        Some(ProgressIndicator::spinner("Running security checks..."))
    } else {
        None
    };

    let mut result = FullRunResult {
        security: None,
        coverage: None,
        performance: None,
    };

    if !args.skip_security {
        result.security = Some(checks::run_all(&CheckOptions::default()).await);
    }

    if !args.skip_coverage {
        if let Some(p) = &progress {
            p.set_message("Analyzing coverage...");
        }
        result.coverage = Some(
            CoverageAnalyzer::new()
                .analyze(&CoverageOptions {
                    threshold: Some(ctx.config.coverage.threshold),
                    include_security_coverage: Some(ctx.config.coverage.include_security_coverage),
                })
                .await,
        );
    }

    if !args.skip_performance && ctx.config.performance.enabled {
        if let Some(p) = &progress {
            p.set_message("Running load tests...");
        }
        result.performance = Some(
            PerformanceTester::new()
                .run_load_tests(&LoadTestOptions::default())
                .await,
        );
    }

    if let Some(p) = progress {
        p.finish_and_clear();
    }

    let security_failed = result
        .security
        .as_ref()
        .is_some_and(|summary| summary.failed > 0);
    let below_threshold = result
        .coverage
        .as_ref()
        .is_some_and(|snapshot| snapshot.overall < ctx.config.coverage.threshold);

    match ctx.output.format() {
        OutputFormat::Json => {
            ctx.output.json(&result)?;
        }
        OutputFormat::Table | OutputFormat::Plain => {
            if let Some(summary) = &result.security {
                ctx.output.print(&format!(
                    "Security: {}/{} checks passed, {} vulnerabilities",
                    summary.passed,
                    summary.total(),
                    summary.vulnerabilities.len()
                ));
            }
            if let Some(snapshot) = &result.coverage {
                ctx.output.print(&format!(
                    "Coverage: {}% overall (threshold {}%)",
                    snapshot.overall, ctx.config.coverage.threshold
                ));
            }
            if let Some(snapshot) = &result.performance {
                ctx.output.print(&format!(
                    "Performance: avg {}ms, {} req/s",
                    snapshot.response_time.avg, snapshot.throughput
                ));
            }

            if security_failed {
                ctx.output.warn("Security checks flagged vulnerabilities");
            }
            if below_threshold {
                ctx.output.warn("Coverage below threshold");
            }
        }
    }

    if security_failed || below_threshold {
        Ok(exit_codes::FAILURE)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
