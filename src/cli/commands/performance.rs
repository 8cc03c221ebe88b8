//! Performance Command - Load test summary

use anyhow::Result;

use crate::application::performance::{LoadTestOptions, PerformanceTester};
use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::output::OutputFormat;
use crate::cli::Cli;

/// Run the performance:load command
pub async fn run(ctx: &CliContext, cli: &Cli) -> Result<i32> {
    if !cli.quiet {
        ctx.output.header("Performance Load Tests");
    }

    let snapshot = PerformanceTester::new()
        .run_load_tests(&LoadTestOptions::default())
        .await;

    match ctx.output.format() {
        OutputFormat::Json => {
            ctx.output.json(&snapshot)?;
        }
        OutputFormat::Table | OutputFormat::Plain => {
            ctx.output.print(&format!(
                "Response time: avg {}ms, p95 {}ms, max {}ms",
                snapshot.response_time.avg, snapshot.response_time.p95, snapshot.response_time.max
            ));
            ctx.output
                .print(&format!("Throughput: {} req/s", snapshot.throughput));
            ctx.output.print(&format!(
                "Memory usage: avg {} {}, max {} {}",
                snapshot.memory_usage.avg,
                snapshot.memory_usage.unit,
                snapshot.memory_usage.max,
                snapshot.memory_usage.unit
            ));

            for recommendation in &snapshot.recommendations {
                ctx.output.verbose(&format!("  - {recommendation}"));
            }
        }
    }

    Ok(exit_codes::SUCCESS)
}
