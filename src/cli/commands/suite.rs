//! Suite Commands - Delegate to the target project's test runner
//!
//! Suite commands map to test files under the target project's
//! `src/examples/` directory and run through its own vitest install; the
//! child's exit status is propagated.

use anyhow::Result;
use tokio::process::Command;

use crate::cli::context::CliContext;
use crate::cli::exit_codes;
use crate::cli::Cli;

/// Run a suite command by shelling out to vitest
pub async fn run(ctx: &CliContext, cli: &Cli, suite: &str) -> Result<i32> {
    let test_file = format!("src/examples/{suite}.test.js");

    if !cli.quiet {
        ctx.output
            .info(&format!("Running suite via vitest: {test_file}"));
    }

    let status = Command::new("npx")
        .args(["vitest", "run", &test_file])
        .current_dir(&ctx.working_dir)
        .status()
        .await;

    match status {
        Ok(status) => Ok(status.code().unwrap_or(exit_codes::FAILURE)),
        Err(error) => {
            ctx.output
                .error(&format!("Failed to launch test runner: {error}"));
            Ok(exit_codes::FAILURE)
        }
    }
}
