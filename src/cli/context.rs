//! CLI Context - Shared services for CLI commands

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::output::OutputWriter;
use crate::cli::Cli;
use crate::config::Config;
use crate::logging::init_tracing;

/// Context passed to every command: configuration, output writer, and the
/// working directory paths resolve against.
pub struct CliContext {
    pub config: Arc<Config>,
    pub output: OutputWriter,
    pub working_dir: PathBuf,
}

impl CliContext {
    /// Create a new CLI context from parsed CLI arguments.
    ///
    /// Invalid configuration is fatal; the process exits non-zero with the
    /// validation message.
    pub async fn new(cli: &Cli) -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;

        // Tracing may already be installed when embedded in tests
        let _ = init_tracing(&config.logging);

        let output = OutputWriter::new(cli.format, cli.quiet, cli.verbose);

        let working_dir =
            std::env::current_dir().context("Failed to determine current working directory")?;

        Ok(Self {
            config: Arc::new(config),
            output,
            working_dir,
        })
    }

    /// Resolve a possibly-relative path against the working directory
    pub fn resolve(&self, path: &PathBuf) -> PathBuf {
        if path.is_absolute() {
            path.clone()
        } else {
            self.working_dir.join(path)
        }
    }
}
