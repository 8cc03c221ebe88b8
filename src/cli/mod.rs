//! Security Test CLI - Command-line interface for the toolkit
//!
//! Maps `security-test <command>` onto the library's entry points. Suite
//! commands shell out to the target project's own test runner; everything
//! else runs in-process.

mod commands;
mod context;
mod output;

pub use context::CliContext;
pub use output::{OutputFormat, OutputWriter, ProgressIndicator};

use clap::{CommandFactory, Parser, Subcommand};

use crate::application::reporting::ReportKind;
use crate::domain::check::CheckKind;

/// Security Test Framework - canned security checks and project analysis
#[derive(Parser, Debug)]
#[command(
    name = "security-test",
    version,
    about = "Security test toolkit for JavaScript projects",
    long_about = "Security Test Framework CLI bundles canned security checks, project \
                  analysis with auto-configuration, and report generation.\n\n\
                  Run 'security-test auto' to analyze the current project and generate \
                  a recommended configuration."
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run security checks, coverage, and performance together
    Run(commands::run::RunArgs),

    /// Run all sixteen security checks
    Security(commands::security::SecurityArgs),

    /// Run coverage analysis against the configured threshold
    Coverage(commands::coverage::CoverageArgs),

    /// Run the XSS prevention check
    #[command(name = "security:xss")]
    SecurityXss,

    /// Run the SQL injection check
    #[command(name = "security:sql-injection")]
    SecuritySqlInjection,

    /// Run the CSRF protection check
    #[command(name = "security:csrf")]
    SecurityCsrf,

    /// Run performance load tests
    #[command(name = "performance:load")]
    PerformanceLoad,

    /// Generate a security report
    #[command(name = "report:security")]
    ReportSecurity(commands::report::ReportArgs),

    /// Generate a coverage report
    #[command(name = "report:coverage")]
    ReportCoverage(commands::report::ReportArgs),

    /// Generate a performance report
    #[command(name = "report:performance")]
    ReportPerformance(commands::report::ReportArgs),

    /// Generate a comprehensive report
    #[command(name = "report:comprehensive")]
    ReportComprehensive(commands::report::ReportArgs),

    /// Analyze the project and write a recommended configuration
    Auto(commands::auto::AutoArgs),

    /// Analyze project structure and print recommendations
    Analyze(commands::analyze::AnalyzeArgs),

    /// Run component tests
    Component,

    /// Run unit tests
    Unit,

    /// Run integration tests
    Integration,

    /// Run frontend component tests
    #[command(name = "frontend:component")]
    FrontendComponent,

    /// Run frontend integration tests
    #[command(name = "frontend:integration")]
    FrontendIntegration,

    /// Run frontend security tests
    #[command(name = "frontend:security")]
    FrontendSecurity,

    /// Run backend controller tests
    #[command(name = "backend:controller")]
    BackendController,

    /// Run backend service tests
    #[command(name = "backend:service")]
    BackendService,

    /// Run backend database tests
    #[command(name = "backend:database")]
    BackendDatabase,

    /// Run backend authentication tests
    #[command(name = "backend:auth")]
    BackendAuth,

    /// Run backend security tests
    #[command(name = "backend:security")]
    BackendSecurity,

    /// Run full-stack end-to-end tests
    #[command(name = "fullstack:e2e")]
    FullstackE2e,

    /// Run full-stack integration tests
    #[command(name = "fullstack:integration")]
    FullstackIntegration,

    /// Run full-stack security tests
    #[command(name = "fullstack:security")]
    FullstackSecurity,
}

impl Commands {
    /// Suite name for commands that delegate to the project's test runner
    fn suite_name(&self) -> Option<&'static str> {
        match self {
            Commands::Component => Some("component"),
            Commands::Unit => Some("unit"),
            Commands::Integration => Some("integration"),
            Commands::FrontendComponent => Some("frontend:component"),
            Commands::FrontendIntegration => Some("frontend:integration"),
            Commands::FrontendSecurity => Some("frontend:security"),
            Commands::BackendController => Some("backend:controller"),
            Commands::BackendService => Some("backend:service"),
            Commands::BackendDatabase => Some("backend:database"),
            Commands::BackendAuth => Some("backend:auth"),
            Commands::BackendSecurity => Some("backend:security"),
            Commands::FullstackE2e => Some("fullstack:e2e"),
            Commands::FullstackIntegration => Some("fullstack:integration"),
            Commands::FullstackSecurity => Some("fullstack:security"),
            _ => None,
        }
    }
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
    context: CliContext,
}

impl CliApp {
    /// Parse arguments and build the command context.
    ///
    /// Help and version requests exit 0 here; any other parse failure
    /// prints usage and exits 1.
    pub async fn new() -> anyhow::Result<Self> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = if err.use_stderr() {
                    exit_codes::FAILURE
                } else {
                    exit_codes::SUCCESS
                };
                let _ = err.print();
                std::process::exit(code);
            }
        };

        let context = CliContext::new(&cli).await?;
        Ok(Self { cli, context })
    }

    /// Run the CLI application
    pub async fn run(self) -> anyhow::Result<i32> {
        let command = match &self.cli.command {
            Some(command) => command,
            None => {
                // Bare invocation prints usage and succeeds
                Cli::command().print_help()?;
                return Ok(exit_codes::SUCCESS);
            }
        };

        if let Some(suite) = command.suite_name() {
            return commands::suite::run(&self.context, &self.cli, suite).await;
        }

        let exit_code = match command {
            Commands::Run(args) => commands::run::run(&self.context, &self.cli, args).await,
            Commands::Security(args) => {
                commands::security::run(&self.context, &self.cli, args).await
            }
            Commands::Coverage(args) => {
                commands::coverage::run(&self.context, &self.cli, args).await
            }
            Commands::SecurityXss => {
                commands::security::run_single(&self.context, &self.cli, CheckKind::Xss).await
            }
            Commands::SecuritySqlInjection => {
                commands::security::run_single(&self.context, &self.cli, CheckKind::SqlInjection)
                    .await
            }
            Commands::SecurityCsrf => {
                commands::security::run_single(&self.context, &self.cli, CheckKind::Csrf).await
            }
            Commands::PerformanceLoad => {
                commands::performance::run(&self.context, &self.cli).await
            }
            Commands::ReportSecurity(args) => {
                commands::report::run(&self.context, &self.cli, ReportKind::Security, args).await
            }
            Commands::ReportCoverage(args) => {
                commands::report::run(&self.context, &self.cli, ReportKind::Coverage, args).await
            }
            Commands::ReportPerformance(args) => {
                commands::report::run(&self.context, &self.cli, ReportKind::Performance, args)
                    .await
            }
            Commands::ReportComprehensive(args) => {
                commands::report::run(&self.context, &self.cli, ReportKind::Comprehensive, args)
                    .await
            }
            Commands::Auto(args) => commands::auto::run(&self.context, &self.cli, args).await,
            Commands::Analyze(args) => {
                commands::analyze::run(&self.context, &self.cli, args).await
            }
            // Suite commands were dispatched above
            _ => unreachable!("suite commands handled by suite_name"),
        }?;

        Ok(exit_code)
    }
}

/// Exit codes for CI integration
pub mod exit_codes {
    /// Success - checks passed, thresholds met
    pub const SUCCESS: i32 = 0;
    /// Any error, vulnerable check, or below-threshold result
    pub const FAILURE: i32 = 1;
}
