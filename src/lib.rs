//! Sectester - Security test toolkit library
//!
//! This crate bundles canned security check functions, a project analyzer
//! with auto-configuration, mock-data generators, and report generation,
//! exposed both as a library and through the `security-test` binary.
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration with file and environment variable support
//! - [`domain`] — Check results, project analysis models, and the payload catalog
//! - [`application`] — Security checks, analyzer, auto-config, reporting, mocks
//! - [`cli`] — Command-line interface
//!
//! # Configuration
//!
//! Environment variables use the `SECTESTER__` prefix with double underscore
//! separators:
//!
//! ```bash
//! SECTESTER__COVERAGE__THRESHOLD=90
//! SECTESTER__REPORTING__OUTPUT_DIR=./reports
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;

pub use application::analyzer::ProjectAnalyzer;
pub use application::assertions;
pub use application::autoconfig::AutoConfigurator;
pub use application::checks;
pub use application::coverage::CoverageAnalyzer;
pub use application::mock::MockGenerator;
pub use application::performance::PerformanceTester;
pub use application::reporting::ReportGenerator;
pub use config::Config;
pub use logging::init_tracing;
