//! Application services
//!
//! Security checks, project analysis, auto-configuration, report
//! generation, and the mock/assertion helpers exposed to downstream
//! test suites.

pub mod analyzer;
pub mod assertions;
pub mod autoconfig;
pub mod checks;
pub mod coverage;
pub mod mock;
pub mod performance;
pub mod reporting;
