//! Domain models for the security test toolkit
//!
//! Pure data types: the payload/signature catalog, check result shapes,
//! and the project analysis model. No I/O happens in this layer.

pub mod analysis;
pub mod catalog;
pub mod check;

pub use analysis::{AnalyzerError, ProjectAnalysis, ProjectType};
pub use check::{
    CheckError, CheckKind, CheckOptions, CheckResult, FormFixture, PayloadOutcome, RunSummary,
    SubCheck, VulnerabilityEntry,
};
