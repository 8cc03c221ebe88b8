//! Report generation
//!
//! Builds report records from run summaries (or the coverage/performance
//! stubs) and renders them as JSON, HTML, or plain text. Saved reports get
//! a millisecond-timestamped filename, so a run never overwrites an
//! earlier report.

pub mod formats;
pub mod models;

pub use models::{
    ComprehensiveReport, Report, ReportFormat, ReportKind, ReportMetadata, ReportSummary,
};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::domain::check::RunSummary;

/// Errors from report rendering and persistence
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Security recommendations attached to every security report
const SECURITY_RECOMMENDATIONS: [&str; 10] = [
    "Implement input validation for all user inputs",
    "Use parameterized queries to prevent SQL injection",
    "Enable CSRF protection on all forms",
    "Implement proper authentication and authorization",
    "Use HTTPS for all communications",
    "Regularly update dependencies",
    "Implement proper error handling",
    "Use security headers",
    "Implement rate limiting",
    "Use secure session management",
];

/// Builds and renders reports
#[derive(Debug, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Project a security run summary into a report record
    pub fn security_report(&self, summary: &RunSummary) -> Report {
        let details = summary
            .vulnerabilities
            .iter()
            .map(|v| {
                let message = v
                    .error
                    .clone()
                    .or_else(|| v.details.as_ref().map(|d| d.message.clone()))
                    .unwrap_or_else(|| "Vulnerability detected".to_string());
                format!("{}: {}", v.kind, message)
            })
            .collect();

        Report {
            id: uuid::Uuid::new_v4(),
            kind: ReportKind::Security,
            timestamp: Utc::now(),
            summary: ReportSummary {
                total_tests: Some(summary.total()),
                passed: Some(summary.passed),
                failed: Some(summary.failed),
                vulnerabilities: Some(summary.vulnerabilities.len()),
                ..ReportSummary::default()
            },
            by_category: None,
            details,
            recommendations: SECURITY_RECOMMENDATIONS
                .iter()
                .map(|r| r.to_string())
                .collect(),
            metadata: ReportMetadata::default(),
        }
    }

    /// Canned coverage report against the given threshold
    pub fn coverage_report(&self, threshold: u8) -> Report {
        let overall: u8 = 85;
        let by_category: BTreeMap<String, u8> = [
            ("statements".to_string(), 90u8),
            ("branches".to_string(), 85),
            ("functions".to_string(), 88),
            ("lines".to_string(), 87),
        ]
        .into_iter()
        .collect();

        Report {
            id: uuid::Uuid::new_v4(),
            kind: ReportKind::Coverage,
            timestamp: Utc::now(),
            summary: ReportSummary {
                overall: Some(overall),
                threshold: Some(threshold),
                meets_threshold: Some(overall >= threshold),
                ..ReportSummary::default()
            },
            by_category: Some(by_category),
            details: Vec::new(),
            recommendations: Vec::new(),
            metadata: ReportMetadata::default(),
        }
    }

    /// Canned performance report
    pub fn performance_report(&self) -> Report {
        Report {
            id: uuid::Uuid::new_v4(),
            kind: ReportKind::Performance,
            timestamp: Utc::now(),
            summary: ReportSummary {
                avg_response_time: Some(150),
                max_response_time: Some(500),
                throughput: Some(1000),
                memory_usage: Some(50),
                ..ReportSummary::default()
            },
            by_category: None,
            details: Vec::new(),
            recommendations: Vec::new(),
            metadata: ReportMetadata::default(),
        }
    }

    /// Combine the three section reports into one record
    pub fn comprehensive_report(&self, summary: &RunSummary, threshold: u8) -> ComprehensiveReport {
        ComprehensiveReport {
            id: uuid::Uuid::new_v4(),
            kind: ReportKind::Comprehensive,
            timestamp: Utc::now(),
            security: Some(self.security_report(summary)),
            coverage: Some(self.coverage_report(threshold)),
            performance: Some(self.performance_report()),
            metadata: ReportMetadata::default(),
        }
    }

    /// Render a single-section report in the requested format
    pub fn render(&self, report: &Report, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Json => formats::json::render(report),
            ReportFormat::Html => Ok(formats::html::render(report)),
            ReportFormat::Text => Ok(formats::text::render(report)),
        }
    }

    /// Render a comprehensive report. JSON carries the full nested record;
    /// the HTML and text templates show the header and timestamp only,
    /// since the section data lives in the nested reports.
    pub fn render_comprehensive(
        &self,
        report: &ComprehensiveReport,
        format: ReportFormat,
    ) -> Result<String, ReportError> {
        match format {
            ReportFormat::Json => formats::json::render(report),
            ReportFormat::Html | ReportFormat::Text => {
                let shell = Report {
                    id: report.id,
                    kind: report.kind,
                    timestamp: report.timestamp,
                    summary: ReportSummary::default(),
                    by_category: None,
                    details: Vec::new(),
                    recommendations: Vec::new(),
                    metadata: report.metadata.clone(),
                };
                self.render(&shell, format)
            }
        }
    }

    /// Write rendered content under the output directory, creating it if
    /// absent. The filename carries a millisecond timestamp, so reports
    /// are never overwritten.
    pub fn save(
        &self,
        content: &str,
        kind: ReportKind,
        format: ReportFormat,
        output_dir: &Path,
    ) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(output_dir).map_err(|source| {
            tracing::error!(path = %output_dir.display(), %source, "failed to create report directory");
            ReportError::Io {
                path: output_dir.to_path_buf(),
                source,
            }
        })?;

        let timestamp = Utc::now()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");
        let filename = format!("{}-report-{}.{}", kind, timestamp, format.extension());
        let path = output_dir.join(filename);

        std::fs::write(&path, content).map_err(|source| {
            tracing::error!(path = %path.display(), %source, "failed to write report");
            ReportError::Io {
                path: path.clone(),
                source,
            }
        })?;

        tracing::info!(path = %path.display(), "report saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::check::{CheckKind, CheckResult, VulnerabilityEntry};

    fn summary() -> RunSummary {
        let mut summary = RunSummary::new();
        summary.passed = 14;
        summary.failed = 2;
        summary.vulnerabilities = vec![
            VulnerabilityEntry::from_result(CheckKind::Xss, CheckResult {
                vulnerable: true,
                message: "XSS vulnerability detected".to_string(),
                ..CheckResult::default()
            }),
            VulnerabilityEntry {
                kind: CheckKind::Csrf.display_name().to_string(),
                details: None,
                error: Some("check fixture unavailable: form".to_string()),
            },
        ];
        summary
    }

    #[test]
    fn test_security_report_projects_summary() {
        let report = ReportGenerator::new().security_report(&summary());
        assert_eq!(report.summary.total_tests, Some(16));
        assert_eq!(report.summary.vulnerabilities, Some(2));
        assert_eq!(report.details.len(), 2);
        assert!(report.details[0].starts_with("XSS Prevention:"));
        // Errors show the error message in place of the result message
        assert!(report.details[1].contains("fixture unavailable"));
        assert_eq!(report.recommendations.len(), 10);
    }

    #[test]
    fn test_coverage_report_threshold_comparison() {
        let generator = ReportGenerator::new();
        assert_eq!(
            generator.coverage_report(80).summary.meets_threshold,
            Some(true)
        );
        assert_eq!(
            generator.coverage_report(90).summary.meets_threshold,
            Some(false)
        );
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let generator = ReportGenerator::new();
        let report = generator.security_report(&summary());
        let json = generator.render(&report, ReportFormat::Json).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_save_creates_directory_and_unique_names() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join("reports");
        let generator = ReportGenerator::new();

        let first = generator
            .save("{}", ReportKind::Security, ReportFormat::Json, &dir)
            .unwrap();
        assert!(first.exists());
        assert!(first
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("security-report-"));

        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = generator
            .save("{}", ReportKind::Security, ReportFormat::Json, &dir)
            .unwrap();
        assert_ne!(first, second);
    }
}
