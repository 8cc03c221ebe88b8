//! Plain text report format implementation

use crate::application::reporting::models::Report;

/// Render a report as indented plain text sections
pub fn render(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\nSecurity Test Framework - {} Report\n",
        report.kind.title()
    ));
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!("Generated: {}\n\n", report.timestamp.to_rfc3339()));

    out.push_str("Summary:\n");
    out.push_str(&format!(
        "  Total Tests: {}\n",
        report.summary.total_tests.unwrap_or(0)
    ));
    out.push_str(&format!("  Passed: {}\n", report.summary.passed.unwrap_or(0)));
    out.push_str(&format!("  Failed: {}\n", report.summary.failed.unwrap_or(0)));
    out.push_str(&format!(
        "  Vulnerabilities: {}\n\n",
        report.summary.vulnerabilities.unwrap_or(0)
    ));

    if let Some(by_category) = &report.by_category {
        out.push_str("Coverage by Category:\n");
        for (category, percentage) in by_category {
            out.push_str(&format!("  {category}: {percentage}%\n"));
        }
        out.push('\n');
    }

    if !report.details.is_empty() {
        out.push_str("Details:\n");
        for detail in &report.details {
            out.push_str(&format!("  - {detail}\n"));
        }
        out.push('\n');
    }

    if !report.recommendations.is_empty() {
        out.push_str("Recommendations:\n");
        for recommendation in &report.recommendations {
            out.push_str(&format!("  - {recommendation}\n"));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::reporting::models::{ReportKind, ReportMetadata, ReportSummary};
    use chrono::Utc;

    #[test]
    fn test_sections_follow_data_presence() {
        let report = Report {
            id: uuid::Uuid::new_v4(),
            kind: ReportKind::Coverage,
            timestamp: Utc::now(),
            summary: ReportSummary {
                overall: Some(85),
                threshold: Some(80),
                meets_threshold: Some(true),
                ..ReportSummary::default()
            },
            by_category: Some(
                [("statements".to_string(), 90u8)]
                    .into_iter()
                    .collect(),
            ),
            details: Vec::new(),
            recommendations: Vec::new(),
            metadata: ReportMetadata::default(),
        };

        let text = render(&report);
        assert!(text.contains("Coverage Report"));
        assert!(text.contains("statements: 90%"));
        assert!(!text.contains("Details:"));
        assert!(!text.contains("Recommendations:"));
    }
}
