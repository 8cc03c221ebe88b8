//! Report data models
//!
//! Plain projections of run summaries and stub analyzer output; field
//! names follow the camelCase convention of the JSON the report files
//! carry. Serialization is lossless for round-tripping.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Security,
    Coverage,
    Performance,
    Comprehensive,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Security => "security",
            ReportKind::Coverage => "coverage",
            ReportKind::Performance => "performance",
            ReportKind::Comprehensive => "comprehensive",
        }
    }

    /// Capitalized form for report titles
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Security => "Security",
            ReportKind::Coverage => "Coverage",
            ReportKind::Performance => "Performance",
            ReportKind::Comprehensive => "Comprehensive",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output encoding for a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
    Text,
}

impl ReportFormat {
    /// File extension of the saved report
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Text => "text",
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            "text" | "txt" => Ok(ReportFormat::Text),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Summary block; each report kind fills only its own fields and the
/// renderers guard on presence rather than erroring on absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tests: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vulnerabilities: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meets_threshold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_response_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_response_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub framework: String,
    pub version: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            framework: "sectester".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// A single-section report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: uuid::Uuid,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub timestamp: DateTime<Utc>,
    pub summary: ReportSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_category: Option<BTreeMap<String, u8>>,
    pub details: Vec<String>,
    pub recommendations: Vec<String>,
    pub metadata: ReportMetadata,
}

/// Nests the three section reports; sections the caller excluded are
/// omitted from the serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveReport {
    pub id: uuid::Uuid,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security: Option<Report>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<Report>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<Report>,
    pub metadata: ReportMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("HTML".parse::<ReportFormat>().unwrap(), ReportFormat::Html);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("txt".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_empty_summary_serializes_to_empty_object() {
        let json = serde_json::to_string(&ReportSummary::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
