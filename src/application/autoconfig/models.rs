//! Recommended configuration model
//!
//! Serialized verbatim into the generated config artifact, so field names
//! follow the camelCase convention of the JavaScript projects the
//! analyzer targets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration derived from a completed project analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedConfig {
    pub security: SecuritySection,
    pub coverage: CoverageSection,
    pub performance: PerformanceSection,
    pub reporting: ReportingSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub react: Option<ReactSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseSection>,
    pub testing: TestingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySection {
    /// Per-check toggles, all enabled by default
    pub enabled: BTreeMap<String, bool>,
    pub thresholds: Thresholds,
    pub custom_rules: CustomRules,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    pub max_vulnerabilities: u32,
    pub min_security_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRules {
    pub allowed_file_types: Vec<String>,
    pub max_file_size: u64,
    pub required_headers: Vec<String>,
    /// Regex sources; compiled by the consuming test runner, not here
    pub forbidden_patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSection {
    pub threshold: u8,
    pub include_security_coverage: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSection {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingSection {
    pub enabled: bool,
    pub formats: Vec<String>,
}

/// Present only when the analysis detected React
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactSection {
    pub providers: Vec<String>,
    pub mock_contexts: bool,
    pub test_user_interactions: bool,
    pub validate_props: bool,
    pub ui_framework: String,
    pub state_management: String,
}

/// Present only when the analysis detected NestJS or Express
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSection {
    pub test_endpoints: bool,
    pub validate_responses: bool,
    pub test_authentication: bool,
    pub test_authorization: bool,
    pub database: Option<String>,
    pub authentication: Vec<String>,
    pub deployment: String,
}

/// Present only when the analysis detected a database layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseSection {
    pub test_connections: bool,
    pub validate_queries: bool,
    pub test_transactions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestingSection {
    pub framework: String,
    pub e2e: Option<String>,
    pub component: Option<String>,
}
