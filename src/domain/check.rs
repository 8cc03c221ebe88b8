//! Security check result and option types

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The sixteen security checks, in aggregation order.
///
/// The order is fixed and only affects the ordering of entries in the run
/// summary; the checks are independent of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Xss,
    SqlInjection,
    Csrf,
    Authentication,
    Authorization,
    InputValidation,
    FileUpload,
    SessionSecurity,
    Encryption,
    DependencyVulnerabilities,
    EnvironmentSecurity,
    LoggingSecurity,
    SecurityHeaders,
    RateLimiting,
    TokenManagement,
    ErrorHandling,
}

impl CheckKind {
    /// All checks in the order `run_all` executes them
    pub const ALL: [CheckKind; 16] = [
        CheckKind::Xss,
        CheckKind::SqlInjection,
        CheckKind::Csrf,
        CheckKind::Authentication,
        CheckKind::Authorization,
        CheckKind::InputValidation,
        CheckKind::FileUpload,
        CheckKind::SessionSecurity,
        CheckKind::Encryption,
        CheckKind::DependencyVulnerabilities,
        CheckKind::EnvironmentSecurity,
        CheckKind::LoggingSecurity,
        CheckKind::SecurityHeaders,
        CheckKind::RateLimiting,
        CheckKind::TokenManagement,
        CheckKind::ErrorHandling,
    ];

    /// Human-readable name used in summaries and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            CheckKind::Xss => "XSS Prevention",
            CheckKind::SqlInjection => "SQL Injection",
            CheckKind::Csrf => "CSRF Protection",
            CheckKind::Authentication => "Authentication",
            CheckKind::Authorization => "Authorization",
            CheckKind::InputValidation => "Input Validation",
            CheckKind::FileUpload => "File Upload Security",
            CheckKind::SessionSecurity => "Session Security",
            CheckKind::Encryption => "Encryption",
            CheckKind::DependencyVulnerabilities => "Dependency Vulnerabilities",
            CheckKind::EnvironmentSecurity => "Environment Security",
            CheckKind::LoggingSecurity => "Logging Security",
            CheckKind::SecurityHeaders => "Security Headers",
            CheckKind::RateLimiting => "Rate Limiting",
            CheckKind::TokenManagement => "Token Management",
            CheckKind::ErrorHandling => "Error Handling",
        }
    }

    /// Key used for the check toggle in generated configuration
    pub fn config_key(&self) -> &'static str {
        match self {
            CheckKind::Xss => "xss",
            CheckKind::SqlInjection => "sqlInjection",
            CheckKind::Csrf => "csrf",
            CheckKind::Authentication => "authentication",
            CheckKind::Authorization => "authorization",
            CheckKind::InputValidation => "inputValidation",
            CheckKind::FileUpload => "fileUpload",
            CheckKind::SessionSecurity => "sessionSecurity",
            CheckKind::Encryption => "encryption",
            CheckKind::DependencyVulnerabilities => "dependencyVulnerabilities",
            CheckKind::EnvironmentSecurity => "environmentSecurity",
            CheckKind::LoggingSecurity => "loggingSecurity",
            CheckKind::SecurityHeaders => "securityHeaders",
            CheckKind::RateLimiting => "rateLimiting",
            CheckKind::TokenManagement => "tokenManagement",
            CheckKind::ErrorHandling => "errorHandling",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Options accepted by every check for API compatibility.
///
/// Most checks classify their own canned fixtures and ignore these fields
/// entirely; a caller cannot make a check report safe by supplying safe
/// input. Only the CSRF check (`form`) and the rate limiting check
/// (`attempts`, `max_requests`) consume options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckOptions {
    /// Form under test for the CSRF check
    pub form: Option<FormFixture>,
    /// Simulated request count for the rate limiting check
    pub attempts: Option<u32>,
    /// Time window in milliseconds for the rate limiting check
    pub time_window_ms: Option<u64>,
    /// Requests allowed before the limiter blocks
    pub max_requests: Option<u32>,
}

/// DOM-like form stand-in for the CSRF check
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFixture {
    attributes: BTreeSet<String>,
    input_names: BTreeSet<String>,
}

impl FormFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.attributes.insert(name.into());
        self
    }

    pub fn with_input(mut self, name: impl Into<String>) -> Self {
        self.input_names.insert(name.into());
        self
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    pub fn has_input(&self, name: &str) -> bool {
        self.input_names.contains(name)
    }
}

/// Outcome of pushing one payload through a sanitizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadOutcome {
    pub payload: String,
    pub sanitized: String,
    pub vulnerable: bool,
    pub message: String,
}

/// Outcome of one named sub-check within a composite check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCheck {
    pub name: String,
    pub vulnerable: bool,
    pub message: String,
}

impl SubCheck {
    pub fn secure(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vulnerable: false,
            message: message.into(),
        }
    }

    pub fn vulnerable(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vulnerable: true,
            message: message.into(),
        }
    }
}

/// Result of a single security check.
///
/// One struct covers all sixteen checks; each check fills only the
/// collections it produces, and empty collections are omitted from
/// serialized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub vulnerable: bool,
    pub message: String,
    /// Named sub-check outcomes, for composite checks
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, SubCheck>,
    /// Per-payload outcomes, for sanitizer checks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payloads: Vec<PayloadOutcome>,
    /// Free-text issues, for the token and error handling checks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    /// Headers absent from the simulated response
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_headers: Vec<String>,
    /// Whether the simulated limiter engaged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limited: Option<bool>,
    /// Request count at which the limiter engaged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_after: Option<u32>,
}

impl CheckResult {
    /// A passing result with the given completion message
    pub fn secure(message: impl Into<String>) -> Self {
        Self {
            vulnerable: false,
            message: message.into(),
            ..Self::default()
        }
    }

    /// Record a sub-check outcome, flagging the result if it is vulnerable
    pub fn record(&mut self, sub: SubCheck) {
        if sub.vulnerable {
            self.vulnerable = true;
            self.details.insert(sub.name.clone(), sub);
        }
    }
}

/// Error produced by a check that could not complete.
///
/// Checks classify fixed fixtures, so failures are exceptional; `run_all`
/// converts them into failed entries rather than aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("check fixture unavailable: {0}")]
    FixtureUnavailable(String),
}

/// One vulnerability entry in a run summary: either a vulnerable check
/// result or the error message of a check that could not complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VulnerabilityEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<CheckResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VulnerabilityEntry {
    pub fn from_result(kind: CheckKind, details: CheckResult) -> Self {
        Self {
            kind: kind.display_name().to_string(),
            details: Some(details),
            error: None,
        }
    }

    pub fn from_error(kind: CheckKind, error: &CheckError) -> Self {
        Self {
            kind: kind.display_name().to_string(),
            details: None,
            error: Some(error.to_string()),
        }
    }
}

/// Aggregated outcome of running all sixteen checks.
///
/// Derived, never stored: `passed + failed` always equals the number of
/// checks, and `vulnerabilities` holds one entry per failed check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub id: uuid::Uuid,
    pub passed: usize,
    pub failed: usize,
    pub vulnerabilities: Vec<VulnerabilityEntry>,
    pub timestamp: DateTime<Utc>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            passed: 0,
            failed: 0,
            vulnerabilities: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_checks_have_distinct_names() {
        let mut names: Vec<&str> = CheckKind::ALL.iter().map(|k| k.display_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_record_flags_result() {
        let mut result = CheckResult::secure("ok");
        result.record(SubCheck::secure("Passing", "fine"));
        assert!(!result.vulnerable);
        assert!(result.details.is_empty());

        result.record(SubCheck::vulnerable("Failing", "bad"));
        assert!(result.vulnerable);
        assert!(result.details.contains_key("Failing"));
    }

    #[test]
    fn test_form_fixture_accessors() {
        let form = FormFixture::new()
            .with_attribute("data-csrf-token")
            .with_input("csrf_token");
        assert!(form.has_attribute("data-csrf-token"));
        assert!(form.has_input("csrf_token"));
        assert!(!form.has_input("_token"));
    }
}
