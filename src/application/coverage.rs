//! Coverage analysis stub
//!
//! Returns a canned coverage snapshot; no instrumentation runs. The
//! analyzer's figures intentionally differ from the canned report
//! figures, matching the shipped behavior of each stub carrying its own
//! numbers.

use serde::{Deserialize, Serialize};

/// Options accepted for API compatibility
#[derive(Debug, Clone, Default)]
pub struct CoverageOptions {
    pub threshold: Option<u8>,
    pub include_security_coverage: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageByCategory {
    pub statements: u8,
    pub branches: u8,
    pub functions: u8,
    pub lines: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSnapshot {
    pub overall: u8,
    pub by_category: CoverageByCategory,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CoverageAnalyzer;

impl CoverageAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub async fn analyze(&self, _options: &CoverageOptions) -> CoverageSnapshot {
        CoverageSnapshot {
            overall: 85,
            by_category: CoverageByCategory {
                statements: 82,
                branches: 78,
                functions: 90,
                lines: 85,
            },
            recommendations: vec![
                "Add more test cases for error handling".to_string(),
                "Increase branch coverage in authentication module".to_string(),
                "Test edge cases in data validation".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_is_canned() {
        let snapshot = CoverageAnalyzer::new()
            .analyze(&CoverageOptions::default())
            .await;
        assert_eq!(snapshot.overall, 85);
        assert_eq!(snapshot.by_category.branches, 78);
        assert_eq!(snapshot.recommendations.len(), 3);
    }
}
