//! Load testing stub
//!
//! Returns canned timing and throughput figures; no requests are made.

use serde::{Deserialize, Serialize};

/// Options accepted for API compatibility
#[derive(Debug, Clone, Default)]
pub struct LoadTestOptions {
    pub duration_secs: Option<u64>,
    pub concurrent_users: Option<u32>,
    pub acceptable_response_time_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimes {
    pub avg: u64,
    pub min: u64,
    pub max: u64,
    pub p95: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub avg: u64,
    pub max: u64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadTestSnapshot {
    pub response_time: ResponseTimes,
    pub throughput: u64,
    pub memory_usage: MemoryUsage,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Default)]
pub struct PerformanceTester;

impl PerformanceTester {
    pub fn new() -> Self {
        Self
    }

    pub async fn run_load_tests(&self, _options: &LoadTestOptions) -> LoadTestSnapshot {
        LoadTestSnapshot {
            response_time: ResponseTimes {
                avg: 150,
                min: 50,
                max: 300,
                p95: 250,
            },
            throughput: 1000,
            memory_usage: MemoryUsage {
                avg: 50,
                max: 80,
                unit: "MB".to_string(),
            },
            recommendations: vec![
                "Optimize database queries".to_string(),
                "Implement caching for frequently accessed data".to_string(),
                "Consider CDN for static assets".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_is_canned() {
        let snapshot = PerformanceTester::new()
            .run_load_tests(&LoadTestOptions::default())
            .await;
        assert_eq!(snapshot.response_time.avg, 150);
        assert_eq!(snapshot.throughput, 1000);
        assert_eq!(snapshot.memory_usage.unit, "MB");
    }
}
