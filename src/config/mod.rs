//! Configuration management

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub security: SecurityConfig,
    pub coverage: CoverageConfig,
    pub performance: PerformanceConfig,
    pub reporting: ReportingConfig,
    pub logging: LoggingConfig,
}

/// Security check thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum number of vulnerable checks tolerated before a run is considered failing
    pub max_vulnerabilities: u32,
    /// Minimum security score (0-100)
    pub min_security_score: u8,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_vulnerabilities: 0,
            min_security_score: 90,
        }
    }
}

/// Coverage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Overall coverage threshold percentage (0-100)
    pub threshold: u8,
    /// Whether security test coverage is included in the overall figure
    pub include_security_coverage: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            threshold: 80,
            include_security_coverage: true,
        }
    }
}

/// Performance testing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub enabled: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingConfig {
    pub enabled: bool,
    /// Directory report files are written to
    pub output_dir: PathBuf,
    /// Formats generated by default
    pub formats: Vec<String>,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output_dir: PathBuf::from("./reports"),
            formats: vec!["html".to_string(), "json".to_string()],
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        self.security.validate()?;
        self.coverage.validate()?;
        self.reporting.validate()?;
        Ok(())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        // Add environment-specific config if ENV is set
        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        // Add local config and environment variables last (highest priority)
        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("SECTESTER").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;

        // Validate the loaded configuration
        config.validate()?;

        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("Configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.coverage.threshold, 80);
        assert_eq!(config.security.min_security_score, 90);
        assert_eq!(config.reporting.formats, vec!["html", "json"]);
    }
}
