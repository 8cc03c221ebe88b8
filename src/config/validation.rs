//! Configuration validation module

use crate::config::{CoverageConfig, ReportingConfig, SecurityConfig};

/// Trait for validating configuration sections
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Security configuration error: {message}")]
    Security { message: String },

    #[error("Coverage configuration error: {message}")]
    Coverage { message: String },

    #[error("Reporting configuration error: {message}")]
    Reporting { message: String },
}

impl ValidationError {
    pub fn security(message: impl Into<String>) -> Self {
        Self::Security {
            message: message.into(),
        }
    }

    pub fn coverage(message: impl Into<String>) -> Self {
        Self::Coverage {
            message: message.into(),
        }
    }

    pub fn reporting(message: impl Into<String>) -> Self {
        Self::Reporting {
            message: message.into(),
        }
    }
}

impl Validate for SecurityConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.min_security_score > 100 {
            return Err(ValidationError::security(format!(
                "min_security_score must be in range 0-100, got {}",
                self.min_security_score
            )));
        }

        Ok(())
    }
}

impl Validate for CoverageConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.threshold > 100 {
            return Err(ValidationError::coverage(format!(
                "threshold must be in range 0-100, got {}",
                self.threshold
            )));
        }

        Ok(())
    }
}

impl Validate for ReportingConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::reporting(
                "output_dir cannot be empty".to_string(),
            ));
        }

        for format in &self.formats {
            if !matches!(format.as_str(), "html" | "json" | "text") {
                return Err(ValidationError::reporting(format!(
                    "Unknown report format: {}. Must be one of: html, json, text",
                    format
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_coverage_config_validation() {
        let valid = CoverageConfig {
            threshold: 80,
            include_security_coverage: true,
        };
        assert!(valid.validate().is_ok());

        // Threshold above 100
        let invalid = CoverageConfig {
            threshold: 101,
            ..valid
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_security_config_validation() {
        let valid = SecurityConfig {
            max_vulnerabilities: 0,
            min_security_score: 90,
        };
        assert!(valid.validate().is_ok());

        let invalid = SecurityConfig {
            min_security_score: 150,
            ..valid
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_reporting_config_validation() {
        let valid = ReportingConfig {
            enabled: true,
            output_dir: PathBuf::from("./reports"),
            formats: vec!["html".to_string(), "json".to_string()],
        };
        assert!(valid.validate().is_ok());

        // Empty output directory
        let invalid = ReportingConfig {
            output_dir: PathBuf::new(),
            ..valid.clone()
        };
        assert!(invalid.validate().is_err());

        // Unknown format
        let invalid = ReportingConfig {
            formats: vec!["pdf".to_string()],
            ..valid
        };
        assert!(invalid.validate().is_err());
    }
}
