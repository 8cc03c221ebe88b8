//! Auto-configuration generator
//!
//! Pure transform from a completed [`ProjectAnalysis`] to a
//! [`RecommendedConfig`], plus serialization of the artifact. The small
//! detector helpers are first-match tables: one flag wins, later flags
//! are ignored.
//!
//! Saving overwrites any existing `security-test.config.js` without
//! confirmation or backup; regeneration is idempotent by design.

mod models;

pub use models::{
    ApiSection, CoverageSection, CustomRules, DatabaseSection, PerformanceSection, ReactSection,
    RecommendedConfig, ReportingSection, SecuritySection, TestingSection, Thresholds,
};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::domain::analysis::ProjectAnalysis;
use crate::domain::catalog::{
    BASE_FORBIDDEN_PATTERNS, DATABASE_FORBIDDEN_PATTERNS, REACT_FORBIDDEN_PATTERNS,
};
use crate::domain::check::CheckKind;

/// Name of the generated artifact at the project root
pub const CONFIG_FILE_NAME: &str = "security-test.config.js";

const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Error writing the generated configuration
#[derive(Debug, thiserror::Error)]
pub enum AutoConfigError {
    #[error("failed to write configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Derives a recommended configuration from a project analysis
pub struct AutoConfigurator {
    analysis: ProjectAnalysis,
}

impl AutoConfigurator {
    pub fn new(analysis: ProjectAnalysis) -> Self {
        Self { analysis }
    }

    pub fn analysis(&self) -> &ProjectAnalysis {
        &self.analysis
    }

    /// Build the recommended configuration from the analysis flags
    pub fn build(&self) -> RecommendedConfig {
        let analysis = &self.analysis;

        // All sixteen checks are enabled regardless of project type
        let enabled: BTreeMap<String, bool> = CheckKind::ALL
            .iter()
            .map(|kind| (kind.config_key().to_string(), true))
            .collect();

        let mut forbidden_patterns: Vec<String> = BASE_FORBIDDEN_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .collect();
        if analysis.has_react {
            forbidden_patterns.extend(REACT_FORBIDDEN_PATTERNS.iter().map(|p| p.to_string()));
        }
        if analysis.has_database {
            forbidden_patterns.extend(DATABASE_FORBIDDEN_PATTERNS.iter().map(|p| p.to_string()));
        }

        RecommendedConfig {
            security: SecuritySection {
                enabled,
                thresholds: Thresholds {
                    max_vulnerabilities: 0,
                    min_security_score: 90,
                },
                custom_rules: CustomRules {
                    allowed_file_types: vec![
                        ".jpg".to_string(),
                        ".png".to_string(),
                        ".pdf".to_string(),
                        ".doc".to_string(),
                    ],
                    max_file_size: MAX_FILE_SIZE,
                    required_headers: vec![
                        "X-Frame-Options".to_string(),
                        "X-Content-Type-Options".to_string(),
                    ],
                    forbidden_patterns,
                },
            },
            coverage: CoverageSection {
                threshold: 80,
                include_security_coverage: true,
            },
            performance: PerformanceSection { enabled: true },
            reporting: ReportingSection {
                enabled: true,
                formats: vec!["html".to_string(), "json".to_string()],
            },
            react: analysis.has_react.then(|| ReactSection {
                providers: detect_providers(analysis),
                mock_contexts: true,
                test_user_interactions: true,
                validate_props: true,
                ui_framework: detect_ui_framework(analysis).to_string(),
                state_management: detect_state_management(analysis).to_string(),
            }),
            api: (analysis.has_nestjs || analysis.has_express).then(|| ApiSection {
                test_endpoints: true,
                validate_responses: true,
                test_authentication: true,
                test_authorization: true,
                database: analysis
                    .has_database
                    .then(|| detect_database(analysis).to_string()),
                authentication: detect_authentication(analysis),
                deployment: detect_deployment(analysis).to_string(),
            }),
            database: analysis.has_database.then(|| DatabaseSection {
                test_connections: true,
                validate_queries: true,
                test_transactions: true,
            }),
            testing: TestingSection {
                framework: if analysis.has_vitest {
                    "vitest".to_string()
                } else if analysis.has_jest {
                    "jest".to_string()
                } else {
                    "unknown".to_string()
                },
                e2e: if analysis.has_cypress {
                    Some("cypress".to_string())
                } else if analysis.has_playwright {
                    Some("playwright".to_string())
                } else {
                    None
                },
                component: analysis.has_storybook.then(|| "storybook".to_string()),
            },
        }
    }

    /// Serialize the configuration as a JS config module and write it to
    /// `<root>/security-test.config.js`, replacing any existing file.
    pub fn save(&self, config: &RecommendedConfig, root: &Path) -> Result<PathBuf, AutoConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let content = self.render(config)?;

        std::fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "configuration saved");

        Ok(path)
    }

    /// Render the artifact: a generated-on header plus a JSON dump wrapped
    /// in a default export.
    pub fn render(&self, config: &RecommendedConfig) -> Result<String, AutoConfigError> {
        let json = serde_json::to_string_pretty(config)?;

        Ok(format!(
            "// Auto-generated security test configuration\n\
             // Generated on: {}\n\
             // Project type: {}\n\
             \n\
             export default {};\n",
            Utc::now().to_rfc3339(),
            self.analysis.project_type,
            json
        ))
    }
}

/// Providers, in detection order
fn detect_providers(analysis: &ProjectAnalysis) -> Vec<String> {
    let mut providers = Vec::new();

    if analysis.has_context {
        providers.push("context".to_string());
    }
    if analysis.has_redux {
        providers.push("redux".to_string());
    }
    if analysis.has_zustand {
        providers.push("zustand".to_string());
    }
    if analysis.has_material_ui || analysis.has_ant_design || analysis.has_chakra_ui {
        providers.push("theme".to_string());
    }

    providers
}

/// First matching UI framework wins
fn detect_ui_framework(analysis: &ProjectAnalysis) -> &'static str {
    let rules: [(fn(&ProjectAnalysis) -> bool, &'static str); 7] = [
        (|a| a.has_material_ui, "material-ui"),
        (|a| a.has_ant_design, "ant-design"),
        (|a| a.has_chakra_ui, "chakra-ui"),
        (|a| a.has_tailwind, "tailwind"),
        (|a| a.has_bootstrap, "bootstrap"),
        (|a| a.has_styled_components, "styled-components"),
        (|a| a.has_emotion, "emotion"),
    ];

    rules
        .iter()
        .find(|(predicate, _)| predicate(analysis))
        .map(|(_, name)| *name)
        .unwrap_or("none")
}

/// First matching state management wins
fn detect_state_management(analysis: &ProjectAnalysis) -> &'static str {
    if analysis.has_redux {
        "redux"
    } else if analysis.has_zustand {
        "zustand"
    } else if analysis.has_context {
        "context"
    } else {
        "none"
    }
}

/// First matching database wins
fn detect_database(analysis: &ProjectAnalysis) -> &'static str {
    if analysis.has_prisma {
        "prisma"
    } else if analysis.has_typeorm {
        "typeorm"
    } else if analysis.has_mongoose {
        "mongoose"
    } else if analysis.has_sequelize {
        "sequelize"
    } else {
        "unknown"
    }
}

/// Authentication methods credited from the security feature list;
/// session auth is assumed when nothing was detected
fn detect_authentication(analysis: &ProjectAnalysis) -> Vec<String> {
    let features = &analysis.security_features;
    let mut methods = Vec::new();

    if features.iter().any(|f| f == "jsonwebtoken") {
        methods.push("jwt".to_string());
    }
    if features.iter().any(|f| f == "passport") {
        methods.push("passport".to_string());
    }
    if features.iter().any(|f| f == "bcrypt" || f == "bcryptjs") {
        methods.push("bcrypt".to_string());
    }

    if methods.is_empty() {
        methods.push("session".to_string());
    }

    methods
}

/// First matching deployment platform wins
fn detect_deployment(analysis: &ProjectAnalysis) -> &'static str {
    let rules: [(fn(&ProjectAnalysis) -> bool, &'static str); 7] = [
        (|a| a.has_vercel, "vercel"),
        (|a| a.has_netlify, "netlify"),
        (|a| a.has_aws, "aws"),
        (|a| a.has_gcp, "gcp"),
        (|a| a.has_azure, "azure"),
        (|a| a.has_docker, "docker"),
        (|a| a.has_kubernetes, "kubernetes"),
    ];

    rules
        .iter()
        .find(|(predicate, _)| predicate(analysis))
        .map(|(_, name)| *name)
        .unwrap_or("unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_with(f: impl FnOnce(&mut ProjectAnalysis)) -> ProjectAnalysis {
        let mut analysis = ProjectAnalysis::new();
        f(&mut analysis);
        analysis
    }

    #[test]
    fn test_react_only_analysis_gets_react_section_only() {
        let configurator = AutoConfigurator::new(analysis_with(|a| a.has_react = true));
        let config = configurator.build();

        assert!(config.react.is_some());
        assert!(config.api.is_none());
        assert!(config.database.is_none());
    }

    #[test]
    fn test_all_sixteen_checks_are_enabled() {
        let configurator = AutoConfigurator::new(ProjectAnalysis::new());
        let config = configurator.build();

        assert_eq!(config.security.enabled.len(), 16);
        assert!(config.security.enabled.values().all(|enabled| *enabled));
        assert_eq!(config.security.thresholds.max_vulnerabilities, 0);
        assert_eq!(config.security.thresholds.min_security_score, 90);
    }

    #[test]
    fn test_forbidden_patterns_grow_with_flags() {
        let base = AutoConfigurator::new(ProjectAnalysis::new()).build();
        assert_eq!(base.security.custom_rules.forbidden_patterns.len(), 3);

        let react = AutoConfigurator::new(analysis_with(|a| a.has_react = true)).build();
        assert_eq!(react.security.custom_rules.forbidden_patterns.len(), 6);

        let both = AutoConfigurator::new(analysis_with(|a| {
            a.has_react = true;
            a.has_database = true;
        }))
        .build();
        assert_eq!(both.security.custom_rules.forbidden_patterns.len(), 9);
    }

    #[test]
    fn test_ui_framework_detector_is_first_match() {
        let analysis = analysis_with(|a| {
            a.has_material_ui = true;
            a.has_tailwind = true;
        });
        assert_eq!(detect_ui_framework(&analysis), "material-ui");
        assert_eq!(detect_ui_framework(&ProjectAnalysis::new()), "none");
    }

    #[test]
    fn test_authentication_defaults_to_session() {
        assert_eq!(
            detect_authentication(&ProjectAnalysis::new()),
            vec!["session".to_string()]
        );

        let analysis = analysis_with(|a| {
            a.security_features = vec!["jsonwebtoken".to_string(), "bcrypt".to_string()];
        });
        assert_eq!(
            detect_authentication(&analysis),
            vec!["jwt".to_string(), "bcrypt".to_string()]
        );
    }

    #[test]
    fn test_rendered_artifact_parses_back() {
        let configurator = AutoConfigurator::new(analysis_with(|a| a.has_react = true));
        let config = configurator.build();
        let rendered = configurator.render(&config).unwrap();

        assert!(rendered.starts_with("// Auto-generated security test configuration"));
        assert!(rendered.contains("// Project type: react-frontend"));

        let json = rendered
            .split_once("export default ")
            .unwrap()
            .1
            .trim_end()
            .trim_end_matches(';');
        let back: RecommendedConfig = serde_json::from_str(json).unwrap();
        assert_eq!(back, config);
    }
}
