//! Project analysis model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Project classification produced by the analyzer.
///
/// Classification is first-match-wins over a fixed-order predicate table,
/// so a React + NestJS + Express project classifies as
/// `fullstack-react-nestjs` and never reveals the Express presence here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "fullstack-react-nestjs")]
    FullstackReactNestjs,
    #[serde(rename = "fullstack-react-express")]
    FullstackReactExpress,
    #[serde(rename = "react-frontend")]
    ReactFrontend,
    #[serde(rename = "nestjs-backend")]
    NestjsBackend,
    #[serde(rename = "express-backend")]
    ExpressBackend,
    #[serde(rename = "vue-frontend")]
    VueFrontend,
    #[serde(rename = "angular-frontend")]
    AngularFrontend,
    #[default]
    #[serde(rename = "node-backend")]
    NodeBackend,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::FullstackReactNestjs => "fullstack-react-nestjs",
            ProjectType::FullstackReactExpress => "fullstack-react-express",
            ProjectType::ReactFrontend => "react-frontend",
            ProjectType::NestjsBackend => "nestjs-backend",
            ProjectType::ExpressBackend => "express-backend",
            ProjectType::VueFrontend => "vue-frontend",
            ProjectType::AngularFrontend => "angular-frontend",
            ProjectType::NodeBackend => "node-backend",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability flags and derived classification for one analyzed project.
///
/// Created fresh per analysis run and fully recomputed from the manifest
/// and directory scan; nothing here persists across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectAnalysis {
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    /// Detected frameworks, in detection order
    pub frameworks: Vec<String>,

    pub has_react: bool,
    pub has_nestjs: bool,
    pub has_express: bool,
    pub has_vue: bool,
    pub has_angular: bool,
    pub has_typescript: bool,
    pub has_testing_library: bool,
    pub has_vitest: bool,
    pub has_jest: bool,
    pub has_cypress: bool,
    pub has_playwright: bool,
    pub has_storybook: bool,
    pub has_tailwind: bool,
    pub has_bootstrap: bool,
    pub has_material_ui: bool,
    pub has_ant_design: bool,
    pub has_chakra_ui: bool,
    pub has_styled_components: bool,
    pub has_emotion: bool,
    pub has_redux: bool,
    pub has_zustand: bool,
    pub has_context: bool,
    pub has_graphql: bool,
    pub has_rest: bool,
    pub has_database: bool,
    pub has_prisma: bool,
    pub has_typeorm: bool,
    pub has_mongoose: bool,
    pub has_sequelize: bool,
    pub has_docker: bool,
    pub has_kubernetes: bool,
    pub has_ci: bool,
    pub has_github_actions: bool,
    pub has_gitlab_ci: bool,
    pub has_jenkins: bool,
    pub has_vercel: bool,
    pub has_netlify: bool,
    pub has_aws: bool,
    pub has_gcp: bool,
    pub has_azure: bool,

    /// Security-related packages and features found, in detection order
    pub security_features: Vec<String>,
    /// Free-text recommendations, in detection order
    pub recommendations: Vec<String>,
}

impl ProjectAnalysis {
    /// Fresh analysis with REST assumed until GraphQL is detected
    pub fn new() -> Self {
        Self {
            has_rest: true,
            ..Self::default()
        }
    }
}

/// Errors from project analysis.
///
/// A missing manifest is fatal: no partial analysis is returned.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("package.json not found at {0}")]
    ManifestMissing(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_round_trips_through_serde() {
        let json = serde_json::to_string(&ProjectType::FullstackReactNestjs).unwrap();
        assert_eq!(json, "\"fullstack-react-nestjs\"");
        let back: ProjectType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectType::FullstackReactNestjs);
    }

    #[test]
    fn test_fresh_analysis_assumes_rest() {
        let analysis = ProjectAnalysis::new();
        assert!(analysis.has_rest);
        assert!(!analysis.has_graphql);
        assert_eq!(analysis.project_type, ProjectType::NodeBackend);
    }
}
