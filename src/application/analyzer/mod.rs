//! Project analyzer
//!
//! Single forward pass over a dependency manifest and the project
//! directory: dependency markers set capability flags, top-level file
//! markers corroborate them, and an ordered predicate table classifies the
//! project type. Recomputed from disk on every call; nothing is cached.

mod manifest;

pub use manifest::PackageManifest;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::analysis::{AnalyzerError, ProjectAnalysis, ProjectType};
use crate::domain::catalog::SECURITY_PACKAGES;

/// File system-based project analyzer
pub struct ProjectAnalyzer {
    root: PathBuf,
}

impl ProjectAnalyzer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Analyze the project structure and detect frameworks.
    ///
    /// A missing manifest aborts the analysis; no partial result is
    /// returned.
    pub async fn analyze(&self) -> Result<ProjectAnalysis, AnalyzerError> {
        tracing::info!(root = %self.root.display(), "analyzing project structure");

        let manifest = PackageManifest::load(&self.root)?;
        let mut analysis = ProjectAnalysis::new();

        self.scan_dependencies(&manifest, &mut analysis);
        self.scan_structure(&mut analysis)?;
        self.scan_testing_setup(&mut analysis)?;
        self.scan_security_features(&manifest, &mut analysis)?;

        analysis.project_type = classify(&analysis);
        generate_recommendations(&mut analysis);

        tracing::info!(
            project_type = %analysis.project_type,
            frameworks = ?analysis.frameworks,
            "project analysis complete"
        );

        Ok(analysis)
    }

    /// Set capability flags from the dependency tables
    fn scan_dependencies(&self, manifest: &PackageManifest, analysis: &mut ProjectAnalysis) {
        if manifest.has_any(&["react", "react-dom"]) {
            analysis.has_react = true;
            analysis.frameworks.push("React".to_string());
        }
        if manifest.has_any(&["@nestjs/core", "@nestjs/common"]) {
            analysis.has_nestjs = true;
            analysis.frameworks.push("NestJS".to_string());
        }
        if manifest.has("express") {
            analysis.has_express = true;
            analysis.frameworks.push("Express".to_string());
        }
        if manifest.has("vue") {
            analysis.has_vue = true;
            analysis.frameworks.push("Vue".to_string());
        }
        if manifest.has("@angular/core") {
            analysis.has_angular = true;
            analysis.frameworks.push("Angular".to_string());
        }

        if manifest.has_any(&["typescript", "@types/node"]) {
            analysis.has_typescript = true;
        }

        // Testing frameworks
        if manifest.has("vitest") {
            analysis.has_vitest = true;
        }
        if manifest.has("jest") {
            analysis.has_jest = true;
        }
        if manifest.has_any(&["@testing-library/react", "@testing-library/dom"]) {
            analysis.has_testing_library = true;
        }
        if manifest.has("cypress") {
            analysis.has_cypress = true;
        }
        if manifest.has("@playwright/test") {
            analysis.has_playwright = true;
        }

        // UI frameworks
        if manifest.has("tailwindcss") {
            analysis.has_tailwind = true;
        }
        if manifest.has("bootstrap") {
            analysis.has_bootstrap = true;
        }
        if manifest.has_any(&["@mui/material", "@material-ui/core"]) {
            analysis.has_material_ui = true;
        }
        if manifest.has("antd") {
            analysis.has_ant_design = true;
        }
        if manifest.has("@chakra-ui/react") {
            analysis.has_chakra_ui = true;
        }
        if manifest.has("styled-components") {
            analysis.has_styled_components = true;
        }
        if manifest.has_any(&["@emotion/react", "@emotion/styled"]) {
            analysis.has_emotion = true;
        }

        // State management
        if manifest.has_any(&["@reduxjs/toolkit", "redux"]) {
            analysis.has_redux = true;
        }
        if manifest.has("zustand") {
            analysis.has_zustand = true;
        }

        // GraphQL replaces the REST assumption
        if manifest.has_any(&["graphql", "@apollo/client", "apollo-server"]) {
            analysis.has_graphql = true;
            analysis.has_rest = false;
        }

        // Databases
        if manifest.has("prisma") {
            analysis.has_prisma = true;
            analysis.has_database = true;
        }
        if manifest.has("typeorm") {
            analysis.has_typeorm = true;
            analysis.has_database = true;
        }
        if manifest.has("mongoose") {
            analysis.has_mongoose = true;
            analysis.has_database = true;
        }
        if manifest.has("sequelize") {
            analysis.has_sequelize = true;
            analysis.has_database = true;
        }

        // Deployment platforms
        if manifest.has("vercel") {
            analysis.has_vercel = true;
        }
        if manifest.has("netlify") {
            analysis.has_netlify = true;
        }
    }

    /// Top-level marker files and the React context scan
    fn scan_structure(&self, analysis: &mut ProjectAnalysis) -> Result<(), AnalyzerError> {
        let files = self.top_level_names()?;
        let contains = |name: &str| files.iter().any(|f| f == name);

        if contains("Dockerfile") || contains("docker-compose.yml") {
            analysis.has_docker = true;
        }
        if contains("k8s") || files.iter().any(|f| f.contains("kubernetes")) {
            analysis.has_kubernetes = true;
        }

        // CI/CD markers
        if self.root.join(".github").join("workflows").exists() {
            analysis.has_github_actions = true;
        }
        if contains(".gitlab-ci.yml") {
            analysis.has_gitlab_ci = true;
        }
        if contains("Jenkinsfile") {
            analysis.has_jenkins = true;
        }
        analysis.has_ci =
            analysis.has_github_actions || analysis.has_gitlab_ci || analysis.has_jenkins;

        // Cloud provider markers
        if files.iter().any(|f| f.contains("aws") || f.contains("serverless")) {
            analysis.has_aws = true;
        }
        if files.iter().any(|f| f.contains("gcp") || f.contains("google")) {
            analysis.has_gcp = true;
        }
        if files.iter().any(|f| f.contains("azure")) {
            analysis.has_azure = true;
        }

        // Context usage in React source trees
        let src = self.root.join("src");
        if analysis.has_react && src.is_dir() && scan_for_context(&src) {
            analysis.has_context = true;
        }

        Ok(())
    }

    /// Config marker files corroborate the dependency-based flags
    fn scan_testing_setup(&self, analysis: &mut ProjectAnalysis) -> Result<(), AnalyzerError> {
        let files = self.top_level_names()?;
        let contains = |name: &str| files.iter().any(|f| f == name);

        if contains(".storybook") || self.root.join("src").join("stories").exists() {
            analysis.has_storybook = true;
        }

        if files.iter().any(|f| f.contains("vitest.config")) {
            analysis.has_vitest = true;
        }
        if files.iter().any(|f| f.contains("jest.config")) {
            analysis.has_jest = true;
        }
        if contains("cypress.config") {
            analysis.has_cypress = true;
        }
        if contains("playwright.config") {
            analysis.has_playwright = true;
        }

        Ok(())
    }

    /// Credit security-related packages and environment/header features
    fn scan_security_features(
        &self,
        manifest: &PackageManifest,
        analysis: &mut ProjectAnalysis,
    ) -> Result<(), AnalyzerError> {
        for package in SECURITY_PACKAGES {
            if manifest.has(package) {
                analysis.security_features.push(package.to_string());
            }
        }

        let files = self.top_level_names()?;
        if files.iter().any(|f| f.contains(".env")) {
            analysis
                .security_features
                .push("environment-variables".to_string());
        }

        if analysis.has_express || analysis.has_nestjs {
            analysis.security_features.push("http-headers".to_string());
        }

        Ok(())
    }

    fn top_level_names(&self) -> Result<Vec<String>, AnalyzerError> {
        let entries = std::fs::read_dir(&self.root).map_err(|source| AnalyzerError::Io {
            path: self.root.clone(),
            source,
        })?;

        Ok(entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect())
    }
}

/// Recursive scan of a source tree for a context-creation marker
fn scan_for_context(src: &Path) -> bool {
    WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(e))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .any(|entry| {
            let name = entry.file_name().to_string_lossy();
            if name.contains("Context") || name.contains("Provider") {
                return true;
            }
            std::fs::read_to_string(entry.path())
                .map(|content| content.contains("createContext"))
                .unwrap_or(false)
        })
}

/// Check if a directory entry should be ignored
fn is_ignored(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.') || s == "node_modules" || s == "dist" || s == "build")
        .unwrap_or(false)
}

/// First-match-wins classification over an explicit ordered predicate
/// table. The order is the contract: Vue and Angular are unreachable when
/// any React/NestJS/Express flag is set.
fn classify(analysis: &ProjectAnalysis) -> ProjectType {
    let rules: [(fn(&ProjectAnalysis) -> bool, ProjectType); 7] = [
        (
            |a| a.has_react && a.has_nestjs,
            ProjectType::FullstackReactNestjs,
        ),
        (
            |a| a.has_react && a.has_express,
            ProjectType::FullstackReactExpress,
        ),
        (|a| a.has_react, ProjectType::ReactFrontend),
        (|a| a.has_nestjs, ProjectType::NestjsBackend),
        (|a| a.has_express, ProjectType::ExpressBackend),
        (|a| a.has_vue, ProjectType::VueFrontend),
        (|a| a.has_angular, ProjectType::AngularFrontend),
    ];

    rules
        .iter()
        .find(|(predicate, _)| predicate(analysis))
        .map(|(_, tag)| *tag)
        .unwrap_or(ProjectType::NodeBackend)
}

/// Append framework-conditional recommendation blocks in detection order,
/// then the unconditional general block. No deduplication across blocks.
fn generate_recommendations(analysis: &mut ProjectAnalysis) {
    let mut recommendations: Vec<String> = Vec::new();
    let push_all = |recs: &[&str], out: &mut Vec<String>| {
        out.extend(recs.iter().map(|r| r.to_string()));
    };

    if analysis.has_react {
        push_all(
            &[
                "Implement Content Security Policy (CSP) headers",
                "Use React.memo and useMemo for performance optimization",
                "Implement proper error boundaries",
                "Use React.StrictMode for development",
                "Validate props with PropTypes or TypeScript",
            ],
            &mut recommendations,
        );

        if !analysis.has_testing_library {
            recommendations.push("Add @testing-library/react for component testing".to_string());
        }
    }

    if analysis.has_nestjs {
        push_all(
            &[
                "Use NestJS built-in validation pipes",
                "Implement proper exception filters",
                "Use Guards for authentication",
                "Use Interceptors for request/response transformation",
                "Implement proper logging with Winston",
            ],
            &mut recommendations,
        );
    }

    if analysis.has_express {
        push_all(
            &[
                "Use helmet for security headers",
                "Implement rate limiting",
                "Use express-validator for input validation",
                "Implement proper error handling middleware",
                "Use cors for cross-origin requests",
            ],
            &mut recommendations,
        );
    }

    if analysis.has_database {
        push_all(
            &[
                "Use parameterized queries to prevent SQL injection",
                "Implement proper database connection pooling",
                "Use database migrations for schema changes",
                "Implement proper backup strategies",
            ],
            &mut recommendations,
        );
    }

    push_all(
        &[
            "Use HTTPS in production",
            "Implement proper authentication and authorization",
            "Use environment variables for sensitive data",
            "Regularly update dependencies",
            "Implement proper logging and monitoring",
            "Use security headers (HSTS, CSP, etc.)",
            "Implement rate limiting and request throttling",
            "Use secure session management",
            "Implement proper CORS policies",
            "Use input validation and sanitization",
        ],
        &mut recommendations,
    );

    analysis.recommendations = recommendations;
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
    fn test_classification_order_is_first_match_wins() {
        // React + NestJS wins over every later rule, even with Express set
        let analysis = analysis_with(|a| {
            a.has_react = true;
            a.has_nestjs = true;
            a.has_express = true;
        });
        assert_eq!(classify(&analysis), ProjectType::FullstackReactNestjs);

        let analysis = analysis_with(|a| {
            a.has_react = true;
            a.has_express = true;
        });
        assert_eq!(classify(&analysis), ProjectType::FullstackReactExpress);

        // Vue is unreachable once Express is set
        let analysis = analysis_with(|a| {
            a.has_express = true;
            a.has_vue = true;
        });
        assert_eq!(classify(&analysis), ProjectType::ExpressBackend);

        let analysis = analysis_with(|a| a.has_angular = true);
        assert_eq!(classify(&analysis), ProjectType::AngularFrontend);

        assert_eq!(classify(&ProjectAnalysis::new()), ProjectType::NodeBackend);
    }

    #[test]
    fn test_general_recommendations_always_append() {
        let mut analysis = ProjectAnalysis::new();
        generate_recommendations(&mut analysis);
        assert_eq!(analysis.recommendations.len(), 10);
        assert_eq!(analysis.recommendations[0], "Use HTTPS in production");
    }

    #[test]
    fn test_react_block_precedes_general_block() {
        let mut analysis = analysis_with(|a| a.has_react = true);
        generate_recommendations(&mut analysis);

        // 5 React entries + testing-library nudge + 10 general entries
        assert_eq!(analysis.recommendations.len(), 16);
        assert!(analysis.recommendations[5].contains("@testing-library/react"));
    }

    #[test]
    fn test_react_block_skips_testing_library_nudge_when_present() {
        let mut analysis = analysis_with(|a| {
            a.has_react = true;
            a.has_testing_library = true;
        });
        generate_recommendations(&mut analysis);
        assert_eq!(analysis.recommendations.len(), 15);
    }
}
