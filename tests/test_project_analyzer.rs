//! Integration tests for the project analyzer

mod common;

use common::{
    express_backend_manifest, plain_node_manifest, project_with_manifest, react_frontend_manifest,
    react_nestjs_manifest, write_file,
};
use sectester::domain::analysis::{AnalyzerError, ProjectType};
use sectester::ProjectAnalyzer;

#[tokio::test]
async fn react_nestjs_classifies_as_fullstack() {
    let project = project_with_manifest(react_nestjs_manifest());

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    assert_eq!(analysis.project_type, ProjectType::FullstackReactNestjs);
    assert_eq!(analysis.frameworks, vec!["React", "NestJS"]);
    assert!(analysis.has_typescript);
    assert!(analysis.has_vitest);
}

#[tokio::test]
async fn missing_manifest_aborts_the_analysis() {
    let project = tempfile::TempDir::new().unwrap();

    let err = ProjectAnalyzer::new(project.path())
        .analyze()
        .await
        .unwrap_err();

    assert!(matches!(err, AnalyzerError::ManifestMissing(_)));
}

#[tokio::test]
async fn express_backend_gets_http_headers_feature() {
    let project = project_with_manifest(express_backend_manifest());

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    assert_eq!(analysis.project_type, ProjectType::ExpressBackend);
    assert!(analysis.has_database);
    assert!(analysis.has_prisma);
    assert!(analysis
        .security_features
        .iter()
        .any(|f| f == "http-headers"));

    // helmet is on the catalog twice, so a project using it is credited twice
    let helmet_count = analysis
        .security_features
        .iter()
        .filter(|f| *f == "helmet")
        .count();
    assert_eq!(helmet_count, 2);
}

#[tokio::test]
async fn config_marker_files_corroborate_dependency_flags() {
    let project = project_with_manifest(plain_node_manifest());
    write_file(project.path(), "jest.config.js", "module.exports = {};");

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    assert!(analysis.has_jest);
    assert!(!analysis.has_vitest);
}

#[tokio::test]
async fn env_files_are_credited_as_a_security_feature() {
    let project = project_with_manifest(plain_node_manifest());
    write_file(project.path(), ".env.local", "API_KEY=secret");

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    assert!(analysis
        .security_features
        .iter()
        .any(|f| f == "environment-variables"));
}

#[tokio::test]
async fn react_source_tree_is_scanned_for_context_usage() {
    let project = project_with_manifest(react_frontend_manifest());
    write_file(
        project.path(),
        "src/state/app.js",
        "export const AppState = createContext(null);",
    );

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    assert_eq!(analysis.project_type, ProjectType::ReactFrontend);
    assert!(analysis.has_context);
}

#[tokio::test]
async fn context_scan_skips_non_react_projects() {
    let project = project_with_manifest(plain_node_manifest());
    write_file(
        project.path(),
        "src/state/app.js",
        "export const AppState = createContext(null);",
    );

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    assert!(!analysis.has_context);
}

#[tokio::test]
async fn ci_markers_set_the_derived_ci_flag() {
    let project = project_with_manifest(plain_node_manifest());
    write_file(project.path(), ".github/workflows/ci.yml", "name: ci");

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    assert!(analysis.has_github_actions);
    assert!(analysis.has_ci);
    assert!(!analysis.has_gitlab_ci);
}

#[tokio::test]
async fn docker_and_cloud_markers_are_detected() {
    let project = project_with_manifest(plain_node_manifest());
    write_file(project.path(), "Dockerfile", "FROM node:20");
    write_file(project.path(), "serverless.yml", "service: fixture");

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    assert!(analysis.has_docker);
    assert!(analysis.has_aws);
}

#[tokio::test]
async fn recommendations_keep_detection_order_with_general_block_last() {
    let project = project_with_manifest(react_nestjs_manifest());

    let analysis = ProjectAnalyzer::new(project.path()).analyze().await.unwrap();

    // React block first, then NestJS, then the 10 general entries
    assert_eq!(
        analysis.recommendations[0],
        "Implement Content Security Policy (CSP) headers"
    );
    assert!(analysis.recommendations.contains(&"Use NestJS built-in validation pipes".to_string()));
    assert_eq!(
        analysis.recommendations.last().unwrap(),
        "Use input validation and sanitization"
    );
}

#[tokio::test]
async fn analysis_is_recomputed_per_call() {
    let project = project_with_manifest(plain_node_manifest());
    let analyzer = ProjectAnalyzer::new(project.path());

    let first = analyzer.analyze().await.unwrap();
    assert_eq!(first.project_type, ProjectType::NodeBackend);

    // The manifest changes between calls; the next run must see it
    std::fs::write(
        project.path().join("package.json"),
        react_frontend_manifest(),
    )
    .unwrap();

    let second = analyzer.analyze().await.unwrap();
    assert_eq!(second.project_type, ProjectType::ReactFrontend);
}
