//! Dependency manifest parsing

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::analysis::AnalyzerError;

/// `package.json`-shaped dependency manifest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Load the manifest from `<root>/package.json`.
    ///
    /// A missing manifest is fatal to the whole analysis.
    pub fn load(root: &Path) -> Result<Self, AnalyzerError> {
        let path = root.join("package.json");

        if !path.exists() {
            return Err(AnalyzerError::ManifestMissing(path));
        }

        let content = std::fs::read_to_string(&path).map_err(|source| AnalyzerError::Io {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content)
            .map_err(|source| AnalyzerError::ManifestParse { path, source })
    }

    /// Whether the package appears in dependencies or devDependencies
    pub fn has(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Whether any of the packages appears in either dependency table
    pub fn has_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_merges_both_dependency_tables() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"dependencies": {"react": "^18.0.0"}, "devDependencies": {"vitest": "^1.0.0"}}"#,
        )
        .unwrap();

        let manifest = PackageManifest::load(temp.path()).unwrap();
        assert!(manifest.has("react"));
        assert!(manifest.has("vitest"));
        assert!(!manifest.has("express"));
        assert!(manifest.has_any(&["express", "react"]));
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let temp = TempDir::new().unwrap();
        let err = PackageManifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::ManifestMissing(_)));
    }

    #[test]
    fn test_malformed_manifest_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), "not json").unwrap();

        let err = PackageManifest::load(temp.path()).unwrap_err();
        assert!(matches!(err, AnalyzerError::ManifestParse { .. }));
    }
}
