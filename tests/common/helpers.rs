//! Test helper functions

use std::path::Path;

use tempfile::TempDir;

/// Create a temporary project directory with the given manifest content
pub fn project_with_manifest(manifest: &str) -> TempDir {
    let temp = TempDir::new().expect("create temp project");
    std::fs::write(temp.path().join("package.json"), manifest).expect("write manifest");
    temp
}

/// Write a file under the project root, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, content).expect("write file");
}
