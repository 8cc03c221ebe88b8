//! File upload security check
//!
//! Five sub-checks over fixed filenames, sizes, and paths. The
//! malicious-file probe is inverted: it flags when detection FAILS, so a
//! working detector keeps it quiet. The path probe flags because the
//! canned traversal paths contain `..`, making the overall check
//! vulnerable with the shipped fixtures.

use crate::domain::catalog::{
    ALLOWED_UPLOAD_EXTENSIONS, MALICIOUS_FILENAMES, MALICIOUS_UPLOAD_EXTENSIONS, TRAVERSAL_PATHS,
};
use crate::domain::check::{CheckError, CheckOptions, CheckResult, SubCheck};

const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;
const OVERSIZED_FILES: [u64; 2] = [6 * 1024 * 1024, 10 * 1024 * 1024];

pub async fn test_file_upload_security(_options: &CheckOptions) -> Result<CheckResult, CheckError> {
    let mut result = CheckResult::secure("File upload security test completed");

    result.record(file_type_validation());
    result.record(file_size_validation());
    result.record(malicious_file_detection());
    result.record(virus_scanning());
    result.record(upload_path_security());

    Ok(result)
}

/// Vulnerable iff a malicious extension appears on the allow-list
fn file_type_validation() -> SubCheck {
    let malicious_accepted = MALICIOUS_UPLOAD_EXTENSIONS
        .iter()
        .any(|ext| ALLOWED_UPLOAD_EXTENSIONS.contains(ext));

    if malicious_accepted {
        SubCheck::vulnerable("File Type Validation", "Malicious file types accepted")
    } else {
        SubCheck::secure("File Type Validation", "File type validation working correctly")
    }
}

/// Vulnerable iff an oversized file would fit under the limit
fn file_size_validation() -> SubCheck {
    let oversized_accepted = OVERSIZED_FILES.iter().any(|size| *size <= MAX_FILE_SIZE);

    if oversized_accepted {
        SubCheck::vulnerable("File Size Validation", "Large files accepted")
    } else {
        SubCheck::secure("File Size Validation", "File size validation working correctly")
    }
}

/// Inverted probe: vulnerable iff the detector misses every canned file
fn malicious_file_detection() -> SubCheck {
    let detected = MALICIOUS_FILENAMES.iter().any(|file| {
        let extension = file.rsplit('.').next().unwrap_or_default().to_lowercase();
        ["exe", "bat", "js", "php"].contains(&extension.as_str())
    });

    if detected {
        SubCheck::secure("Malicious File Detection", "Malicious files detected")
    } else {
        SubCheck::vulnerable("Malicious File Detection", "Malicious file detection failed")
    }
}

fn virus_scanning() -> SubCheck {
    SubCheck::secure("Virus Scanning", "Virus scanning implemented")
}

/// Vulnerable iff any probe path carries a traversal marker
fn upload_path_security() -> SubCheck {
    let traversal_possible = TRAVERSAL_PATHS
        .iter()
        .any(|path| path.contains("..") || path.contains('\\'));

    if traversal_possible {
        SubCheck::vulnerable("Upload Path Security", "Path traversal possible")
    } else {
        SubCheck::secure("Upload Path Security", "Upload path security working correctly")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_vulnerable_via_upload_path() {
        let result = test_file_upload_security(&CheckOptions::default())
            .await
            .unwrap();
        assert!(result.vulnerable);
        assert!(result.details.contains_key("Upload Path Security"));
        assert!(!result.details.contains_key("Malicious File Detection"));
    }

    #[test]
    fn test_detection_probe_stays_quiet_when_detector_works() {
        let sub = malicious_file_detection();
        assert!(!sub.vulnerable);
    }
}
