//! Dependency vulnerability check
//!
//! Matches a canned dependency set against a fixed advisory list; no
//! shipped dependency pins an advisory version, so the check passes.

use crate::domain::check::{CheckError, CheckOptions, CheckResult};

/// Dependencies the simulated project declares
const DEPENDENCIES: [(&str, &str); 4] = [
    ("express", "4.19.2"),
    ("react", "18.3.1"),
    ("jsonwebtoken", "9.0.2"),
    ("mongoose", "8.4.0"),
];

/// Known-bad versions the advisory list flags
const ADVISORIES: [(&str, &str); 3] = [
    ("express", "4.16.0"),
    ("jsonwebtoken", "8.5.1"),
    ("lodash", "4.17.15"),
];

pub async fn test_dependency_vulnerabilities(
    _options: &CheckOptions,
) -> Result<CheckResult, CheckError> {
    let mut result = CheckResult::secure("Dependency vulnerability test completed");

    for (name, version) in DEPENDENCIES {
        let advisory = ADVISORIES
            .iter()
            .find(|(adv_name, adv_version)| *adv_name == name && *adv_version == version);

        if let Some((adv_name, adv_version)) = advisory {
            result.vulnerable = true;
            result
                .issues
                .push(format!("{adv_name}@{adv_version} matches a known advisory"));
        }
    }

    if result.vulnerable {
        result.message = "Vulnerable dependencies detected".to_string();
    }

    Ok(result)
}
