//! Assertion predicates for downstream test suites
//!
//! Pure predicates over the shared validator catalog. They return plain
//! booleans so the caller's test runner decides how to fail; nothing here
//! panics.

use serde_json::Value;
use uuid::Uuid;

use crate::domain::catalog::{
    self, EMAIL_RE, JWT_RE, PHONE_RE, SLUG_RE, SQLI_SIGNATURES, URL_RE, USERNAME_RE,
    XSS_SIGNATURES,
};

/// Valid email shape (`local@domain.tld`, no whitespace)
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Valid URL shape (scheme followed by non-whitespace)
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url)
}

/// Parseable UUID in any of the hyphenated forms
pub fn is_valid_uuid(uuid: &str) -> bool {
    Uuid::parse_str(uuid).is_ok()
}

/// Three dot-separated base64url segments; signature may be empty
pub fn has_jwt_shape(token: &str) -> bool {
    JWT_RE.is_match(token)
}

/// Strong password per the shared strength predicate
pub fn is_strong_password(password: &str) -> bool {
    catalog::is_strong_password(password)
}

/// International phone number without separators
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// 3-20 word characters
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// Lowercase kebab-case slug
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Whether the value matches any XSS signature pattern
pub fn contains_xss_payload(value: &str) -> bool {
    XSS_SIGNATURES.iter().any(|re| re.is_match(value))
}

/// Whether the value matches any SQL injection signature pattern
pub fn contains_sql_injection(value: &str) -> bool {
    SQLI_SIGNATURES.iter().any(|re| re.is_match(value))
}

/// Inclusive range check
pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Whether a JSON object carries every required key
pub fn has_required_keys(value: &Value, keys: &[&str]) -> bool {
    match value.as_object() {
        Some(map) => keys.iter().all(|key| map.contains_key(*key)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_predicate() {
        assert!(is_valid_email("test@example.com"));
        assert!(!is_valid_email("invalid-email"));
    }

    #[test]
    fn test_url_predicate() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("redis://127.0.0.1:6379"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_uuid_predicate() {
        assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!is_valid_uuid("not-a-uuid"));
    }

    #[test]
    fn test_jwt_shape() {
        assert!(has_jwt_shape("aaa.bbb.ccc"));
        assert!(has_jwt_shape("aaa.bbb."));
        assert!(!has_jwt_shape("aaa.bbb"));
    }

    #[test]
    fn test_xss_and_sqli_signatures() {
        assert!(contains_xss_payload("<script>alert(1)</script>"));
        assert!(!contains_xss_payload("plain text"));
        assert!(contains_sql_injection("' OR 1=1--"));
        assert!(!contains_sql_injection("hello world"));
    }

    #[test]
    fn test_required_keys() {
        let value = json!({"id": 1, "email": "a@b.c"});
        assert!(has_required_keys(&value, &["id", "email"]));
        assert!(!has_required_keys(&value, &["id", "name"]));
        assert!(!has_required_keys(&json!([1, 2]), &["id"]));
    }

    #[test]
    fn test_range_predicate() {
        assert!(is_in_range(50.0, 0.0, 100.0));
        assert!(!is_in_range(101.0, 0.0, 100.0));
    }
}
