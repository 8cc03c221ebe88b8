//! CSRF protection check
//!
//! The only check that inspects caller input: a form is considered
//! protected when it carries a `data-csrf-token` attribute or a
//! `csrf_token`/`_token` input. No form at all is vulnerable by default.

use crate::domain::check::{CheckError, CheckOptions, CheckResult, FormFixture};

pub async fn test_csrf_protection(options: &CheckOptions) -> Result<CheckResult, CheckError> {
    let mut result = CheckResult::secure("CSRF protection test completed");

    if !has_csrf_token(options.form.as_ref()) {
        result.vulnerable = true;
        result.message = "CSRF token not found".to_string();
    }

    Ok(result)
}

fn has_csrf_token(form: Option<&FormFixture>) -> bool {
    match form {
        Some(form) => {
            form.has_attribute("data-csrf-token")
                || form.has_input("csrf_token")
                || form.has_input("_token")
        }
        // No form provided: treat as unprotected
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_form_is_vulnerable() {
        let result = test_csrf_protection(&CheckOptions::default()).await.unwrap();
        assert!(result.vulnerable);
        assert_eq!(result.message, "CSRF token not found");
    }

    #[tokio::test]
    async fn test_form_with_token_attribute_is_secure() {
        let options = CheckOptions {
            form: Some(FormFixture::new().with_attribute("data-csrf-token")),
            ..CheckOptions::default()
        };
        let result = test_csrf_protection(&options).await.unwrap();
        assert!(!result.vulnerable);
    }

    #[tokio::test]
    async fn test_form_with_hidden_input_is_secure() {
        for input in ["csrf_token", "_token"] {
            let options = CheckOptions {
                form: Some(FormFixture::new().with_input(input)),
                ..CheckOptions::default()
            };
            let result = test_csrf_protection(&options).await.unwrap();
            assert!(!result.vulnerable, "input {input} should protect the form");
        }
    }

    #[tokio::test]
    async fn test_form_without_token_is_vulnerable() {
        let options = CheckOptions {
            form: Some(FormFixture::new().with_input("email")),
            ..CheckOptions::default()
        };
        let result = test_csrf_protection(&options).await.unwrap();
        assert!(result.vulnerable);
    }
}
