//! Property-based tests for the validator predicates

use proptest::prelude::*;
use sectester::assertions;

proptest! {
    #[test]
    fn simple_emails_are_accepted(
        local in "[a-z0-9]{1,16}",
        domain in "[a-z0-9]{1,16}",
        tld in "[a-z]{2,6}"
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(assertions::is_valid_email(&email));
    }

    #[test]
    fn strings_without_an_at_sign_are_rejected(value in "[a-z0-9.]{1,32}") {
        prop_assert!(!assertions::is_valid_email(&value));
    }

    #[test]
    fn lowercase_only_passwords_are_weak(password in "[a-z]{8,32}") {
        prop_assert!(!assertions::is_strong_password(&password));
    }

    #[test]
    fn mixed_class_passwords_are_strong(suffix in "[a-zA-Z0-9]{4,24}") {
        let password = format!("Aa1!{suffix}");
        prop_assert!(assertions::is_strong_password(&password));
    }

    #[test]
    fn every_uuid_rendering_is_accepted(bytes in any::<u128>()) {
        let uuid = uuid::Uuid::from_u128(bytes).to_string();
        prop_assert!(assertions::is_valid_uuid(&uuid));
    }

    #[test]
    fn three_segment_tokens_have_jwt_shape(
        header in "[A-Za-z0-9_-]{4,32}",
        payload in "[A-Za-z0-9_-]{4,64}",
        signature in "[A-Za-z0-9_-]{0,32}"
    ) {
        let token = format!("{header}.{payload}.{signature}");
        prop_assert!(assertions::has_jwt_shape(&token));
    }

    #[test]
    fn plain_words_carry_no_xss_signature(value in "[a-z ]{1,64}") {
        // No tag, scheme, or handler characters to match against
        prop_assert!(!assertions::contains_xss_payload(&value));
    }
}
