//! Rate limiting check
//!
//! Pure counting loop, no real timing: the limiter engages once the
//! request counter reaches the maximum, and the check is vulnerable only
//! when it never engages (attempts below the limit).

use crate::domain::check::{CheckError, CheckOptions, CheckResult};

const DEFAULT_ATTEMPTS: u32 = 100;
const DEFAULT_MAX_REQUESTS: u32 = 10;

pub async fn test_rate_limiting(options: &CheckOptions) -> Result<CheckResult, CheckError> {
    let mut result = CheckResult::secure("Rate limiting test completed");
    result.rate_limited = Some(false);
    result.blocked_after = Some(0);

    let attempts = options.attempts.unwrap_or(DEFAULT_ATTEMPTS);
    let max_requests = options.max_requests.unwrap_or(DEFAULT_MAX_REQUESTS);

    for i in 0..attempts {
        if i >= max_requests {
            result.rate_limited = Some(true);
            result.blocked_after = Some(max_requests);
            break;
        }
    }

    if result.rate_limited != Some(true) {
        result.vulnerable = true;
        result.message = "Rate limiting not properly implemented".to_string();
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_attempts_trip_the_limiter() {
        let result = test_rate_limiting(&CheckOptions::default()).await.unwrap();
        assert!(!result.vulnerable);
        assert_eq!(result.rate_limited, Some(true));
        assert_eq!(result.blocked_after, Some(10));
    }

    #[tokio::test]
    async fn test_attempts_below_limit_are_vulnerable() {
        let options = CheckOptions {
            attempts: Some(5),
            max_requests: Some(10),
            ..CheckOptions::default()
        };
        let result = test_rate_limiting(&options).await.unwrap();
        assert!(result.vulnerable);
        assert_eq!(result.rate_limited, Some(false));
        assert_eq!(result.blocked_after, Some(0));
    }

    #[tokio::test]
    async fn test_attempts_equal_to_limit_never_block() {
        // The counter must exceed the limit before the limiter engages
        let options = CheckOptions {
            attempts: Some(10),
            max_requests: Some(10),
            ..CheckOptions::default()
        };
        let result = test_rate_limiting(&options).await.unwrap();
        assert!(result.vulnerable);
    }
}
