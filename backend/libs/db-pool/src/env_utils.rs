//! Environment variable parsing utilities
//!
//! Provides safe, ergonomic functions for parsing environment variables
//! with sensible defaults, eliminating the need for unwrap() calls.

use std::str::FromStr;

/// Parse an environment variable with a default fallback.
///
/// Missing and unparseable values both fall back to `default`.
///
/// # Example
/// ```ignore
/// let port: u16 = parse_env_with_default("PORT", 8080);
/// ```
pub fn parse_env_with_default<T: FromStr>(key: &str, default: T) -> T {
    parse_env_optional(key).unwrap_or(default)
}

/// Parse an environment variable, returning None if missing or invalid
pub fn parse_env_optional<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Parse an environment variable that may be absent but must be valid when set.
///
/// Returns `Ok(default)` when the variable is unset and an error naming the
/// variable when it is set to something that does not parse.
///
/// # Example
/// ```ignore
/// let page_size: i64 = parse_env_strict("FEED_PAGE_SIZE", 10)?;
/// ```
pub fn parse_env_strict<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("Failed to parse {}='{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[serial_test::serial]
    fn test_parse_env_with_default() {
        let result: u32 = parse_env_with_default("DB_POOL_TEST_MISSING_XYZ", 42);
        assert_eq!(result, 42);

        std::env::set_var("DB_POOL_TEST_PORT", "8080");
        let result: u16 = parse_env_with_default("DB_POOL_TEST_PORT", 3000);
        assert_eq!(result, 8080);

        std::env::set_var("DB_POOL_TEST_PORT", "eighty");
        let result: u16 = parse_env_with_default("DB_POOL_TEST_PORT", 3000);
        assert_eq!(result, 3000);
        std::env::remove_var("DB_POOL_TEST_PORT");
    }

    #[test]
    #[serial_test::serial]
    fn test_parse_env_optional_trims_whitespace() {
        assert_eq!(parse_env_optional::<u32>("DB_POOL_TEST_MISSING_XYZ"), None);

        std::env::set_var("DB_POOL_TEST_OPT", " 123 ");
        assert_eq!(parse_env_optional::<u32>("DB_POOL_TEST_OPT"), Some(123));
        std::env::remove_var("DB_POOL_TEST_OPT");
    }

    #[test]
    #[serial_test::serial]
    fn test_parse_env_strict() {
        assert_eq!(parse_env_strict("DB_POOL_TEST_MISSING_XYZ", 7u64), Ok(7));

        std::env::set_var("DB_POOL_TEST_STRICT", "not_a_number");
        let err = parse_env_strict::<u64>("DB_POOL_TEST_STRICT", 7).unwrap_err();
        assert!(err.contains("DB_POOL_TEST_STRICT"));

        std::env::set_var("DB_POOL_TEST_STRICT", "12");
        assert_eq!(parse_env_strict("DB_POOL_TEST_STRICT", 7u64), Ok(12));
        std::env::remove_var("DB_POOL_TEST_STRICT");
    }
}
