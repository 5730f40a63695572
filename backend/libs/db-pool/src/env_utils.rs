//! Environment variable parsing helpers shared by pool and service config.

use std::fmt::Display;
use std::str::FromStr;

/// Parse an environment variable, falling back to `default` when it is unset.
///
/// A variable that is set but does not parse is reported as an error rather
/// than silently replaced by the default.
pub fn parse_env_or<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

/// Read a string variable with a default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
