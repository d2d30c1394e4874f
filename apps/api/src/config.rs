use thiserror::Error;

/// Default Cohere endpoint. Overridable so tests and staging can point elsewhere.
pub const DEFAULT_COHERE_BASE_URL: &str = "https://api.cohere.ai";

/// Startup configuration failures. Any of these is fatal: the service
/// refuses to start rather than fail on the first completion call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Completion service credential '{key}' is missing or blank")]
    MissingCredential { key: String },

    #[error("Environment variable '{key}' is invalid: {reason}")]
    Invalid { key: String, reason: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub cohere_api_key: String,
    pub cohere_base_url: String,
    pub completion_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cohere_api_key = lookup("COHERE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingCredential {
                key: "COHERE_API_KEY".to_string(),
            })?;

        Ok(Config {
            cohere_api_key,
            cohere_base_url: lookup("COHERE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_COHERE_BASE_URL.to_string()),
            completion_timeout_secs: parse_or(&lookup, "COMPLETION_TIMEOUT_SECS", 120)?,
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied_when_only_key_is_set() {
        let config = Config::from_lookup(lookup_from(&[("COHERE_API_KEY", "secret")])).unwrap();
        assert_eq!(config.cohere_api_key, "secret");
        assert_eq!(config.cohere_base_url, DEFAULT_COHERE_BASE_URL);
        assert_eq!(config.completion_timeout_secs, 120);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_credential_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "9000")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingCredential {
                key: "COHERE_API_KEY".to_string()
            }
        );
    }

    #[test]
    fn test_blank_credential_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("COHERE_API_KEY", "   ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { .. }));
    }

    #[test]
    fn test_invalid_port_is_reported_with_key() {
        let err = Config::from_lookup(lookup_from(&[
            ("COHERE_API_KEY", "secret"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, "PORT"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("COHERE_API_KEY", "secret"),
            ("COHERE_BASE_URL", "http://localhost:9999"),
            ("COMPLETION_TIMEOUT_SECS", "30"),
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.cohere_base_url, "http://localhost:9999");
        assert_eq!(config.completion_timeout_secs, 30);
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
    }
}
