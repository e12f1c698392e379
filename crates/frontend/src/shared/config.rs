//! Startup configuration of the client
//!
//! Values are baked in at build time (`trunk build` passes the environment
//! through to `option_env!`). Parsing works on plain `Option<&str>` so tests
//! can feed values directly.

use thiserror::Error;

pub const ENDPOINT_VAR: &str = "PHISHING_API_ENDPOINT";
pub const TIMEOUT_VAR: &str = "PHISHING_API_TIMEOUT_MS";

/// Used when `PHISHING_API_TIMEOUT_MS` is not set
pub const DEFAULT_TIMEOUT_MS: u32 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} environment variable is not defined")]
    Missing { var: &'static str },

    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prediction endpoint, absolute URL or a path on the page origin
    pub endpoint: String,
    /// `None` disables the request timeout
    pub request_timeout_ms: Option<u32>,
}

impl AppConfig {
    /// Reads the values compiled into the bundle
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::parse(
            option_env!("PHISHING_API_ENDPOINT"),
            option_env!("PHISHING_API_TIMEOUT_MS"),
        )
    }

    pub fn parse(endpoint: Option<&str>, timeout_ms: Option<&str>) -> Result<Self, ConfigError> {
        let endpoint = endpoint
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(ConfigError::Missing { var: ENDPOINT_VAR })?;

        let is_absolute = endpoint.starts_with("http://") || endpoint.starts_with("https://");
        if !is_absolute && !endpoint.starts_with('/') {
            return Err(ConfigError::Invalid {
                var: ENDPOINT_VAR,
                value: endpoint.to_string(),
                reason: "expected an http(s):// URL or a path starting with '/'".to_string(),
            });
        }

        let request_timeout_ms = match timeout_ms.map(str::trim).filter(|t| !t.is_empty()) {
            None => Some(DEFAULT_TIMEOUT_MS),
            Some(raw) => {
                let millis: u32 = raw.parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::Invalid {
                        var: TIMEOUT_VAR,
                        value: raw.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                // 0 = wait forever
                (millis > 0).then_some(millis)
            }
        };

        Ok(Self {
            endpoint: endpoint.to_string(),
            request_timeout_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_endpoint_is_fatal() {
        assert_eq!(
            AppConfig::parse(None, None),
            Err(ConfigError::Missing { var: ENDPOINT_VAR })
        );
        assert_eq!(
            AppConfig::parse(Some("   "), None),
            Err(ConfigError::Missing { var: ENDPOINT_VAR })
        );
    }

    #[test]
    fn test_missing_endpoint_message_names_variable() {
        let err = AppConfig::parse(None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "PHISHING_API_ENDPOINT environment variable is not defined"
        );
    }

    #[test]
    fn test_absolute_and_relative_endpoints() {
        let config = AppConfig::parse(Some(" https://api.example.com/predict "), None).unwrap();
        assert_eq!(config.endpoint, "https://api.example.com/predict");
        assert_eq!(config.request_timeout_ms, Some(DEFAULT_TIMEOUT_MS));

        let config = AppConfig::parse(Some("/predict"), None).unwrap();
        assert_eq!(config.endpoint, "/predict");
    }

    #[test]
    fn test_rejects_endpoint_without_scheme() {
        let err = AppConfig::parse(Some("api.example.com/predict"), None).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ENDPOINT_VAR, .. }));
    }

    #[test]
    fn test_timeout_values() {
        let config = AppConfig::parse(Some("/predict"), Some("1500")).unwrap();
        assert_eq!(config.request_timeout_ms, Some(1500));

        let config = AppConfig::parse(Some("/predict"), Some("0")).unwrap();
        assert_eq!(config.request_timeout_ms, None);

        let err = AppConfig::parse(Some("/predict"), Some("soon")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: TIMEOUT_VAR, .. }));
    }
}
