//! Configuration for the Brease API client
//!
//! Environment-driven, resolved once per process and memoized.

use crate::error::{ApiError, ApiResult};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::env;

/// Default revalidation window handed to the backend as a cache hint
pub const DEFAULT_REVALIDATE_SECS: u64 = 30;

/// Environment variable holding the API base URL
pub const ENV_API_URL: &str = "BREASE_API_URL";
/// Environment variable holding the bearer token
pub const ENV_TOKEN: &str = "BREASE_TOKEN";
/// Environment variable holding the environment id
pub const ENV_ENVIRONMENT: &str = "BREASE_ENVIRONMENT";
/// Environment variable holding the default locale
pub const ENV_DEFAULT_LOCALE: &str = "BREASE_DEFAULT_LOCALE";
/// Environment variable holding the revalidation window in seconds
pub const ENV_REVALIDATE_SECS: &str = "BREASE_REVALIDATE_SECS";

static GLOBAL: OnceCell<ClientConfig> = OnceCell::new();

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Brease API (e.g. `https://api.brease.io/v1`)
    pub api_url: String,
    /// Bearer token for the environment
    pub token: String,
    /// Environment id all requests are scoped to
    pub environment: String,
    /// Locale used when a call does not specify one
    pub default_locale: String,
    /// Cache-control hint (seconds) attached to every request
    pub revalidate_secs: u64,
}

impl ClientConfig {
    /// Create a configuration from explicit values
    pub fn new(
        api_url: impl Into<String>,
        token: impl Into<String>,
        environment: impl Into<String>,
        default_locale: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            token: token.into(),
            environment: environment.into(),
            default_locale: default_locale.into(),
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following:
    /// - `BREASE_API_URL`: base URL of the API (required)
    /// - `BREASE_TOKEN`: bearer token (required)
    /// - `BREASE_ENVIRONMENT`: environment id (required)
    /// - `BREASE_DEFAULT_LOCALE`: fallback locale (required)
    /// - `BREASE_REVALIDATE_SECS`: cache hint, defaults to 30
    ///
    /// When several required variables are unset, the error names every one
    /// of them so a misconfigured deployment is fixed in a single pass.
    pub fn from_env() -> ApiResult<Self> {
        Self::resolve(|name| env::var(name).ok())
    }

    /// Resolve the process-wide configuration, reading the environment on
    /// first access and memoizing the result for the process lifetime.
    ///
    /// Environment changes after the first successful resolution have no
    /// effect. This is a documented limitation, not a bug.
    pub fn global() -> ApiResult<&'static Self> {
        GLOBAL.get_or_try_init(Self::from_env)
    }

    /// Build a configuration from an arbitrary variable lookup
    ///
    /// `from_env` delegates here; tests exercise the resolution rules
    /// without mutating process environment.
    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> ApiResult<Self> {
        let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_url = read(ENV_API_URL);
        let token = read(ENV_TOKEN);
        let environment = read(ENV_ENVIRONMENT);
        let default_locale = read(ENV_DEFAULT_LOCALE);

        let mut missing = Vec::new();
        if api_url.is_none() {
            missing.push(ENV_API_URL);
        }
        if token.is_none() {
            missing.push(ENV_TOKEN);
        }
        if environment.is_none() {
            missing.push(ENV_ENVIRONMENT);
        }
        if default_locale.is_none() {
            missing.push(ENV_DEFAULT_LOCALE);
        }
        if !missing.is_empty() {
            return Err(ApiError::missing_env(&missing));
        }

        let revalidate_secs = lookup(ENV_REVALIDATE_SECS)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_REVALIDATE_SECS);

        let config = Self {
            api_url: api_url.unwrap_or_default(),
            token: token.unwrap_or_default(),
            environment: environment.unwrap_or_default(),
            default_locale: default_locale.unwrap_or_default(),
            revalidate_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set the default locale
    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Builder-style method to set the revalidation window
    #[must_use]
    pub fn with_revalidate_secs(mut self, secs: u64) -> Self {
        self.revalidate_secs = secs;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.api_url.is_empty() {
            return Err(ApiError::config("api_url cannot be empty"));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ApiError::config(
                "api_url must start with http:// or https://",
            ));
        }
        if self.token.is_empty() {
            return Err(ApiError::config("token cannot be empty"));
        }
        if self.environment.is_empty() {
            return Err(ApiError::config("environment cannot be empty"));
        }
        if self.default_locale.is_empty() {
            return Err(ApiError::config("default_locale cannot be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        vars(&[
            (ENV_API_URL, "https://api.brease.io/v1"),
            (ENV_TOKEN, "secret"),
            (ENV_ENVIRONMENT, "prod"),
            (ENV_DEFAULT_LOCALE, "en"),
        ])
    }

    #[test]
    fn resolves_from_complete_environment() {
        let env = full_env();
        let config = ClientConfig::resolve(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.api_url, "https://api.brease.io/v1");
        assert_eq!(config.environment, "prod");
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.revalidate_secs, DEFAULT_REVALIDATE_SECS);
    }

    #[test]
    fn reports_every_missing_variable_at_once() {
        let env = vars(&[(ENV_API_URL, "https://api.brease.io/v1")]);
        let err = ClientConfig::resolve(|name| env.get(name).cloned()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(ENV_TOKEN));
        assert!(msg.contains(ENV_ENVIRONMENT));
        assert!(msg.contains(ENV_DEFAULT_LOCALE));
        assert!(!msg.contains(ENV_API_URL));
    }

    #[test]
    fn empty_values_count_as_missing() {
        let mut env = full_env();
        env.insert(ENV_TOKEN.to_string(), String::new());
        let err = ClientConfig::resolve(|name| env.get(name).cloned()).unwrap_err();
        assert!(err.to_string().contains(ENV_TOKEN));
    }

    #[test]
    fn revalidate_defaults_when_absent_or_non_numeric() {
        let mut env = full_env();
        env.insert(ENV_REVALIDATE_SECS.to_string(), "not-a-number".to_string());
        let config = ClientConfig::resolve(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.revalidate_secs, DEFAULT_REVALIDATE_SECS);

        env.insert(ENV_REVALIDATE_SECS.to_string(), "120".to_string());
        let config = ClientConfig::resolve(|name| env.get(name).cloned()).unwrap();
        assert_eq!(config.revalidate_secs, 120);
    }

    #[test]
    fn validation_rejects_non_http_urls() {
        let config = ClientConfig::new("ftp://api.brease.io", "t", "prod", "en");
        assert!(config.validate().is_err());

        let config = ClientConfig::new("https://api.brease.io/v1", "t", "prod", "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = ClientConfig::new("https://api.brease.io/v1", "t", "prod", "en")
            .with_default_locale("fr")
            .with_revalidate_secs(60);
        assert_eq!(config.default_locale, "fr");
        assert_eq!(config.revalidate_secs, 60);
    }
}
