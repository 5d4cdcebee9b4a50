//! Error types for the API client

use thiserror::Error;

/// Result type alias for fallible SDK operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Per-request transport and HTTP failures are *not* represented here: the
/// fetch layer folds them into [`crate::response::FetchResult::Failure`] so
/// callers branch on data instead of catching errors. This enum covers the
/// cases that are genuinely exceptional: bad configuration, a client that
/// could not be constructed, or programmer misuse of the shared-content
/// bundle.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Underlying HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Request(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more required environment variables are unset
    #[error("Missing environment variables: {0}")]
    MissingEnv(String),

    /// A shared-content key was requested that was never registered
    #[error("No {kind} registered under key '{key}' in this content bundle")]
    ContentKey {
        /// Kind of content ("navigation" or "collection")
        kind: &'static str,
        /// The key that was looked up
        key: String,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing-environment error from the list of unset variables
    pub fn missing_env(vars: &[&str]) -> Self {
        Self::MissingEnv(vars.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_lists_every_variable() {
        let err = ApiError::missing_env(&["BREASE_TOKEN", "BREASE_ENVIRONMENT"]);
        let msg = err.to_string();
        assert!(msg.contains("BREASE_TOKEN"));
        assert!(msg.contains("BREASE_ENVIRONMENT"));
    }

    #[test]
    fn content_key_error_names_kind_and_key() {
        let err = ApiError::ContentKey {
            kind: "navigation",
            key: "header".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No navigation registered under key 'header' in this content bundle"
        );
    }
}
