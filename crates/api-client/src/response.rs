//! Normalized per-request outcome
//!
//! Every public fetch operation resolves to a [`FetchResult`]: transport
//! errors, non-2xx statuses and undecodable bodies are all folded into the
//! [`FetchResult::Failure`] variant at the fetch boundary and never bubble
//! up as `Err`. Callers match on the variant before touching the payload.

/// Outcome of a single API request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult<T> {
    /// The request succeeded and the payload decoded
    Success {
        /// Decoded payload
        data: T,
        /// HTTP status code of the response
        status: u16,
    },
    /// The request failed at the transport, HTTP or decode stage
    Failure {
        /// Human-readable description of what went wrong
        error: String,
        /// HTTP status code, or 500 for transport/decode failures
        status: u16,
        /// The endpoint that was called, for diagnostics
        endpoint: Option<String>,
    },
}

impl<T> FetchResult<T> {
    /// Build a success outcome
    pub fn success(data: T, status: u16) -> Self {
        Self::Success { data, status }
    }

    /// Build a failure outcome
    pub fn failure(error: impl Into<String>, status: u16, endpoint: Option<String>) -> Self {
        Self::Failure {
            error: error.into(),
            status,
            endpoint,
        }
    }

    /// Whether this outcome carries data
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// HTTP status associated with the outcome
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Success { status, .. } | Self::Failure { status, .. } => *status,
        }
    }

    /// Extract the payload, discarding failure details
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Error message, if this is a failure
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// Map the success payload, preserving failure details unchanged
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        match self {
            Self::Success { data, status } => FetchResult::Success {
                data: f(data),
                status,
            },
            Self::Failure {
                error,
                status,
                endpoint,
            } => FetchResult::Failure {
                error,
                status,
                endpoint,
            },
        }
    }
}
