//! Redirect table endpoint

use crate::client::BreaseClient;
use crate::response::FetchResult;
use crate::urls;
use serde::{Deserialize, Serialize};

/// Redirects API interface
#[derive(Clone)]
pub struct RedirectsApi {
    client: BreaseClient,
}

impl RedirectsApi {
    /// Create a new redirects API interface
    pub(crate) fn new(client: BreaseClient) -> Self {
        Self { client }
    }

    /// Fetch the full redirect table (global, not locale-scoped)
    pub async fn list(&self) -> FetchResult<Vec<Redirect>> {
        let endpoint = urls::redirects_url(self.client.config());
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/redirects").cloned().unwrap_or_default())
            .await
    }
}

/// One redirect rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    /// Source path
    pub source: String,
    /// Destination path or URL
    pub destination: String,
    /// HTTP status code: 301, 302, 307 or 308
    #[serde(rename = "type")]
    pub status: u16,
}

impl Redirect {
    /// Whether this redirect is permanent (301 or 308)
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self.status, 301 | 308)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_deserialize() {
        let json = r#"[
            {"source": "/old", "destination": "/new", "type": 301},
            {"source": "/tmp", "destination": "/elsewhere", "type": 307}
        ]"#;

        let redirects: Vec<Redirect> = serde_json::from_str(json).unwrap();
        assert_eq!(redirects.len(), 2);
        assert!(redirects[0].is_permanent());
        assert!(!redirects[1].is_permanent());
    }
}
