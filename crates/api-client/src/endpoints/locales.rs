//! Locale list endpoint

use crate::client::BreaseClient;
use crate::response::FetchResult;
use crate::urls;
use serde::{Deserialize, Serialize};

/// Locales API interface
#[derive(Clone)]
pub struct LocalesApi {
    client: BreaseClient,
}

impl LocalesApi {
    /// Create a new locales API interface
    pub(crate) fn new(client: BreaseClient) -> Self {
        Self { client }
    }

    /// Fetch the locales enabled for the environment
    pub async fn list(&self) -> FetchResult<Vec<Locale>> {
        let endpoint = urls::locales_url(self.client.config());
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/locales").cloned().unwrap_or_default())
            .await
    }
}

/// An enabled locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Locale code ("en", "pt-BR")
    pub code: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Whether this is the environment's default locale
    #[serde(default)]
    pub default: bool,
}
