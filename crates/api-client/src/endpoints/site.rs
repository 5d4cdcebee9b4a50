//! Site metadata endpoint

use crate::client::BreaseClient;
use crate::response::FetchResult;
use crate::types::Media;
use crate::urls;
use serde::{Deserialize, Serialize};

/// Site API interface
#[derive(Clone)]
pub struct SiteApi {
    client: BreaseClient,
}

impl SiteApi {
    /// Create a new site API interface
    pub(crate) fn new(client: BreaseClient) -> Self {
        Self { client }
    }

    /// Fetch site-level metadata
    pub async fn get(&self, locale: Option<&str>) -> FetchResult<Site> {
        let endpoint = urls::site_url(self.client.config(), locale);
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/site").cloned().unwrap_or_default())
            .await
    }
}

/// Site-level metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Site name
    pub name: String,
    /// Site description
    #[serde(default)]
    pub description: Option<String>,
    /// Primary domain the site is served from
    #[serde(default)]
    pub domain: Option<String>,
    /// Favicon asset
    #[serde(default)]
    pub favicon: Option<Media>,
}
