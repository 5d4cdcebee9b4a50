//! Sitemap endpoint

use crate::client::BreaseClient;
use crate::response::FetchResult;
use crate::urls;
use serde::{Deserialize, Serialize};

/// Sitemap API interface
#[derive(Clone)]
pub struct SitemapApi {
    client: BreaseClient,
}

impl SitemapApi {
    /// Create a new sitemap API interface
    pub(crate) fn new(client: BreaseClient) -> Self {
        Self { client }
    }

    /// Fetch the sitemap entries of a locale
    pub async fn entries(&self, locale: Option<&str>) -> FetchResult<Vec<SitemapEntry>> {
        let endpoint = urls::sitemap_url(self.client.config(), locale);
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/sitemap").cloned().unwrap_or_default())
            .await
    }
}

/// One sitemap entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Absolute URL of the page
    pub url: String,
    /// Last modification timestamp
    #[serde(default)]
    pub last_modified: Option<String>,
    /// Localized alternates of this page
    #[serde(default)]
    pub alternates: Vec<AlternateLink>,
}

/// A localized alternate of a sitemap entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateLink {
    /// Locale code of the alternate
    pub locale: String,
    /// Absolute URL of the alternate
    pub url: String,
}
