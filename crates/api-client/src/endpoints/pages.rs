//! Page endpoints

use crate::client::BreaseClient;
use crate::response::FetchResult;
use crate::types::{SeoMeta, Section};
use crate::urls;
use serde::{Deserialize, Serialize};

/// Pages API interface
#[derive(Clone)]
pub struct PagesApi {
    client: BreaseClient,
}

impl PagesApi {
    /// Create a new pages API interface
    pub(crate) fn new(client: BreaseClient) -> Self {
        Self { client }
    }

    /// Fetch a page by slug
    ///
    /// The slug may embed a locale prefix ("en/about"); when present it is
    /// stripped and wins over both the explicit `locale` and the configured
    /// default.
    pub async fn get(&self, slug: &str, locale: Option<&str>) -> FetchResult<Page> {
        let endpoint = urls::page_url(self.client.config(), slug, locale, false);
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/page").cloned().unwrap_or_default())
            .await
    }

    /// Fetch only the SEO fields of a page (`metaOnly=true`)
    pub async fn get_meta(&self, slug: &str, locale: Option<&str>) -> FetchResult<Page> {
        let endpoint = urls::page_url(self.client.config(), slug, locale, true);
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/page").cloned().unwrap_or_default())
            .await
    }

    /// Fetch the slugs of every page in a locale
    pub async fn list(&self, locale: Option<&str>) -> FetchResult<Vec<PageSummary>> {
        let endpoint = urls::pages_url(self.client.config(), locale);
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/pages").cloned().unwrap_or_default())
            .await
    }
}

/// A page with its ordered sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page uuid
    #[serde(default)]
    pub uuid: Option<String>,
    /// Editor-facing page name
    #[serde(default)]
    pub name: Option<String>,
    /// Slug, the page identity within its locale
    pub slug: String,
    /// Locale this snapshot was fetched for
    #[serde(default)]
    pub locale: Option<String>,
    /// SEO fields
    #[serde(default)]
    pub meta: Option<SeoMeta>,
    /// Ordered sections; array order is rendering order
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Page summary as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    /// Page uuid
    #[serde(default)]
    pub uuid: Option<String>,
    /// Editor-facing page name
    #[serde(default)]
    pub name: Option<String>,
    /// Slug
    pub slug: String,
    /// Last modification timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}
