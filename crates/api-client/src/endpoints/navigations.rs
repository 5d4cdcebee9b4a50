//! Navigation endpoints

use crate::client::BreaseClient;
use crate::response::FetchResult;
use crate::urls;
use serde::{Deserialize, Serialize};

/// Navigations API interface
#[derive(Clone)]
pub struct NavigationsApi {
    client: BreaseClient,
}

impl NavigationsApi {
    /// Create a new navigations API interface
    pub(crate) fn new(client: BreaseClient) -> Self {
        Self { client }
    }

    /// Fetch a navigation tree by id
    pub async fn get(&self, navigation_id: &str, locale: Option<&str>) -> FetchResult<Navigation> {
        let endpoint = urls::navigation_url(self.client.config(), navigation_id, locale);
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/navigation").cloned().unwrap_or_default())
            .await
    }
}

/// A navigation tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
    /// Navigation uuid
    pub uuid: String,
    /// Navigation name
    pub name: String,
    /// Editor-facing description
    #[serde(default)]
    pub description: Option<String>,
    /// Top-level items, in display order
    #[serde(default)]
    pub items: Vec<NavigationItem>,
}

/// One navigation item, optionally nesting children
///
/// Exactly one of `target` (internal page reference) or `url` (external
/// address) is meaningful, selected by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Item uuid
    #[serde(default)]
    pub uuid: Option<String>,
    /// Visible label
    #[serde(default)]
    pub label: Option<String>,
    /// Item type ("internal" or "external")
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// External URL
    #[serde(default)]
    pub url: Option<String>,
    /// Internal page target
    #[serde(default)]
    pub target: Option<PageTarget>,
    /// Nested child items
    #[serde(default)]
    pub items: Vec<NavigationItem>,
}

/// Reference to an internal page from a navigation item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTarget {
    /// Target page slug
    pub slug: String,
    /// Target page name
    #[serde(default)]
    pub name: Option<String>,
    /// Target page uuid
    #[serde(default)]
    pub uuid: Option<String>,
}
