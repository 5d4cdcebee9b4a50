//! Collection endpoints

use crate::client::BreaseClient;
use crate::response::FetchResult;
use crate::urls;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Collections API interface
#[derive(Clone)]
pub struct CollectionsApi {
    client: BreaseClient,
}

impl CollectionsApi {
    /// Create a new collections API interface
    pub(crate) fn new(client: BreaseClient) -> Self {
        Self { client }
    }

    /// Fetch a collection with its ordered entries
    pub async fn get(&self, collection_id: &str, locale: Option<&str>) -> FetchResult<Collection> {
        let endpoint = urls::collection_url(self.client.config(), collection_id, locale);
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/collection").cloned().unwrap_or_default())
            .await
    }

    /// Fetch a single entry, addressed by slug or uuid
    pub async fn entry(
        &self,
        collection_id: &str,
        slug_or_id: &str,
        locale: Option<&str>,
    ) -> FetchResult<CollectionEntry> {
        let endpoint = urls::entry_url(self.client.config(), collection_id, slug_or_id, locale);
        self.client
            .fetch(&endpoint, |v| v.pointer("/data/entry").cloned().unwrap_or_default())
            .await
    }
}

/// A collection and its entries, in backend order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection uuid
    #[serde(default)]
    pub uuid: Option<String>,
    /// Collection name
    #[serde(default)]
    pub name: Option<String>,
    /// Collection slug
    #[serde(default)]
    pub slug: Option<String>,
    /// Ordered entries
    #[serde(default)]
    pub entries: Vec<CollectionEntry>,
}

/// A single collection entry
///
/// Entry fields are editor-defined per collection, so `elements` stays an
/// open bag like section elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionEntry {
    /// Entry uuid
    #[serde(default)]
    pub uuid: Option<String>,
    /// Slug, the entry identity within its locale
    pub slug: String,
    /// Editor-facing name
    #[serde(default)]
    pub name: Option<String>,
    /// Locale this snapshot was fetched for
    #[serde(default)]
    pub locale: Option<String>,
    /// Open map of field name to field value
    #[serde(default)]
    pub elements: Map<String, Value>,
}
