//! Shared-content aggregation
//!
//! A layout typically needs the same handful of navigations and collections
//! on every page. [`SharedContent::load`] fetches them all concurrently and
//! assembles a keyed bundle the host application threads through its render
//! tree. Individual fetch failures are dropped with a logged diagnostic;
//! partial availability beats all-or-nothing failure for layout chrome.

use crate::client::BreaseClient;
use crate::endpoints::collections::Collection;
use crate::endpoints::navigations::Navigation;
use crate::error::{ApiError, ApiResult};
use crate::response::FetchResult;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::task::JoinSet;
use tracing::warn;

enum Loaded {
    Navigation(String, FetchResult<Navigation>),
    Collection(String, FetchResult<Collection>),
}

/// A bundle of navigations and collections fetched once per request
#[derive(Debug, Clone)]
pub struct SharedContent {
    locale: String,
    navigations: HashMap<String, Navigation>,
    collections: HashMap<String, Collection>,
    extra: Map<String, Value>,
}

impl SharedContent {
    /// Fetch every requested navigation and collection concurrently
    ///
    /// `navigations` and `collections` pair a caller-chosen key with the
    /// backend id to fetch. All requests are issued without waiting on each
    /// other and joined without fail-fast; a failed fetch drops its entry
    /// from the bundle with a `warn!` and does not affect the rest.
    pub async fn load(
        client: &BreaseClient,
        locale: &str,
        navigations: &[(&str, &str)],
        collections: &[(&str, &str)],
    ) -> Self {
        let mut tasks = JoinSet::new();

        for (key, id) in navigations {
            let client = client.clone();
            let key = (*key).to_string();
            let id = (*id).to_string();
            let locale = locale.to_string();
            tasks.spawn(async move {
                let result = client.navigations().get(&id, Some(&locale)).await;
                Loaded::Navigation(key, result)
            });
        }
        for (key, id) in collections {
            let client = client.clone();
            let key = (*key).to_string();
            let id = (*id).to_string();
            let locale = locale.to_string();
            tasks.spawn(async move {
                let result = client.collections().get(&id, Some(&locale)).await;
                Loaded::Collection(key, result)
            });
        }

        let mut bundle = Self {
            locale: locale.to_string(),
            navigations: HashMap::new(),
            collections: HashMap::new(),
            extra: Map::new(),
        };

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Loaded::Navigation(key, FetchResult::Success { data, .. })) => {
                    bundle.navigations.insert(key, data);
                }
                Ok(Loaded::Navigation(key, FetchResult::Failure { error, status, .. })) => {
                    warn!(key = %key, status, error = %error, "dropping navigation from shared content");
                }
                Ok(Loaded::Collection(key, FetchResult::Success { data, .. })) => {
                    bundle.collections.insert(key, data);
                }
                Ok(Loaded::Collection(key, FetchResult::Failure { error, status, .. })) => {
                    warn!(key = %key, status, error = %error, "dropping collection from shared content");
                }
                Err(e) => {
                    warn!(error = %e, "shared content fetch task failed to join");
                }
            }
        }

        bundle
    }

    /// The locale this bundle was loaded for
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a navigation by its caller-chosen key
    ///
    /// Asking for a key that was never registered at load time is a usage
    /// contract violation and returns [`ApiError::ContentKey`]; a key that
    /// was registered but whose fetch failed behaves the same way, since the
    /// entry was dropped from the bundle.
    pub fn navigation(&self, key: &str) -> ApiResult<&Navigation> {
        self.navigations.get(key).ok_or_else(|| ApiError::ContentKey {
            kind: "navigation",
            key: key.to_string(),
        })
    }

    /// Look up a collection by its caller-chosen key
    pub fn collection(&self, key: &str) -> ApiResult<&Collection> {
        self.collections.get(key).ok_or_else(|| ApiError::ContentKey {
            kind: "collection",
            key: key.to_string(),
        })
    }

    /// Number of navigations that survived loading
    #[must_use]
    pub fn navigation_count(&self) -> usize {
        self.navigations.len()
    }

    /// Number of collections that survived loading
    #[must_use]
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    /// Attach a caller-supplied extra value to the bundle
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read back a caller-supplied extra value
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
