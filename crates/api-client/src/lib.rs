//! Typed async client for the Brease headless CMS API
//!
//! This crate fetches structured content (pages, collections, navigations,
//! redirects, site metadata) from a Brease environment over HTTP and
//! normalizes every response into a typed result.
//!
//! # Features
//!
//! - **Environment-based configuration**: resolved once per process from
//!   `BREASE_*` variables and memoized
//! - **Normalized outcomes**: transport and HTTP failures fold into
//!   [`FetchResult::Failure`] instead of erroring across the call boundary
//! - **Static-generation helpers**: derive route parameters from bulk
//!   fetches, failing closed on upstream trouble
//! - **Shared-content bundles**: fan out navigation/collection fetches
//!   concurrently and hand the render tree one keyed bundle
//!
//! There are intentionally no retries, no backoff and no caching: each call
//! is a single GET with a cache-control revalidation hint, and request-level
//! caching is delegated to the host framework.
//!
//! # Example
//!
//! ```rust,no_run
//! use brease_api_client::{BreaseClient, ClientConfig, FetchResult};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://api.brease.io/v1", "token", "prod", "en");
//!     let client = BreaseClient::with_config(config)?;
//!
//!     match client.pages().get("en/about", None).await {
//!         FetchResult::Success { data, .. } => println!("{} sections", data.sections.len()),
//!         FetchResult::Failure { error, status, .. } => eprintln!("{status}: {error}"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod content;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod response;
pub mod types;
pub mod urls;

pub use client::BreaseClient;
pub use config::ClientConfig;
pub use content::SharedContent;
pub use error::{ApiError, ApiResult};
pub use response::FetchResult;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::BreaseClient;
    pub use crate::config::ClientConfig;
    pub use crate::content::SharedContent;
    pub use crate::endpoints::{
        CollectionsApi, LocalesApi, NavigationsApi, PagesApi, RedirectsApi, SiteApi, SitemapApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::params::{generate_collection_params, generate_page_params, PageParams};
    pub use crate::response::FetchResult;
    pub use crate::types::{Link, Media, MediaVariant, Section, SeoMeta};
}
