//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one resource kind of the
//! Brease API. Every operation composes an endpoint builder, the fetch
//! executor and a projection picking the relevant key out of the
//! `{"data": {...}}` envelope.
//!
//! | Module | Backend resource | Description |
//! |--------|-----------------|-------------|
//! | `site` | `site` | Site-level metadata |
//! | `pages` | `page`, `pages` | Pages and page lists |
//! | `collections` | `collections` | Collections and their entries |
//! | `navigations` | `navigations` | Navigation trees |
//! | `redirects` | `redirects` | Redirect table |
//! | `locales` | `locales` | Enabled locales |
//! | `sitemap` | `sitemap` | Sitemap entries |

pub mod collections;
pub mod locales;
pub mod navigations;
pub mod pages;
pub mod redirects;
pub mod site;
pub mod sitemap;

pub use collections::CollectionsApi;
pub use locales::LocalesApi;
pub use navigations::NavigationsApi;
pub use pages::PagesApi;
pub use redirects::RedirectsApi;
pub use site::SiteApi;
pub use sitemap::SitemapApi;
