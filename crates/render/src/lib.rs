//! Server-side rendering helpers for Brease content
//!
//! Takes the typed entities fetched by `brease-api-client` and turns them
//! into HTML: ordered page sections dispatched through a caller-supplied
//! renderer registry, responsive images from media variants, hardened
//! external links, and host-framework SEO metadata. Markup is built with
//! [maud](https://maud.lambda.xyz/), so everything interpolated from CMS
//! content is escaped by construction.
//!
//! # Example
//!
//! ```rust,no_run
//! use brease_render::sections::{render_page, SectionRegistry};
//! use maud::html;
//!
//! let registry = SectionRegistry::new().register("hero", |section| {
//!     let headline = section.elements["headline"].as_str().unwrap_or_default();
//!     html! { h1 { (headline) } }
//! });
//! # let page: brease_api_client::endpoints::pages::Page = todo!();
//! let markup = render_page(&page, &registry);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod image;
pub mod links;
pub mod metadata;
pub mod preview;
pub mod sections;

pub use image::{render_image, ImageOptions};
pub use links::{render_labeled_link, render_link};
pub use metadata::{page_metadata, PageMetadata, TwitterCard};
pub use preview::{render_page_preview, render_sections_preview};
pub use sections::{render_page, render_sections, SectionRegistry};
