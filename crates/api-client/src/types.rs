//! Wire shapes shared across resources
//!
//! Everything here is an immutable snapshot decoded from a response body.
//! Section element payloads are intentionally loose: the backend lets
//! editors attach arbitrary fields per section type, so `elements` stays an
//! open key-value bag and strong typing is deferred to whoever renders the
//! section.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Fixed ordering of media variant size tags, smallest first
pub const VARIANT_ORDER: [&str; 7] = ["sm", "md", "lg", "xl", "2xl", "hd", "original"];

/// One ordered content block of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section uuid, stable across edits
    pub uuid: String,
    /// Uuid of the page/section association
    #[serde(default)]
    pub page_section_uuid: Option<String>,
    /// Section type, the dispatch key for rendering
    #[serde(rename = "type")]
    pub kind: String,
    /// Editor-facing name
    #[serde(default)]
    pub name: Option<String>,
    /// Open map of field name to field value
    #[serde(default)]
    pub elements: Map<String, Value>,
}

/// A media object with optional pre-generated size variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Path of the original asset
    pub path: String,
    /// Alt text
    #[serde(default)]
    pub alt: Option<String>,
    /// Native width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Native height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// Asset name
    #[serde(default)]
    pub name: Option<String>,
    /// Size-tag to variant descriptor ("sm".."original")
    #[serde(default)]
    pub variants: HashMap<String, MediaVariant>,
}

/// A single pre-generated media variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaVariant {
    /// Path of the variant asset
    pub path: String,
    /// Variant width in pixels
    pub width: u32,
    /// Variant height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

impl Media {
    /// Look up a variant by its size tag
    #[must_use]
    pub fn variant(&self, tag: &str) -> Option<&MediaVariant> {
        self.variants.get(tag)
    }

    /// The variant with the greatest width, if any exist
    #[must_use]
    pub fn widest_variant(&self) -> Option<&MediaVariant> {
        self.variants.values().max_by_key(|v| v.width)
    }

    /// Variants in the fixed size-tag order, skipping absent tags
    pub fn ordered_variants(&self) -> impl Iterator<Item = (&'static str, &MediaVariant)> {
        VARIANT_ORDER
            .iter()
            .filter_map(|tag| self.variants.get(*tag).map(|v| (*tag, v)))
    }
}

/// SEO fields attached to a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoMeta {
    /// Explicit SEO title
    #[serde(default)]
    pub title: Option<String>,
    /// Meta description
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical URL
    #[serde(default)]
    pub canonical_url: Option<String>,
    /// Whether search engines may index the page; `false` emits a
    /// noindex/nofollow robots directive
    #[serde(default)]
    pub indexing: Option<bool>,
    /// Open Graph overrides
    #[serde(default)]
    pub og: Option<OgMeta>,
    /// Twitter Card overrides
    #[serde(default)]
    pub twitter: Option<TwitterMeta>,
}

/// Open Graph block of a page's SEO fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OgMeta {
    /// og:title override
    #[serde(default)]
    pub title: Option<String>,
    /// og:description override
    #[serde(default)]
    pub description: Option<String>,
    /// og:image asset
    #[serde(default)]
    pub image: Option<Media>,
    /// og:url override
    #[serde(default)]
    pub url: Option<String>,
}

/// Twitter Card block of a page's SEO fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwitterMeta {
    /// Raw card type as delivered by the backend
    #[serde(default)]
    pub card: Option<String>,
    /// twitter:title override
    #[serde(default)]
    pub title: Option<String>,
    /// twitter:description override
    #[serde(default)]
    pub description: Option<String>,
    /// twitter:image asset
    #[serde(default)]
    pub image: Option<Media>,
}

/// A link field as it appears inside section elements and navigation items
///
/// `is_external` is authored data, never inferred from the URL shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Visible label
    #[serde(default)]
    pub label: Option<String>,
    /// External URL, meaningful when `is_external` is set
    #[serde(default)]
    pub url: Option<String>,
    /// Internal path, meaningful when `is_external` is unset
    #[serde(default)]
    pub path: Option<String>,
    /// Whether the link leaves the site
    #[serde(rename = "isExternal", default)]
    pub is_external: bool,
}

impl Link {
    /// The href this link resolves to, external URL or internal path
    #[must_use]
    pub fn href(&self) -> &str {
        if self.is_external {
            self.url.as_deref().unwrap_or("#")
        } else {
            self.path.as_deref().or(self.url.as_deref()).unwrap_or("#")
        }
    }
}
