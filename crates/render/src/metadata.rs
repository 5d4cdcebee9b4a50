//! SEO metadata generation
//!
//! Maps a fetched page's SEO fields to the host framework's metadata
//! schema. Generation never aborts rendering: when the underlying page
//! fetch fails, [`page_metadata`] logs a diagnostic and hands back an empty
//! [`PageMetadata`].

use brease_api_client::endpoints::pages::Page;
use brease_api_client::response::FetchResult;
use brease_api_client::types::SeoMeta;
use brease_api_client::BreaseClient;
use serde::Serialize;
use tracing::warn;

/// Twitter card types the backend may deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    /// Standard summary card
    Summary,
    /// Summary card with a large image
    SummaryLargeImage,
    /// Player card
    Player,
    /// App card
    App,
}

impl TwitterCard {
    /// Cast a raw card-type string; unknown values fall back to `Summary`
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("summary_large_image") => Self::SummaryLargeImage,
            Some("player") => Self::Player,
            Some("app") => Self::App,
            _ => Self::Summary,
        }
    }
}

/// Robots directives; only emitted when indexing is disabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Robots {
    /// Whether search engines may index the page
    pub index: bool,
    /// Whether search engines may follow links on the page
    pub follow: bool,
}

/// Open Graph metadata block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpenGraph {
    /// og:title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// og:description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// og:image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// og:url
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Twitter Card metadata block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterBlock {
    /// Card type
    pub card: TwitterCard,
    /// twitter:title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// twitter:description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// twitter:image path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Host-framework metadata for one page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageMetadata {
    /// Document title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    /// Robots override, present only when indexing is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
    /// Open Graph block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    /// Twitter Card block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterBlock>,
}

impl PageMetadata {
    /// Map a fetched page's SEO fields into the metadata schema
    ///
    /// Fallback chains: explicit SEO title → page name → absent; OG and
    /// Twitter title/description fall back to the corresponding meta field,
    /// then the page name. Robots is set to noindex/nofollow exactly when
    /// the page's `indexing` flag is false.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        let meta = page.meta.clone().unwrap_or_default();
        let title = meta.title.clone().or_else(|| page.name.clone());

        let robots = (meta.indexing == Some(false)).then_some(Robots {
            index: false,
            follow: false,
        });

        Self {
            title: title.clone(),
            description: meta.description.clone(),
            canonical_url: meta.canonical_url.clone(),
            robots,
            open_graph: open_graph_block(&meta, title.as_deref()),
            twitter: twitter_block(&meta, title.as_deref()),
        }
    }
}

fn open_graph_block(meta: &SeoMeta, title: Option<&str>) -> Option<OpenGraph> {
    let og = meta.og.clone().unwrap_or_default();
    let block = OpenGraph {
        title: og.title.or_else(|| title.map(str::to_string)),
        description: og.description.or_else(|| meta.description.clone()),
        image: og.image.map(|media| media.path),
        url: og.url.or_else(|| meta.canonical_url.clone()),
    };
    (block != OpenGraph::default()).then_some(block)
}

fn twitter_block(meta: &SeoMeta, title: Option<&str>) -> Option<TwitterBlock> {
    let twitter = meta.twitter.clone().unwrap_or_default();
    let has_any = twitter.card.is_some()
        || twitter.title.is_some()
        || twitter.description.is_some()
        || twitter.image.is_some()
        || title.is_some()
        || meta.description.is_some();

    has_any.then(|| TwitterBlock {
        card: TwitterCard::from_raw(twitter.card.as_deref()),
        title: twitter.title.or_else(|| title.map(str::to_string)),
        description: twitter.description.or_else(|| meta.description.clone()),
        image: twitter.image.map(|media| media.path),
    })
}

/// Fetch a page's SEO fields and map them, degrading to empty on failure
///
/// SEO metadata generation must never abort page rendering, so any fetch
/// failure yields `PageMetadata::default()` plus a logged diagnostic.
pub async fn page_metadata(
    client: &BreaseClient,
    slug: &str,
    locale: Option<&str>,
) -> PageMetadata {
    match client.pages().get_meta(slug, locale).await {
        FetchResult::Success { data, .. } => PageMetadata::from_page(&data),
        FetchResult::Failure { error, status, .. } => {
            warn!(
                slug = %slug,
                status,
                error = %error,
                "page metadata fetch failed, emitting empty metadata"
            );
            PageMetadata::default()
        }
    }
}
