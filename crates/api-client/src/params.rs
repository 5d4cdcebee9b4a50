//! Static-generation parameter helpers
//!
//! Derive route-parameter lists from bulk fetches for pre-rendering
//! pipelines. Both helpers fail closed: any underlying fetch failure yields
//! an empty list plus a logged diagnostic, never an error and never partial
//! results. A build that briefly cannot reach the CMS should produce no
//! pre-rendered routes rather than abort.

use crate::client::BreaseClient;
use crate::response::FetchResult;
use serde::Serialize;
use tracing::warn;

/// Route parameters for one pre-rendered page
///
/// The root page ("/") maps to an empty segment list so catch-all routes
/// receive an explicit parameter for the home route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Locale code
    pub locale: String,
    /// Slug split into path segments, empty for the root page
    pub slug: Vec<String>,
}

/// Split a slug into path segments, trimming slashes and dropping empties
pub(crate) fn slug_segments(slug: &str) -> Vec<String> {
    slug.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Enumerate `{locale, slug segments}` for every page in every locale
///
/// Fetches the locale list, then the page list per locale. Any failure
/// short-circuits to `[]`.
pub async fn generate_page_params(client: &BreaseClient) -> Vec<PageParams> {
    let locales = match client.locales().list().await {
        FetchResult::Success { data, .. } => data,
        FetchResult::Failure { error, status, .. } => {
            warn!(status, error = %error, "locale fetch failed, generating no page params");
            return Vec::new();
        }
    };

    let mut params = Vec::new();
    for locale in locales {
        match client.pages().list(Some(&locale.code)).await {
            FetchResult::Success { data, .. } => {
                for page in data {
                    params.push(PageParams {
                        locale: locale.code.clone(),
                        slug: slug_segments(&page.slug),
                    });
                }
            }
            FetchResult::Failure { error, status, .. } => {
                warn!(
                    locale = %locale.code,
                    status,
                    error = %error,
                    "page list fetch failed, generating no page params"
                );
                return Vec::new();
            }
        }
    }
    params
}

/// Enumerate `{locale, slug segments}` for every entry of one collection
///
/// Independent of [`generate_page_params`]; fails closed to `[]` on its own.
pub async fn generate_collection_params(
    client: &BreaseClient,
    collection_id: &str,
    locale: Option<&str>,
) -> Vec<PageParams> {
    let locale = locale
        .unwrap_or(&client.config().default_locale)
        .to_string();

    match client.collections().get(collection_id, Some(&locale)).await {
        FetchResult::Success { data, .. } => data
            .entries
            .into_iter()
            .map(|entry| PageParams {
                locale: locale.clone(),
                slug: slug_segments(&entry.slug),
            })
            .collect(),
        FetchResult::Failure { error, status, .. } => {
            warn!(
                collection = %collection_id,
                status,
                error = %error,
                "collection fetch failed, generating no entry params"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_trim_slashes_and_drop_empties() {
        assert_eq!(slug_segments("/about"), vec!["about"]);
        assert_eq!(slug_segments("blog/first-post/"), vec!["blog", "first-post"]);
        assert_eq!(slug_segments("//a//b//"), vec!["a", "b"]);
    }

    #[test]
    fn root_slug_yields_no_segments() {
        assert_eq!(slug_segments("/"), Vec::<String>::new());
        assert_eq!(slug_segments(""), Vec::<String>::new());
    }
}
