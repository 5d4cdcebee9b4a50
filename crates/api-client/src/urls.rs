//! Endpoint builders
//!
//! Pure string-building functions mapping (resource kind, identifiers,
//! locale) to a fully qualified request URL. Nothing here performs I/O; the
//! fetch layer consumes the built URLs verbatim, which keeps them trivially
//! round-trippable in tests.

use crate::config::ClientConfig;
use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed pattern for a locale path prefix: a two-letter language code,
/// optionally followed by a hyphen and a two-letter region ("en", "pt-br").
static LOCALE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2}(-[a-zA-Z]{2})?$").expect("locale pattern is valid"));

/// Base path all environment-scoped endpoints hang off
fn environment_base(config: &ClientConfig) -> String {
    format!(
        "{}/environments/{}",
        config.api_url.trim_end_matches('/'),
        config.environment
    )
}

fn resolve_locale<'a>(config: &'a ClientConfig, locale: Option<&'a str>) -> &'a str {
    locale.unwrap_or(&config.default_locale)
}

/// Enforce a leading slash on a page slug
pub fn normalize_slug(slug: &str) -> String {
    if slug.starts_with('/') {
        slug.to_string()
    } else {
        format!("/{slug}")
    }
}

/// Detect and strip a locale prefix embedded in a combined slug string
///
/// `"en/about"` splits into `(Some("en"), "about")`; a bare `"about"` has no
/// prefix and comes back unchanged. The first path segment counts as a
/// locale when it matches the fixed two-letter pattern or equals the
/// configured default locale exactly.
pub fn split_locale_slug<'a>(slug: &'a str, default_locale: &str) -> (Option<&'a str>, &'a str) {
    let trimmed = slug.trim_start_matches('/');
    let (head, rest) = match trimmed.split_once('/') {
        Some((head, rest)) => (head, rest),
        None => (trimmed, ""),
    };

    if LOCALE_PREFIX.is_match(head) || head == default_locale {
        (Some(head), rest.trim_start_matches('/'))
    } else {
        (None, trimmed)
    }
}

/// URL for the site metadata resource
pub fn site_url(config: &ClientConfig, locale: Option<&str>) -> String {
    format!(
        "{}/site?locale={}",
        environment_base(config),
        resolve_locale(config, locale)
    )
}

/// URL for a single page
///
/// The slug may carry an embedded locale prefix; when present it is
/// stripped and takes precedence over both the explicit override and the
/// configured default.
pub fn page_url(config: &ClientConfig, slug: &str, locale: Option<&str>, meta_only: bool) -> String {
    let (detected, bare) = split_locale_slug(slug, &config.default_locale);
    let locale = detected.unwrap_or_else(|| resolve_locale(config, locale));
    let mut url = format!(
        "{}/page?slug={}&locale={}",
        environment_base(config),
        normalize_slug(bare),
        locale
    );
    if meta_only {
        url.push_str("&metaOnly=true");
    }
    url
}

/// URL for the page list of a locale
pub fn pages_url(config: &ClientConfig, locale: Option<&str>) -> String {
    format!(
        "{}/pages?locale={}",
        environment_base(config),
        resolve_locale(config, locale)
    )
}

/// URL for a collection with its entries
pub fn collection_url(config: &ClientConfig, collection_id: &str, locale: Option<&str>) -> String {
    format!(
        "{}/collections/{}?locale={}",
        environment_base(config),
        collection_id,
        resolve_locale(config, locale)
    )
}

/// URL for a single collection entry, addressed by slug or uuid
pub fn entry_url(
    config: &ClientConfig,
    collection_id: &str,
    slug_or_id: &str,
    locale: Option<&str>,
) -> String {
    format!(
        "{}/collections/{}/entries/{}?locale={}",
        environment_base(config),
        collection_id,
        slug_or_id,
        resolve_locale(config, locale)
    )
}

/// URL for a navigation tree
pub fn navigation_url(config: &ClientConfig, navigation_id: &str, locale: Option<&str>) -> String {
    format!(
        "{}/navigations/{}?locale={}",
        environment_base(config),
        navigation_id,
        resolve_locale(config, locale)
    )
}

/// URL for the redirect table (global, not locale-scoped)
pub fn redirects_url(config: &ClientConfig) -> String {
    format!("{}/redirects", environment_base(config))
}

/// URL for the locale list (global)
pub fn locales_url(config: &ClientConfig) -> String {
    format!("{}/locales", environment_base(config))
}

/// URL for the sitemap entries of a locale
pub fn sitemap_url(config: &ClientConfig, locale: Option<&str>) -> String {
    format!(
        "{}/sitemap?locale={}",
        environment_base(config),
        resolve_locale(config, locale)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config() -> ClientConfig {
        ClientConfig::new("https://api.brease.io/v1", "token", "prod", "en")
    }

    fn query(url: &str) -> HashMap<String, String> {
        let parsed = reqwest::Url::parse(url).unwrap();
        parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn splits_embedded_locale_prefix() {
        assert_eq!(split_locale_slug("en/about", "en"), (Some("en"), "about"));
        assert_eq!(
            split_locale_slug("pt-BR/contact", "en"),
            (Some("pt-BR"), "contact")
        );
        assert_eq!(split_locale_slug("about", "en"), (None, "about"));
        assert_eq!(split_locale_slug("/about", "en"), (None, "about"));
        assert_eq!(split_locale_slug("en", "en"), (Some("en"), ""));
    }

    #[test]
    fn non_locale_first_segment_is_left_in_the_slug() {
        assert_eq!(
            split_locale_slug("blog/first-post", "en"),
            (None, "blog/first-post")
        );
    }

    #[test]
    fn page_url_uses_detected_locale_over_default() {
        let url = page_url(&config(), "en/about", None, false);
        let q = query(&url);
        assert_eq!(q["locale"], "en");
        assert_eq!(q["slug"], "/about");
    }

    #[test]
    fn page_url_falls_back_to_default_locale() {
        let url = page_url(&config(), "about", None, false);
        let q = query(&url);
        assert_eq!(q["locale"], "en");
        assert_eq!(q["slug"], "/about");
    }

    #[test]
    fn page_url_meta_only_flag() {
        let url = page_url(&config(), "about", Some("fr"), true);
        let q = query(&url);
        assert_eq!(q["locale"], "fr");
        assert_eq!(q["metaOnly"], "true");
    }

    #[test]
    fn slug_leading_slash_is_enforced() {
        assert_eq!(normalize_slug("about"), "/about");
        assert_eq!(normalize_slug("/about"), "/about");
    }

    #[test]
    fn round_trip_reproduces_locale_and_slug() {
        let cases = [("fr", "/pricing"), ("en", "/"), ("pt-BR", "/blog/post")];
        for (locale, slug) in cases {
            let url = page_url(&config(), slug, Some(locale), false);
            let q = query(&url);
            assert_eq!(q["locale"], locale);
            assert_eq!(q["slug"], slug);
        }
    }

    #[test]
    fn environment_scoped_paths() {
        let cfg = config();
        assert!(site_url(&cfg, None).starts_with("https://api.brease.io/v1/environments/prod/site"));
        assert_eq!(
            redirects_url(&cfg),
            "https://api.brease.io/v1/environments/prod/redirects"
        );
        assert_eq!(
            locales_url(&cfg),
            "https://api.brease.io/v1/environments/prod/locales"
        );
        assert_eq!(
            entry_url(&cfg, "posts", "hello-world", Some("fr")),
            "https://api.brease.io/v1/environments/prod/collections/posts/entries/hello-world?locale=fr"
        );
    }

    #[test]
    fn trailing_slash_on_api_url_is_tolerated() {
        let cfg = ClientConfig::new("https://api.brease.io/v1/", "token", "prod", "en");
        assert_eq!(
            pages_url(&cfg, None),
            "https://api.brease.io/v1/environments/prod/pages?locale=en"
        );
    }
}
