//! Image rendering
//!
//! Resolves a media object to a concrete source and, when several size
//! variants exist, a responsive srcset ordered by the fixed size-tag
//! sequence (`sm, md, lg, xl, 2xl, hd, original`) with each variant's
//! native width as the descriptor.

use brease_api_client::types::Media;
use maud::{html, Markup};

/// Default breakpoint-sizing hint when the caller does not supply one
pub const DEFAULT_SIZES: &str = "(max-width: 768px) 100vw, 50vw";

/// Caller-tunable rendering options
#[derive(Debug, Clone, Default)]
pub struct ImageOptions<'a> {
    /// Request one specific size variant instead of the responsive set
    pub variant: Option<&'a str>,
    /// Override for the `sizes` hint
    pub sizes: Option<&'a str>,
    /// CSS class for the `img` element
    pub class: Option<&'a str>,
}

/// A resolved image source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource<'a> {
    /// Path to serve
    pub path: &'a str,
    /// Display width, when known
    pub width: Option<u32>,
    /// Display height, when known
    pub height: Option<u32>,
}

/// Resolve the source for a media object
///
/// Precedence: the requested variant when present and available, else the
/// widest available variant, else the media's own path.
#[must_use]
pub fn resolve_source<'a>(media: &'a Media, requested: Option<&str>) -> ResolvedSource<'a> {
    if let Some(variant) = requested.and_then(|tag| media.variant(tag)) {
        return ResolvedSource {
            path: &variant.path,
            width: Some(variant.width),
            height: variant.height,
        };
    }
    if let Some(variant) = media.widest_variant() {
        return ResolvedSource {
            path: &variant.path,
            width: Some(variant.width),
            height: variant.height,
        };
    }
    ResolvedSource {
        path: &media.path,
        width: media.width,
        height: media.height,
    }
}

/// The width the image will be displayed at for the resolved source
#[must_use]
pub fn display_width(media: &Media, requested: Option<&str>) -> Option<u32> {
    resolve_source(media, requested).width
}

/// Build the srcset string, or `None` when fewer than two variants exist
#[must_use]
pub fn srcset(media: &Media) -> Option<String> {
    if media.variants.len() < 2 {
        return None;
    }
    Some(
        media
            .ordered_variants()
            .map(|(_, variant)| format!("{} {}w", variant.path, variant.width))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Render an `img` element for a media object
///
/// With no explicit variant requested and multiple variants available, the
/// element carries a srcset in the fixed tag order plus a `sizes` hint
/// (caller override or [`DEFAULT_SIZES`]).
pub fn render_image(media: &Media, opts: &ImageOptions) -> Markup {
    let source = resolve_source(media, opts.variant);
    let srcset = if opts.variant.is_none() {
        srcset(media)
    } else {
        None
    };
    let sizes = srcset
        .as_ref()
        .map(|_| opts.sizes.unwrap_or(DEFAULT_SIZES));

    html! {
        img src=(source.path)
            alt=[media.alt.as_deref()]
            width=[source.width]
            height=[source.height]
            srcset=[srcset.as_deref()]
            sizes=[sizes]
            class=[opts.class]
            loading="lazy";
    }
}
