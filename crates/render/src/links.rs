//! Link rendering
//!
//! `is_external` is authored data on the link field, never inferred from
//! the URL shape. External links open in a new tab with the usual rel
//! hardening; internal links render as plain same-origin anchors the host
//! router intercepts.

use brease_api_client::types::Link;
use maud::{html, Markup};

/// Render an anchor around caller-supplied inner markup
pub fn render_link(link: &Link, inner: Markup) -> Markup {
    if link.is_external {
        html! {
            a href=(link.href()) target="_blank" rel="noopener noreferrer" {
                (inner)
            }
        }
    } else {
        html! {
            a href=(link.href()) {
                (inner)
            }
        }
    }
}

/// Render an anchor using the link's own label as its text
pub fn render_labeled_link(link: &Link) -> Markup {
    let label = link.label.as_deref().unwrap_or_else(|| link.href());
    render_link(link, html! { (label) })
}
