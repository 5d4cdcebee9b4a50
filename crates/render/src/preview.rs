//! Preview-mode rendering
//!
//! When the site runs inside the Brease editor's preview iframe, each
//! section gets a click affordance that tells the editor which section to
//! open. The emitted script posts
//! `{action: "BreaseEditSection", data: {uuid, scrollY}}` to the parent
//! frame; outside an iframe (`window.self === window.top`) it is inert, so
//! the same markup is safe to serve everywhere preview is enabled.

use crate::sections::SectionRegistry;
use brease_api_client::endpoints::pages::Page;
use brease_api_client::types::Section;
use maud::{html, Markup, PreEscaped};
use tracing::warn;

/// postMessage action name the Brease editor listens for
pub const EDIT_SECTION_ACTION: &str = "BreaseEditSection";

const EDIT_SCRIPT: &str = r#"function __breaseEditSection(event){if(window.self===window.top){return;}var uuid=event.currentTarget.getAttribute("data-brease-uuid");window.parent.postMessage({action:"BreaseEditSection",data:{uuid:uuid,scrollY:window.scrollY}},"*");}"#;

/// Render sections with an edit-affordance overlay per section
///
/// Section order, skip-on-unmapped behavior and uuid-derived ids match
/// [`crate::sections::render_sections`]; the only difference is the wrapper
/// and the one shared script.
pub fn render_sections_preview(sections: &[Section], registry: &SectionRegistry) -> Markup {
    let mut rendered = Vec::with_capacity(sections.len());
    for section in sections {
        match registry.get(&section.kind) {
            Some(renderer) => rendered.push(html! {
                div.brease-preview-section
                    id=(format!("brease-{}", section.uuid))
                    data-brease-uuid=(section.uuid)
                    onclick="__breaseEditSection(event)" {
                    (renderer(section))
                }
            }),
            None => warn!(
                kind = %section.kind,
                uuid = %section.uuid,
                "no renderer registered for section type, skipping"
            ),
        }
    }
    html! {
        script { (PreEscaped(EDIT_SCRIPT)) }
        @for piece in &rendered {
            (piece)
        }
    }
}

/// Render a page's sections in preview mode
pub fn render_page_preview(page: &Page, registry: &SectionRegistry) -> Markup {
    render_sections_preview(&page.sections, registry)
}
