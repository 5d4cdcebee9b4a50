//! Section rendering
//!
//! A page is an ordered list of sections; the host application decides what
//! each section type looks like by registering a render function per type.
//! Dispatch is by the section's `type` string, the same runtime contract
//! the CMS editor works against, so strong typing of section elements stays
//! with the registered renderer.

use brease_api_client::endpoints::pages::Page;
use brease_api_client::types::Section;
use maud::{html, Markup};
use std::collections::HashMap;
use tracing::warn;

/// A render function for one section type
pub type SectionRenderer = Box<dyn Fn(&Section) -> Markup + Send + Sync>;

/// Registry mapping section `type` strings to render functions
#[derive(Default)]
pub struct SectionRegistry {
    renderers: HashMap<String, SectionRenderer>,
}

impl SectionRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a renderer for a section type, builder-style
    #[must_use]
    pub fn register(
        mut self,
        kind: impl Into<String>,
        renderer: impl Fn(&Section) -> Markup + Send + Sync + 'static,
    ) -> Self {
        self.renderers.insert(kind.into(), Box::new(renderer));
        self
    }

    /// Whether a renderer is registered for this type
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.renderers.contains_key(kind)
    }

    pub(crate) fn get(&self, kind: &str) -> Option<&SectionRenderer> {
        self.renderers.get(kind)
    }
}

/// Render sections in array order
///
/// A section whose type has no registered renderer is skipped with a logged
/// warning and contributes no output: no placeholder, no error. Every
/// rendered section is wrapped in a container carrying a stable id derived
/// from the section uuid.
pub fn render_sections(sections: &[Section], registry: &SectionRegistry) -> Markup {
    let mut rendered = Vec::with_capacity(sections.len());
    for section in sections {
        match registry.get(&section.kind) {
            Some(renderer) => rendered.push(html! {
                div id=(format!("brease-{}", section.uuid)) {
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
        @for piece in &rendered {
            (piece)
        }
    }
}

/// Render a page's sections in order
pub fn render_page(page: &Page, registry: &SectionRegistry) -> Markup {
    render_sections(&page.sections, registry)
}
