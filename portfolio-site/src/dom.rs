//! `web-sys` adapters for the core layout and viewport seams.

use portfolio_core::{LayoutSource, Section, SectionGeometry, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

/// Current vertical scroll offset of the window, if it can be read.
pub fn scroll_offset() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Reads section geometry from the rendered document on every query.
pub struct DomLayout {
    document: Document,
}

impl DomLayout {
    pub fn current() -> Option<Self> {
        document().map(|document| Self { document })
    }
}

impl LayoutSource for DomLayout {
    fn geometry(&self, section: Section) -> Option<SectionGeometry> {
        let element = self
            .document
            .get_element_by_id(section.id())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionGeometry::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }
}

/// Smooth-scrolls the window to section elements.
pub struct DomViewport {
    document: Document,
}

impl DomViewport {
    pub fn current() -> Option<Self> {
        document().map(|document| Self { document })
    }
}

impl Viewport for DomViewport {
    fn scroll_to(&self, section: Section) -> bool {
        let Some(element) = self.document.get_element_by_id(section.id()) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
