//! Navigation menu state and the navigate-to-section operation.

use tracing::trace;

use crate::section::Section;

/// Whether the collapsed (mobile) navigation panel is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the flag.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Something that can bring a section into view.
pub trait Viewport {
    /// Scroll to `section`. Returns `false` when it has no mounted element.
    fn scroll_to(&self, section: Section) -> bool;
}

/// Scroll to `section` and collapse the menu.
///
/// When the viewport has nothing mounted for `section` this is a no-op and
/// the menu keeps whatever state it had. Returns whether a scroll happened.
pub fn navigate_to<V>(section: Section, menu: &mut MenuState, viewport: &V) -> bool
where
    V: Viewport + ?Sized,
{
    if !viewport.scroll_to(section) {
        trace!(%section, "navigation target not mounted");
        return false;
    }
    menu.close();
    true
}
