//! Reactive glue between the browser and the core tracker.

use leptos::ev;
use leptos::prelude::*;
use portfolio_core::{ActiveSectionTracker, MenuState, Section, navigate_to};

use crate::dom::{self, DomLayout, DomViewport};

/// Track the section in view for as long as the calling owner is alive.
///
/// The signal only notifies when the active section actually changes.
pub fn use_active_section() -> Signal<Section> {
    let tracker = RwSignal::new(ActiveSectionTracker::new());
    track_scroll(tracker);
    Signal::derive(move || tracker.with(ActiveSectionTracker::active))
}

/// Feed window scroll events into `tracker`.
///
/// One window `scroll` listener is attached here and removed when the
/// current owner is cleaned up. Each event re-reads layout.
pub fn track_scroll(tracker: RwSignal<ActiveSectionTracker>) {
    let handle = window_event_listener(ev::scroll, move |_| {
        let (Some(offset), Some(layout)) = (dom::scroll_offset(), DomLayout::current()) else {
            tracing::trace!("scroll offset unavailable, skipping evaluation");
            return;
        };
        tracker.maybe_update(|tracker| tracker.observe(offset, &layout));
    });
    on_cleanup(move || handle.remove());
}

/// Scroll to `section` and collapse the mobile menu.
///
/// Sections without a mounted element are ignored and the menu is left as
/// it was.
pub fn navigate(section: Section, menu: RwSignal<MenuState>) {
    let Some(viewport) = DomViewport::current() else {
        return;
    };
    menu.maybe_update(|state| {
        let was_open = state.is_open();
        navigate_to(section, state, &viewport) && was_open
    });
}

// Run with: wasm-pack test --headless --firefox portfolio-site
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use portfolio_core::LayoutSource;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{Element, Event};

    wasm_bindgen_test_configure!(run_in_browser);

    /// Stacked 800px blocks for the given sections plus a tall spacer so
    /// the window can scroll past all of them. Removed on drop.
    struct Page(Vec<Element>);

    impl Page {
        fn mount(sections: &[Section]) -> Self {
            let document = web_sys::window().unwrap().document().unwrap();
            let body = document.body().unwrap();
            let mut elements = Vec::new();
            for section in sections {
                let element = document.create_element("div").unwrap();
                element.set_id(section.id());
                element
                    .set_attribute("style", "display: block; height: 800px; margin: 0;")
                    .unwrap();
                body.append_child(&element).unwrap();
                elements.push(element);
            }
            let spacer = document.create_element("div").unwrap();
            spacer.set_attribute("style", "height: 4000px;").unwrap();
            body.append_child(&spacer).unwrap();
            elements.push(spacer);
            Page(elements)
        }

        fn top_of(section: Section) -> f64 {
            DomLayout::current()
                .and_then(|layout| layout.geometry(section))
                .map(|geometry| geometry.top)
                .unwrap()
        }
    }

    impl Drop for Page {
        fn drop(&mut self) {
            for element in &self.0 {
                element.remove();
            }
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    }

    /// Scroll the top of `section` to the viewport top, then fire a
    /// synchronous `scroll` event.
    fn scroll_into(section: Section) {
        let window = web_sys::window().unwrap();
        window.scroll_to_with_x_and_y(0.0, Page::top_of(section));
        window
            .dispatch_event(&Event::new("scroll").unwrap())
            .unwrap();
    }

    #[wasm_bindgen_test]
    fn scroll_updates_active_section() {
        let _page = Page::mount(&Section::ALL);
        let owner = Owner::new();
        let active = owner.with(use_active_section);
        assert_eq!(active.get_untracked(), Section::Home);

        scroll_into(Section::About);
        assert_eq!(active.get_untracked(), Section::About);

        scroll_into(Section::Skills);
        assert_eq!(active.get_untracked(), Section::Skills);

        owner.cleanup();
    }

    #[wasm_bindgen_test]
    fn listener_is_removed_with_its_owner() {
        let _page = Page::mount(&Section::ALL);
        let tracker = RwSignal::new(ActiveSectionTracker::new());
        let owner = Owner::new();
        owner.with(|| track_scroll(tracker));

        scroll_into(Section::About);
        assert_eq!(tracker.get_untracked().active(), Section::About);

        owner.cleanup();
        scroll_into(Section::Projects);
        assert_eq!(tracker.get_untracked().active(), Section::About);
    }

    #[wasm_bindgen_test]
    fn navigate_closes_menu_only_for_mounted_sections() {
        let _page = Page::mount(&[Section::Projects]);
        let menu = RwSignal::new(MenuState::new());

        menu.update(MenuState::toggle);
        navigate(Section::Projects, menu);
        assert!(!menu.get_untracked().is_open());

        menu.update(MenuState::toggle);
        navigate(Section::Contact, menu);
        assert!(menu.get_untracked().is_open());
    }
}
