//! Section tracking, navigation state and content for the portfolio page.
//!
//! This crate holds everything the page does that is not DOM plumbing:
//! which section is in view for a given scroll offset, whether the mobile
//! menu is open, what happens when a navigation entry is selected, and the
//! static content the page renders. The site crate wires these to the
//! browser through the [`LayoutSource`] and [`Viewport`] traits.

pub mod content;
mod navigation;
mod section;
mod tracker;

pub use navigation::{MenuState, Viewport, navigate_to};
pub use section::{ParseSectionError, Section};
pub use tracker::{
    ActiveSectionTracker, LayoutSource, PROBE_OFFSET, SectionGeometry, active_section,
    resolve_active,
};
