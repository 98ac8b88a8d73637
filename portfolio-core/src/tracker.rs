//! Active-section tracking.
//!
//! A section is "active" when its vertical span contains the probe point,
//! which sits [`PROBE_OFFSET`] units below the current scroll top. The scan
//! walks [`Section::ALL`] in document order and the first hit wins; when
//! nothing is hit the previously active section is kept.
//!
//! Layout is never cached here. Every evaluation asks a [`LayoutSource`]
//! for fresh geometry, so the same code runs against the live DOM and
//! against fixed numbers in tests.

use tracing::debug;

use crate::section::Section;

/// Distance below the scroll top at which the probe point sits.
pub const PROBE_OFFSET: f64 = 100.0;

/// Vertical placement of a rendered section, relative to the document top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Offset of the section's top edge
    pub top: f64,
    /// Rendered height
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Offset of the bottom edge (exclusive).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < top + height`.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }
}

/// Anything that can report where a section currently sits.
///
/// `None` means the section has no mounted element right now; the scan
/// skips it and moves on.
pub trait LayoutSource {
    fn geometry(&self, section: Section) -> Option<SectionGeometry>;
}

impl<F> LayoutSource for F
where
    F: Fn(Section) -> Option<SectionGeometry>,
{
    fn geometry(&self, section: Section) -> Option<SectionGeometry> {
        self(section)
    }
}

/// Resolve the section under `scroll_offset + probe_offset`.
pub fn resolve_active<L>(scroll_offset: f64, probe_offset: f64, layout: &L) -> Option<Section>
where
    L: LayoutSource + ?Sized,
{
    let probe = scroll_offset + probe_offset;
    Section::ALL.into_iter().find(|&section| {
        layout
            .geometry(section)
            .is_some_and(|geometry| geometry.contains(probe))
    })
}

/// Resolve the section under the default probe point.
///
/// ```
/// use portfolio_core::{active_section, Section, SectionGeometry};
///
/// let layout = |s: Section| Some(SectionGeometry::new(s.index() as f64 * 800.0, 800.0));
/// assert_eq!(active_section(750.0, &layout), Some(Section::About));
/// ```
pub fn active_section<L>(scroll_offset: f64, layout: &L) -> Option<Section>
where
    L: LayoutSource + ?Sized,
{
    resolve_active(scroll_offset, PROBE_OFFSET, layout)
}

/// Holds the currently active section between scroll events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSectionTracker {
    active: Section,
    probe_offset: f64,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self {
            active: Section::FIRST,
            probe_offset: PROBE_OFFSET,
        }
    }
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a probe point other than [`PROBE_OFFSET`].
    pub fn with_probe_offset(mut self, probe_offset: f64) -> Self {
        self.probe_offset = probe_offset;
        self
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Re-evaluate against the current scroll offset and layout.
    ///
    /// Returns `true` only when the active section changed. A scan with no
    /// match leaves the previous section in place.
    pub fn observe<L>(&mut self, scroll_offset: f64, layout: &L) -> bool
    where
        L: LayoutSource + ?Sized,
    {
        match resolve_active(scroll_offset, self.probe_offset, layout) {
            Some(next) if next != self.active => {
                debug!(from = %self.active, to = %next, scroll_offset, "active section changed");
                self.active = next;
                true
            }
            _ => false,
        }
    }
}
