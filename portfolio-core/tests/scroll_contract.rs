//! End-to-end behaviour of scroll tracking and navigation against a fixed
//! page layout.

use std::cell::Cell;

use portfolio_core::{
    ActiveSectionTracker, MenuState, Section, SectionGeometry, Viewport, active_section,
    navigate_to,
};
use pretty_assertions::assert_eq;

const TOPS: [f64; 5] = [0.0, 800.0, 1600.0, 2400.0, 3200.0];
const HEIGHTS: [f64; 5] = [800.0; 5];

fn page(section: Section) -> Option<SectionGeometry> {
    let idx = section.index();
    Some(SectionGeometry::new(TOPS[idx], HEIGHTS[idx]))
}

/// Page whose first section starts below the fold.
fn offset_page(section: Section) -> Option<SectionGeometry> {
    page(section).map(|g| SectionGeometry::new(g.top + 500.0, g.height))
}

#[test]
fn offset_750_selects_second_section() {
    assert_eq!(active_section(750.0, &page), Some(Section::About));

    let mut tracker = ActiveSectionTracker::new();
    assert!(tracker.observe(750.0, &page));
    assert_eq!(tracker.active(), Section::About);
}

#[test]
fn every_offset_selects_the_containing_section() {
    let mut tracker = ActiveSectionTracker::new();
    let mut seen = Vec::new();
    let mut offset = 0.0;
    while offset + 100.0 < 4000.0 {
        tracker.observe(offset, &page);
        let probe = offset + 100.0;
        let expected = Section::ALL
            .into_iter()
            .find(|&s| page(s).is_some_and(|g| g.top <= probe && probe < g.bottom()))
            .expect("probe inside page");
        assert_eq!(tracker.active(), expected, "offset {offset}");
        if seen.last() != Some(&expected) {
            seen.push(expected);
        }
        offset += 50.0;
    }
    assert_eq!(seen, Section::ALL.to_vec());
}

#[test]
fn offsets_above_first_section_keep_initial_section() {
    let mut tracker = ActiveSectionTracker::new();
    for offset in [0.0, 100.0, 250.0, 399.0] {
        assert!(!tracker.observe(offset, &offset_page));
        assert_eq!(tracker.active(), Section::FIRST);
    }
    // 1200 + 100 falls in the second section (1300..2100)
    assert!(tracker.observe(1200.0, &offset_page));
    assert_eq!(tracker.active(), Section::About);
}

#[test]
fn scrolling_back_up_past_the_top_keeps_last_match() {
    let mut tracker = ActiveSectionTracker::new();
    tracker.observe(1300.0, &offset_page);
    assert_eq!(tracker.active(), Section::About);
    assert!(!tracker.observe(0.0, &offset_page));
    assert_eq!(tracker.active(), Section::About);
}

#[test]
fn partially_mounted_page_skips_missing_sections() {
    let layout = |s: Section| match s {
        Section::Projects | Section::Skills => None,
        other => page(other),
    };
    let mut tracker = ActiveSectionTracker::new();
    tracker.observe(2000.0, &layout);
    assert_eq!(tracker.active(), Section::FIRST);
    tracker.observe(3200.0, &layout);
    assert_eq!(tracker.active(), Section::Contact);
}

struct MountedOnly(Vec<Section>, Cell<usize>);

impl Viewport for MountedOnly {
    fn scroll_to(&self, section: Section) -> bool {
        let mounted = self.0.contains(&section);
        if mounted {
            self.1.set(self.1.get() + 1);
        }
        mounted
    }
}

#[test]
fn navigation_always_closes_menu_for_mounted_sections() {
    let viewport = MountedOnly(Section::ALL.to_vec(), Cell::new(0));
    for section in Section::ALL {
        let mut closed = MenuState::new();
        let mut open = MenuState::new();
        open.toggle();

        assert!(navigate_to(section, &mut closed, &viewport));
        assert!(navigate_to(section, &mut open, &viewport));
        assert!(!closed.is_open());
        assert!(!open.is_open());
    }
    assert_eq!(viewport.1.get(), Section::ALL.len() * 2);
}

#[test]
fn navigation_to_unmounted_section_changes_nothing() {
    let viewport = MountedOnly(vec![Section::Home], Cell::new(0));
    let mut menu = MenuState::new();
    menu.toggle();
    let before = menu;

    assert!(!navigate_to(Section::Skills, &mut menu, &viewport));
    assert_eq!(menu, before);
    assert_eq!(viewport.1.get(), 0);
}

#[test]
fn content_is_well_formed() {
    use portfolio_core::content::{HIGHLIGHTS, PROFILE, PROJECTS, SKILLS};

    assert_eq!(PROJECTS.len(), 4);
    assert_eq!(SKILLS.len(), 6);
    assert_eq!(HIGHLIGHTS.len(), 3);
    assert!(PROFILE.mailto().starts_with("mailto:"));
    assert!(PROFILE.github_url.starts_with("https://"));
    assert!(PROFILE.linkedin_url.starts_with("https://"));
    for project in PROJECTS {
        assert!(!project.tech.is_empty(), "{} has no tech tags", project.title);
        for url in project.code_url.iter().chain(project.demo_url.iter()) {
            assert!(url.starts_with("https://"));
        }
    }
    for category in SKILLS {
        assert!(!category.items.is_empty(), "{} is empty", category.name);
    }
}
