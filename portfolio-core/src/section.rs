//! Section identifiers for the vertically stacked regions of the page.
//!
//! The set is closed and ordered: [`Section::ALL`] lists the regions top to
//! bottom, and that order is what the active-section scan walks.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// One named region of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Hero block at the top of the page
    #[default]
    Home,
    /// Biography and highlight cards
    About,
    /// Project showcase
    Projects,
    /// Skill categories
    Skills,
    /// Contact links
    Contact,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// The first section in document order; active before any scroll.
    pub const FIRST: Section = Section::Home;

    /// DOM id of the element that hosts this section.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    /// Position in document order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when text does not name a known section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSectionError {
    #[error("section name is empty")]
    Empty,
    #[error("unknown section `{0}` (expected one of: home, about, projects, skills, contact)")]
    Unknown(String),
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('#');
        if name.is_empty() {
            return Err(ParseSectionError::Empty);
        }
        // `hero` is the historical anchor of the first section
        if name.eq_ignore_ascii_case("hero") {
            return Ok(Section::Home);
        }
        Section::ALL
            .into_iter()
            .find(|section| section.id().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseSectionError::Unknown(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_order_matches_index() {
        for (idx, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), idx);
        }
        assert_eq!(Section::ALL[0], Section::FIRST);
        assert_eq!(Section::default(), Section::FIRST);
    }

    #[test]
    fn ids_and_labels() {
        assert_eq!(Section::Home.id(), "home");
        assert_eq!(Section::Home.label(), "Home");
        assert_eq!(Section::Skills.id(), "skills");
        assert_eq!(Section::Contact.to_string(), "contact");
    }

    #[test]
    fn parses_ids_case_insensitively() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.label().parse::<Section>(), Ok(section));
        }
        assert_eq!(" #Projects ".parse::<Section>(), Ok(Section::Projects));
    }

    #[test]
    fn hero_is_an_alias_for_home() {
        assert_eq!("hero".parse::<Section>(), Ok(Section::Home));
    }

    #[test]
    fn rejects_unknown_and_empty_names() {
        assert_eq!("  ".parse::<Section>(), Err(ParseSectionError::Empty));
        let err = "blog".parse::<Section>().unwrap_err();
        assert_eq!(err, ParseSectionError::Unknown("blog".into()));
        assert!(err.to_string().contains("blog"));
    }

    #[test]
    fn serializes_as_lowercase_id() {
        let json = serde_json::to_string(&Section::Projects).unwrap();
        assert_eq!(json, "\"projects\"");
    }
}
