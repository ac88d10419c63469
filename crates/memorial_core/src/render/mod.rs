//! HTML projections of page state.
//!
//! # Responsibility
//! - Turn records into HTML fragments for named page regions.
//! - Keep escaping inside [`markup::Markup`] so no renderer can emit
//!   unescaped record text.
//!
//! # Invariants
//! - Renderers are pure: same input, same output, no storage access.
//! - Tag and attribute names are static; only text and attribute values are
//!   data-driven, and both are always escaped.

pub mod family_tree;
pub mod hero;
pub mod list;
pub mod markup;
pub mod profile;

use markup::Html;

/// A page region that controllers re-render after a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    PagesGrid,
    ProfileHeader,
    TimelineSidebar,
    BioTab,
    FamilyTree,
    Hero,
    About,
}

impl Region {
    /// DOM element id the fragment replaces.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::PagesGrid => "pagesGrid",
            Self::ProfileHeader => "profileHeader",
            Self::TimelineSidebar => "timelineSidebar",
            Self::BioTab => "bioContent",
            Self::FamilyTree => "familyTree",
            Self::Hero => "hero",
            Self::About => "about",
        }
    }
}

/// Freshly rendered content for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionUpdate {
    pub region: Region,
    pub html: Html,
}

impl RegionUpdate {
    pub fn new(region: Region, html: Html) -> Self {
        Self { region, html }
    }
}
