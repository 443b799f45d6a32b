//! Print pagination and render-context density.
//!
//! Page breaks are a static property of section identity. The planner never
//! measures content; keeping an atomic block on one page is left to the
//! renderer through [`BlockKind::keep_together`].

use namescore_core::{DensityProfile, PresentationProfile};
use serde::{Deserialize, Serialize};

use crate::visibility::{ResolvedSection, SectionKey, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderContext {
    #[default]
    Screen,
    Print,
}

impl RenderContext {
    /// Density profile for this context.
    #[must_use]
    pub fn density(self, profile: &PresentationProfile) -> DensityProfile {
        match self {
            RenderContext::Screen => profile.screen,
            RenderContext::Print => profile.print,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageBreak {
    Continue,
    NewPage,
}

impl SectionKey {
    /// Sections from the strategy framework onward always open a new printed page.
    #[must_use]
    pub fn starts_new_page(self) -> bool {
        matches!(
            self,
            SectionKey::FrameworkDetail
                | SectionKey::MarketIntelligence
                | SectionKey::DigitalPresence
                | SectionKey::CompetitiveLandscape
                | SectionKey::LegalRisk
                | SectionKey::TrademarkResearch
        )
    }
}

/// Coarse kind of a renderable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Text,
    Card,
    Table,
    Chart,
}

impl BlockKind {
    /// Whether the block must not be split across a page boundary.
    #[must_use]
    pub fn keep_together(self) -> bool {
        !matches!(self, BlockKind::Text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedSection {
    pub key: SectionKey,
    pub visibility: Visibility,
    pub page_break: PageBreak,
}

/// Page-break plan for a printed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintPlan {
    /// Always [`PageBreak::NewPage`]: the cover opens the document on its own page.
    pub cover: PageBreak,
    /// Always true: a forced break follows the cover.
    pub break_after_cover: bool,
    /// Drawn sections only; absent sections are dropped.
    pub sections: Vec<PlannedSection>,
}

/// Assign page-break directives to resolved sections.
///
/// The first drawn section follows the forced break after the cover, so it
/// starts a new page; later sections start one only if
/// [`SectionKey::starts_new_page`] says so.
#[must_use]
pub fn plan_pages(resolved: &[ResolvedSection]) -> PrintPlan {
    let sections = resolved
        .iter()
        .filter(|s| s.visibility != Visibility::Absent)
        .enumerate()
        .map(|(index, s)| PlannedSection {
            key: s.key,
            visibility: s.visibility,
            page_break: if index == 0 || s.key.starts_new_page() {
                PageBreak::NewPage
            } else {
                PageBreak::Continue
            },
        })
        .collect();

    PrintPlan {
        cover: PageBreak::NewPage,
        break_after_cover: true,
        sections,
    }
}
