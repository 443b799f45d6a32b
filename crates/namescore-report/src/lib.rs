//! Report normalization and presentation pipeline.
//!
//! A raw payload ([`RawReport`]) is normalized once into the canonical
//! [`namescore_core::NormalizedReport`], then turned into a [`ReportView`]
//! for a viewer and render context. Every stage after [`parse_report`] is
//! pure and total.

pub mod classify;
pub mod error;
pub mod layout;
pub mod normalize;
pub mod sanitize;
pub mod types;
pub mod view;
pub mod visibility;

pub use classify::{
    classify, classify_overall, risk_level_style, Classification, Classifier, ColorBucket,
    RiskBucket, RiskStyle, Scale, ScoreBucket,
};
pub use error::ReportError;
pub use layout::{plan_pages, BlockKind, PageBreak, PrintPlan, RenderContext};
pub use normalize::{
    competitor_landscape, country_landscapes, country_name, domain_entries, normalize_evaluation,
    normalize_report, social_availability, social_handles, social_summary,
};
pub use sanitize::{
    apply_rule, reasoning_blocks, sanitize, strip_formula_sections, SanitizeRule, SANITIZE_RULES,
};
pub use types::{parse_report, RawBrandEvaluation, RawCountry, RawReport};
pub use view::{build_view, render_report, ReportView, SectionBody, Viewer};
pub use visibility::{
    resolve_sections, resolve_visibility, section_has_data, ResolvedSection, SectionKey,
    Visibility,
};
