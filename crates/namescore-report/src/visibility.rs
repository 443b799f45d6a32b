//! Per-section visibility: render, locked teaser, or absent.

use std::fmt;
use std::str::FromStr;

use namescore_core::{NormalizedReport, SocialSource};
use serde::{Deserialize, Serialize};

/// Report sections in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    ExecutiveSummary,
    Dimensions,
    FinalAssessment,
    StrategicClassification,
    #[serde(rename = "mckinsey_analysis")]
    FrameworkDetail,
    MarketIntelligence,
    DigitalPresence,
    CompetitiveLandscape,
    #[serde(rename = "trademark_matrix")]
    LegalRisk,
    TrademarkResearch,
}

impl SectionKey {
    /// Every section, in the order they are resolved and drawn.
    pub const ALL: [SectionKey; 10] = [
        SectionKey::ExecutiveSummary,
        SectionKey::Dimensions,
        SectionKey::FinalAssessment,
        SectionKey::StrategicClassification,
        SectionKey::FrameworkDetail,
        SectionKey::MarketIntelligence,
        SectionKey::DigitalPresence,
        SectionKey::CompetitiveLandscape,
        SectionKey::LegalRisk,
        SectionKey::TrademarkResearch,
    ];

    /// Stable identifier, matching the payload field the section is built from.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            SectionKey::ExecutiveSummary => "executive_summary",
            SectionKey::Dimensions => "dimensions",
            SectionKey::FinalAssessment => "final_assessment",
            SectionKey::StrategicClassification => "strategic_classification",
            SectionKey::FrameworkDetail => "mckinsey_analysis",
            SectionKey::MarketIntelligence => "market_intelligence",
            SectionKey::DigitalPresence => "digital_presence",
            SectionKey::CompetitiveLandscape => "competitive_landscape",
            SectionKey::LegalRisk => "trademark_matrix",
            SectionKey::TrademarkResearch => "trademark_research",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SectionKey::ExecutiveSummary => "Executive Summary",
            SectionKey::Dimensions => "Dimension Analysis",
            SectionKey::FinalAssessment => "Final Assessment",
            SectionKey::StrategicClassification => "Strategic Classification",
            SectionKey::FrameworkDetail => "Strategy Framework",
            SectionKey::MarketIntelligence => "Market Intelligence",
            SectionKey::DigitalPresence => "Digital Presence",
            SectionKey::CompetitiveLandscape => "Competitive Landscape",
            SectionKey::LegalRisk => "Legal Risk Matrix",
            SectionKey::TrademarkResearch => "Trademark Research",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown report section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionKey {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let key = match normalized.as_str() {
            "executive_summary" | "summary" => SectionKey::ExecutiveSummary,
            "dimensions" | "dimension_analysis" => SectionKey::Dimensions,
            "final_assessment" | "assessment" => SectionKey::FinalAssessment,
            "strategic_classification" | "strategy" => SectionKey::StrategicClassification,
            "mckinsey_analysis" | "framework" | "framework_detail" => SectionKey::FrameworkDetail,
            "market_intelligence" | "visibility_analysis" | "cultural_analysis" => {
                SectionKey::MarketIntelligence
            }
            "digital_presence" | "domains" | "social" => SectionKey::DigitalPresence,
            "competitive_landscape" | "competitor_analysis" | "competitors" => {
                SectionKey::CompetitiveLandscape
            }
            "trademark_matrix" | "legal_risk" => SectionKey::LegalRisk,
            "trademark_research" => SectionKey::TrademarkResearch,
            _ => return Err(UnknownSection(s.to_string())),
        };
        Ok(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Render,
    Locked,
    Absent,
}

/// Resolve one section. Absent data wins over authentication.
#[must_use]
pub fn resolve_visibility(
    _section: SectionKey,
    report_has_data: bool,
    is_authenticated: bool,
) -> Visibility {
    if !report_has_data {
        Visibility::Absent
    } else if !is_authenticated {
        Visibility::Locked
    } else {
        Visibility::Render
    }
}

/// Whether the report carries anything to draw for `section`. Judged on the
/// executive summary and the first evaluation only.
#[must_use]
pub fn section_has_data(report: &NormalizedReport, section: SectionKey) -> bool {
    let summary_present = !report.executive_summary.is_empty();
    let Some(eval) = report.primary() else {
        return section == SectionKey::ExecutiveSummary && summary_present;
    };

    match section {
        SectionKey::ExecutiveSummary => summary_present || eval.namescore.is_some(),
        SectionKey::Dimensions => !eval.dimensions.is_empty(),
        SectionKey::FinalAssessment => {
            eval.final_assessment.is_some() || !eval.pros.is_empty() || !eval.cons.is_empty()
        }
        SectionKey::StrategicClassification => eval.strategic_classification.is_some(),
        SectionKey::FrameworkDetail => eval.framework.is_some(),
        SectionKey::MarketIntelligence => {
            eval.market_intelligence.is_some() || !eval.cultural_analysis.is_empty()
        }
        SectionKey::DigitalPresence => {
            !eval.domains.is_empty()
                || (eval.social.source != SocialSource::Missing && !eval.social.platforms.is_empty())
        }
        SectionKey::CompetitiveLandscape => {
            eval.competitor_landscape.is_some() || !eval.country_landscapes.is_empty()
        }
        SectionKey::LegalRisk => eval.trademark_matrix.is_some(),
        SectionKey::TrademarkResearch => eval.trademark_research.is_some(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedSection {
    pub key: SectionKey,
    pub visibility: Visibility,
}

/// Resolve every section in canonical order.
#[must_use]
pub fn resolve_sections(report: &NormalizedReport, is_authenticated: bool) -> Vec<ResolvedSection> {
    SectionKey::ALL
        .iter()
        .map(|&key| ResolvedSection {
            key,
            visibility: resolve_visibility(key, section_has_data(report, key), is_authenticated),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use namescore_core::NormalizedEvaluation;

    use super::*;
    use crate::normalize::normalize_evaluation;
    use crate::types::RawBrandEvaluation;

    fn report_with(eval: Option<NormalizedEvaluation>, summary: &str) -> NormalizedReport {
        NormalizedReport {
            report_id: "r-1".to_string(),
            executive_summary: summary.to_string(),
            evaluations: eval.into_iter().collect(),
        }
    }

    #[test]
    fn visibility_truth_table_holds_for_every_section() {
        for key in SectionKey::ALL {
            assert_eq!(resolve_visibility(key, false, false), Visibility::Absent);
            assert_eq!(resolve_visibility(key, false, true), Visibility::Absent);
            assert_eq!(resolve_visibility(key, true, false), Visibility::Locked);
            assert_eq!(resolve_visibility(key, true, true), Visibility::Render);
        }
    }

    #[test]
    fn trademark_matrix_locked_or_absent() {
        let key: SectionKey = "trademark_matrix".parse().unwrap();
        assert_eq!(resolve_visibility(key, true, false), Visibility::Locked);
        assert_eq!(resolve_visibility(key, false, false), Visibility::Absent);
        assert_eq!(resolve_visibility(key, false, true), Visibility::Absent);
    }

    #[test]
    fn section_ids_round_trip_through_from_str() {
        for key in SectionKey::ALL {
            assert_eq!(key.id().parse::<SectionKey>().unwrap(), key);
        }
    }

    #[test]
    fn from_str_accepts_aliases_and_rejects_unknown() {
        assert_eq!(
            "Legal-Risk".parse::<SectionKey>().unwrap(),
            SectionKey::LegalRisk
        );
        assert_eq!(
            "framework detail".parse::<SectionKey>().unwrap(),
            SectionKey::FrameworkDetail
        );
        assert!("pricing".parse::<SectionKey>().is_err());
    }

    #[test]
    fn serde_ids_match_display_ids() {
        for key in SectionKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.id()));
        }
    }

    #[test]
    fn sections_resolve_in_canonical_order() {
        let report = report_with(None, "");
        let keys: Vec<SectionKey> = resolve_sections(&report, true)
            .into_iter()
            .map(|s| s.key)
            .collect();
        assert_eq!(keys, SectionKey::ALL.to_vec());
    }

    #[test]
    fn report_without_evaluations_only_has_summary() {
        let report = report_with(None, "Summary text");
        for resolved in resolve_sections(&report, true) {
            let expected = if resolved.key == SectionKey::ExecutiveSummary {
                Visibility::Render
            } else {
                Visibility::Absent
            };
            assert_eq!(resolved.visibility, expected, "{}", resolved.key);
        }
    }

    #[test]
    fn empty_evaluation_has_no_optional_sections() {
        let eval = normalize_evaluation(&RawBrandEvaluation::default());
        let report = report_with(Some(eval), "");
        let absent = resolve_sections(&report, false)
            .iter()
            .all(|s| s.visibility == Visibility::Absent);
        assert!(absent);
    }
}
