//! Raw report payload types, as produced by the upstream analysis service.
//!
//! ## Observed schema drift
//!
//! The analysis backend has changed shape several times and old reports stay
//! in circulation through the client cache, so one payload may carry any mix
//! of generations:
//!
//! - `country` is either a bare string (`"India"`) or `{name, flag}`.
//! - Social handles arrive as legacy `social_availability` (`platforms` or
//!   `handles` array) and/or `enhanced_social_availability` (`platforms` plus
//!   a `summary` aggregate).
//! - Domains arrive as legacy `domain_analysis` (exact match + alternatives)
//!   and/or `multi_domain_availability` (`category_domains`, `country_domains`).
//! - `competitor_analysis` is either a flat competitor array or an object with
//!   axis labels and a `competitors` array.
//! - Numbers sometimes arrive as strings (`"7.5"`, `"80"`).
//!
//! Every field therefore deserializes leniently: a value of the wrong shape
//! becomes "absent" instead of failing the whole payload. Deciding what an
//! absent value means is left to [`crate::normalize`].

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ReportError;

/// Top-level report payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawReport {
    #[serde(deserialize_with = "lenient::string")]
    pub report_id: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub executive_summary: Option<String>,

    #[serde(deserialize_with = "lenient::vec")]
    pub brand_scores: Vec<RawBrandEvaluation>,
}

impl RawReport {
    /// Interpret an already-parsed JSON value as a report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NotAnObject`] if the root is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ReportError> {
        if !value.is_object() {
            return Err(ReportError::NotAnObject {
                found: json_kind(&value),
            });
        }
        serde_json::from_value(value).map_err(|source| ReportError::Deserialize {
            context: "report".to_string(),
            source,
        })
    }
}

/// Parse a report from JSON text.
///
/// # Errors
///
/// Returns [`ReportError::Deserialize`] for invalid JSON and
/// [`ReportError::NotAnObject`] when the root is not an object.
pub fn parse_report(json: &str) -> Result<RawReport, ReportError> {
    let value: Value = serde_json::from_str(json).map_err(|source| ReportError::Deserialize {
        context: "report".to_string(),
        source,
    })?;
    RawReport::from_value(value)
}

/// One evaluated brand name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawBrandEvaluation {
    #[serde(deserialize_with = "lenient::string")]
    pub brand_name: Option<String>,

    /// Older payloads used `name` instead of `brand_name`.
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,

    /// Overall score on 0–100.
    #[serde(deserialize_with = "lenient::number")]
    pub namescore: Option<f64>,

    #[serde(deserialize_with = "lenient::string")]
    pub verdict: Option<String>,

    #[serde(deserialize_with = "lenient::vec")]
    pub dimensions: Vec<RawDimension>,

    #[serde(deserialize_with = "lenient::string")]
    pub strategic_classification: Option<String>,

    #[serde(deserialize_with = "lenient::string_vec")]
    pub pros: Vec<String>,

    #[serde(deserialize_with = "lenient::string_vec")]
    pub cons: Vec<String>,

    #[serde(deserialize_with = "lenient::opt")]
    pub final_assessment: Option<RawFinalAssessment>,

    #[serde(deserialize_with = "lenient::opt")]
    pub domain_analysis: Option<RawDomainAnalysis>,

    #[serde(deserialize_with = "lenient::opt")]
    pub multi_domain_availability: Option<RawMultiDomain>,

    #[serde(deserialize_with = "lenient::opt")]
    pub visibility_analysis: Option<RawVisibilityAnalysis>,

    #[serde(deserialize_with = "lenient::vec")]
    pub cultural_analysis: Vec<RawCulturalEntry>,

    #[serde(deserialize_with = "lenient::opt")]
    pub competitor_analysis: Option<RawCompetitorAnalysis>,

    #[serde(deserialize_with = "lenient::vec")]
    pub country_competitor_analysis: Vec<RawCountryCompetitors>,

    #[serde(deserialize_with = "lenient::opt")]
    pub trademark_matrix: Option<RawTrademarkMatrix>,

    #[serde(deserialize_with = "lenient::opt")]
    pub trademark_research: Option<RawTrademarkResearch>,

    #[serde(deserialize_with = "lenient::opt")]
    pub social_availability: Option<RawLegacySocial>,

    #[serde(deserialize_with = "lenient::opt")]
    pub enhanced_social_availability: Option<RawEnhancedSocial>,

    /// Strategy-framework deep dive. Kept as a JSON map because its module
    /// set differs between report versions.
    #[serde(deserialize_with = "lenient::opt")]
    pub mckinsey_analysis: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawDimension {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient::number")]
    pub score: Option<f64>,

    #[serde(deserialize_with = "lenient::string")]
    pub reasoning: Option<String>,
}

/// Country as a bare name or a `{name, flag}` object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCountry {
    Name(String),
    Detailed(RawCountryDetail),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCountryDetail {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub flag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCulturalEntry {
    #[serde(deserialize_with = "lenient::opt")]
    pub country: Option<RawCountry>,

    #[serde(deserialize_with = "lenient::number")]
    pub cultural_resonance_score: Option<f64>,

    #[serde(deserialize_with = "lenient::opt")]
    pub score_breakdown: Option<RawScoreBreakdown>,

    #[serde(deserialize_with = "lenient::string")]
    pub cultural_notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawScoreBreakdown {
    #[serde(deserialize_with = "lenient::number")]
    pub safety_score: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub fluency_score: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub vibe_score: Option<f64>,

    #[serde(deserialize_with = "lenient::string")]
    pub risk_verdict: Option<String>,

    #[serde(deserialize_with = "lenient::number")]
    pub final_score: Option<f64>,
}

/// Percentile coordinates, either as `{x, y}` or `{x_coordinate, y_coordinate}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCoordinates {
    #[serde(deserialize_with = "lenient::number")]
    pub x: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub y: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub x_coordinate: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub y_coordinate: Option<f64>,
}

/// A competitor or conflicting mark. Field names differ between the
/// competitor, visibility, and trademark sections, so every spelling is kept
/// and resolved during normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCompetitor {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub brand: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub mark: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub risk_level: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub category: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub positioning: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub reason: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub commentary: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub reasoning: Option<String>,

    #[serde(deserialize_with = "lenient::number")]
    pub x_coordinate: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub y_coordinate: Option<f64>,

    #[serde(deserialize_with = "lenient::opt")]
    pub coordinates: Option<RawCoordinates>,
}

/// Competitor analysis as a flat array (legacy) or an object with axes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCompetitorAnalysis {
    Flat(Vec<RawCompetitor>),
    Detailed(RawCompetitorDetail),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCompetitorDetail {
    #[serde(deserialize_with = "lenient::vec")]
    pub competitors: Vec<RawCompetitor>,

    #[serde(deserialize_with = "lenient::string")]
    pub x_axis_label: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub y_axis_label: Option<String>,

    #[serde(deserialize_with = "lenient::opt")]
    pub user_brand_position: Option<RawCoordinates>,

    #[serde(deserialize_with = "lenient::string")]
    pub white_space_analysis: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub strategic_advantage: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub suggested_pricing: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCountryCompetitors {
    #[serde(deserialize_with = "lenient::opt")]
    pub country: Option<RawCountry>,

    #[serde(flatten)]
    pub analysis: RawCompetitorDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawVisibilityAnalysis {
    #[serde(deserialize_with = "lenient::string")]
    pub user_intent: Option<String>,

    #[serde(deserialize_with = "lenient::boolean")]
    pub warning_triggered: Option<bool>,

    #[serde(deserialize_with = "lenient::string")]
    pub warning_reason: Option<String>,

    #[serde(deserialize_with = "lenient::vec")]
    pub direct_competitors: Vec<RawCompetitor>,

    #[serde(deserialize_with = "lenient::vec")]
    pub phonetic_conflicts: Vec<RawCompetitor>,
}

/// A platform entry in either social availability generation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPlatform {
    #[serde(deserialize_with = "lenient::string")]
    pub platform: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub handle: Option<String>,

    #[serde(deserialize_with = "lenient::boolean")]
    pub available: Option<bool>,

    #[serde(deserialize_with = "lenient::string")]
    pub status: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawLegacySocial {
    #[serde(deserialize_with = "lenient::string")]
    pub handle: Option<String>,

    #[serde(deserialize_with = "lenient::vec")]
    pub platforms: Vec<RawPlatform>,

    #[serde(deserialize_with = "lenient::vec")]
    pub handles: Vec<RawPlatform>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawEnhancedSocial {
    #[serde(deserialize_with = "lenient::string")]
    pub handle: Option<String>,

    #[serde(deserialize_with = "lenient::vec")]
    pub platforms: Vec<RawPlatform>,

    #[serde(deserialize_with = "lenient::opt")]
    pub summary: Option<RawSocialSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawSocialSummary {
    #[serde(deserialize_with = "lenient::number")]
    pub total_platforms: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub available_count: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub taken_count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawDomainEntry {
    #[serde(deserialize_with = "lenient::string")]
    pub domain: Option<String>,

    #[serde(deserialize_with = "lenient::boolean")]
    pub available: Option<bool>,

    #[serde(deserialize_with = "lenient::string")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawMultiDomain {
    #[serde(deserialize_with = "lenient::vec")]
    pub category_domains: Vec<RawDomainEntry>,

    #[serde(deserialize_with = "lenient::vec")]
    pub country_domains: Vec<RawDomainEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawDomainAnalysis {
    /// Primary domain checked; derived from the brand name when absent.
    #[serde(deserialize_with = "lenient::string")]
    pub domain: Option<String>,

    /// Free text such as `"TAKEN"` or `"Available"`.
    #[serde(deserialize_with = "lenient::string")]
    pub exact_match_status: Option<String>,

    #[serde(deserialize_with = "lenient::vec")]
    pub alternatives: Vec<RawDomainEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawMatrixCell {
    #[serde(deserialize_with = "lenient::number")]
    pub likelihood: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub severity: Option<f64>,

    #[serde(deserialize_with = "lenient::string")]
    pub zone: Option<String>,

    #[serde(deserialize_with = "lenient::string")]
    pub commentary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawTrademarkMatrix {
    #[serde(deserialize_with = "lenient::opt")]
    pub genericness: Option<RawMatrixCell>,

    #[serde(deserialize_with = "lenient::opt")]
    pub existing_conflicts: Option<RawMatrixCell>,

    #[serde(deserialize_with = "lenient::opt")]
    pub phonetic_similarity: Option<RawMatrixCell>,

    #[serde(deserialize_with = "lenient::opt")]
    pub relevant_classes: Option<RawMatrixCell>,

    #[serde(deserialize_with = "lenient::opt")]
    pub rebranding_probability: Option<RawMatrixCell>,

    #[serde(deserialize_with = "lenient::string")]
    pub overall_assessment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawTrademarkResearch {
    #[serde(deserialize_with = "lenient::number")]
    pub overall_risk_score: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub registration_success_probability: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub opposition_probability: Option<f64>,

    #[serde(deserialize_with = "lenient::vec")]
    pub trademark_conflicts: Vec<RawCompetitor>,

    #[serde(deserialize_with = "lenient::vec")]
    pub company_conflicts: Vec<RawCompetitor>,

    #[serde(deserialize_with = "lenient::number")]
    pub critical_conflicts_count: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub high_risk_conflicts_count: Option<f64>,

    #[serde(deserialize_with = "lenient::number")]
    pub total_conflicts_found: Option<f64>,
}

/// Final assessment as a plain paragraph (legacy) or a structured object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawFinalAssessment {
    Text(String),
    Detailed(RawFinalAssessmentDetail),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawFinalAssessmentDetail {
    #[serde(deserialize_with = "lenient::string")]
    pub verdict: Option<String>,

    #[serde(deserialize_with = "lenient::number")]
    pub suitability_score: Option<f64>,

    #[serde(deserialize_with = "lenient::string")]
    pub bottom_line: Option<String>,

    #[serde(deserialize_with = "lenient::string_vec")]
    pub recommendations: Vec<String>,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field deserializers that never fail on shape mismatches.
///
/// Each one first buffers the field as a [`Value`] and then interprets it,
/// mapping anything unexpected to `None` or an empty collection.
pub(crate) mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(as_string(Value::deserialize(deserializer)?))
    }

    pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(as_number(&Value::deserialize(deserializer)?))
    }

    pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(b) => Some(b),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                _ => None,
            },
            _ => None,
        })
    }

    pub(crate) fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(serde_json::from_value(value).ok())
    }

    pub(crate) fn vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Accepts an array of strings or a single string.
    pub(crate) fn string_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Array(items) => items.into_iter().filter_map(as_string).collect(),
            other => as_string(other).into_iter().collect(),
        })
    }

    fn as_string(value: Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn as_number(value: &Value) -> Option<f64> {
        let n = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().trim_end_matches('%').trim_end().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parse_report_rejects_invalid_json() {
        let err = parse_report("{not json").unwrap_err();
        assert!(matches!(err, ReportError::Deserialize { .. }));
    }

    #[test]
    fn parse_report_rejects_non_object_root() {
        let err = parse_report("[1, 2]").unwrap_err();
        assert!(matches!(err, ReportError::NotAnObject { found: "array" }));
    }

    #[test]
    fn empty_object_parses_to_default() {
        let report = parse_report("{}").unwrap();
        assert_eq!(report, RawReport::default());
    }

    #[test]
    fn numeric_strings_are_accepted() {
        let report = RawReport::from_value(json!({
            "brand_scores": [{"namescore": "82", "dimensions": [{"name": "Fit", "score": "7.5"}]}]
        }))
        .unwrap();
        let eval = &report.brand_scores[0];
        assert_eq!(eval.namescore, Some(82.0));
        assert_eq!(eval.dimensions[0].score, Some(7.5));
    }

    #[test]
    fn non_finite_numeric_strings_are_absent() {
        let report = RawReport::from_value(json!({
            "brand_scores": [{"namescore": "NaN"}]
        }))
        .unwrap();
        assert_eq!(report.brand_scores[0].namescore, None);
    }

    #[test]
    fn wrongly_shaped_fields_become_absent() {
        let report = RawReport::from_value(json!({
            "report_id": {"nested": true},
            "brand_scores": [{
                "brand_name": "Acme",
                "dimensions": "not an array",
                "trademark_matrix": 42,
                "domain_analysis": ["unexpected"],
                "pros": "Short and memorable"
            }]
        }))
        .unwrap();
        assert!(report.report_id.is_none());
        let eval = &report.brand_scores[0];
        assert_eq!(eval.brand_name.as_deref(), Some("Acme"));
        assert!(eval.dimensions.is_empty());
        assert!(eval.trademark_matrix.is_none());
        assert!(eval.domain_analysis.is_none());
        assert_eq!(eval.pros, vec!["Short and memorable".to_string()]);
    }

    #[test]
    fn malformed_array_items_are_skipped() {
        let report = RawReport::from_value(json!({
            "brand_scores": [{"cultural_analysis": [{"country": "India"}, 7, "x"]}]
        }))
        .unwrap();
        assert_eq!(report.brand_scores[0].cultural_analysis.len(), 1);
    }

    #[test]
    fn country_variants_deserialize() {
        let plain: RawCountry = serde_json::from_value(json!("India")).unwrap();
        assert_eq!(plain, RawCountry::Name("India".to_string()));

        let detailed: RawCountry =
            serde_json::from_value(json!({"name": "India", "flag": "🇮🇳"})).unwrap();
        assert!(
            matches!(detailed, RawCountry::Detailed(RawCountryDetail { name: Some(ref n), .. }) if n == "India")
        );

        let other: RawCountry = serde_json::from_value(json!(12)).unwrap();
        assert!(matches!(other, RawCountry::Other(_)));
    }

    #[test]
    fn competitor_analysis_variants_deserialize() {
        let flat: RawCompetitorAnalysis =
            serde_json::from_value(json!([{"name": "Rival"}])).unwrap();
        assert!(matches!(flat, RawCompetitorAnalysis::Flat(ref c) if c.len() == 1));

        let detailed: RawCompetitorAnalysis = serde_json::from_value(json!({
            "x_axis_label": "Price",
            "competitors": [{"name": "Rival", "x_coordinate": 40, "y_coordinate": 70}]
        }))
        .unwrap();
        assert!(
            matches!(detailed, RawCompetitorAnalysis::Detailed(ref d) if d.competitors.len() == 1)
        );
    }

    #[test]
    fn country_competitors_flatten_analysis_fields() {
        let entry: RawCountryCompetitors = serde_json::from_value(json!({
            "country": {"name": "Japan", "flag": "🇯🇵"},
            "x_axis_label": "Price",
            "competitors": [{"brand": "Rival"}]
        }))
        .unwrap();
        assert_eq!(entry.analysis.x_axis_label.as_deref(), Some("Price"));
        assert_eq!(entry.analysis.competitors[0].brand.as_deref(), Some("Rival"));
    }

    #[test]
    fn final_assessment_accepts_plain_text() {
        let fa: RawFinalAssessment = serde_json::from_value(json!("Proceed.")).unwrap();
        assert_eq!(fa, RawFinalAssessment::Text("Proceed.".to_string()));
    }

    #[test]
    fn boolean_strings_are_accepted() {
        let entry: RawDomainEntry =
            serde_json::from_value(json!({"domain": "acme.io", "available": "yes"})).unwrap();
        assert_eq!(entry.available, Some(true));
    }
}
