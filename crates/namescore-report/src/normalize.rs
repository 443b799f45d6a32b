//! Normalization from raw payload types to the canonical
//! [`namescore_core::NormalizedReport`].
//!
//! Every accessor here is total: missing or wrongly shaped input yields a
//! documented default (`"N/A"`, `"Not specified"`, an empty list, or `None`)
//! instead of an error. Where two schema generations describe the same
//! concept, the newer one wins in full and the two are never merged.

use namescore_core::{
    CompetitorLandscape, CompetitorRecord, CountryLandscape, CulturalEntry, Dimension,
    DomainScope, DomainStatus, FinalAssessment, FrameworkDetail, FrameworkModule,
    MarketIntelligence, MatrixPoint, NormalizedEvaluation, NormalizedReport, PlatformStatus,
    RiskLevel, ScoreBreakdown, SocialAvailability, SocialSource, SocialSummary, TrademarkMatrix,
    TrademarkMatrixRow, TrademarkResearch, Verdict,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::sanitize::{reasoning_blocks, sanitize, sanitize_opt, strip_formula_sections};
use crate::types::{
    RawBrandEvaluation, RawCompetitor, RawCompetitorAnalysis, RawCompetitorDetail, RawCoordinates,
    RawCountry, RawCountryCompetitors, RawCulturalEntry, RawDimension, RawDomainEntry,
    RawFinalAssessment, RawMatrixCell, RawPlatform, RawReport, RawSocialSummary,
    RawTrademarkMatrix, RawTrademarkResearch, RawVisibilityAnalysis,
};

/// Placeholder for a missing country.
pub const COUNTRY_PLACEHOLDER: &str = "Not specified";

/// Placeholder for any other missing text field.
pub const NOT_AVAILABLE: &str = "N/A";

const DEFAULT_X_AXIS: &str = "Price";
const DEFAULT_Y_AXIS: &str = "Style";

/// Normalizes a raw report. Borrows the payload and never modifies it.
#[must_use]
pub fn normalize_report(raw: &RawReport) -> NormalizedReport {
    let evaluations: Vec<NormalizedEvaluation> =
        raw.brand_scores.iter().map(normalize_evaluation).collect();

    debug!(
        report_id = raw.report_id.as_deref().unwrap_or(NOT_AVAILABLE),
        evaluations = evaluations.len(),
        "normalized report"
    );

    NormalizedReport {
        report_id: trimmed(raw.report_id.as_deref())
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        executive_summary: raw
            .executive_summary
            .as_deref()
            .map(sanitize)
            .unwrap_or_default(),
        evaluations,
    }
}

/// Normalizes one raw brand evaluation.
#[must_use]
pub fn normalize_evaluation(raw: &RawBrandEvaluation) -> NormalizedEvaluation {
    let brand_name = trimmed(raw.brand_name.as_deref())
        .or_else(|| trimmed(raw.name.as_deref()))
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    let cultural_analysis = raw.cultural_analysis.iter().map(cultural_entry).collect();

    NormalizedEvaluation {
        namescore: raw.namescore.map(to_percent),
        verdict: parse_verdict(raw.verdict.as_deref()),
        dimensions: raw.dimensions.iter().filter_map(dimension).collect(),
        strategic_classification: sanitize_opt(raw.strategic_classification.as_deref()),
        pros: sanitize_list(&raw.pros),
        cons: sanitize_list(&raw.cons),
        final_assessment: final_assessment(raw.final_assessment.as_ref()),
        market_intelligence: market_intelligence(raw.visibility_analysis.as_ref()),
        cultural_analysis,
        competitor_landscape: competitor_landscape(raw.competitor_analysis.as_ref()),
        country_landscapes: country_landscapes(&raw.country_competitor_analysis),
        domains: domain_entries(raw),
        social: social_availability(raw),
        trademark_matrix: trademark_matrix(raw.trademark_matrix.as_ref()),
        trademark_research: trademark_research(raw.trademark_research.as_ref()),
        framework: framework_detail(raw.mckinsey_analysis.as_ref()),
        brand_name,
    }
}

/// Parses a verdict string; absent or unrecognized text is [`Verdict::Unknown`].
#[must_use]
pub fn parse_verdict(raw: Option<&str>) -> Verdict {
    let Some(text) = raw else {
        return Verdict::Unknown;
    };
    let verdict = Verdict::parse(text);
    if verdict == Verdict::Unknown {
        debug!(verdict = text, "unrecognized verdict, treating as unknown");
    }
    verdict
}

// ---------------------------------------------------------------------------
// Country
// ---------------------------------------------------------------------------

/// Country display name from either shape, or [`COUNTRY_PLACEHOLDER`].
#[must_use]
pub fn country_name(country: Option<&RawCountry>) -> String {
    let name = match country {
        Some(RawCountry::Name(name)) => trimmed(Some(name.as_str())),
        Some(RawCountry::Detailed(detail)) => trimmed(detail.name.as_deref()),
        Some(RawCountry::Other(_)) | None => None,
    };
    name.unwrap_or(COUNTRY_PLACEHOLDER).to_string()
}

/// Country flag, present only in the object shape.
#[must_use]
pub fn country_flag(country: Option<&RawCountry>) -> Option<String> {
    match country {
        Some(RawCountry::Detailed(detail)) => trimmed(detail.flag.as_deref()).map(str::to_string),
        _ => None,
    }
}

fn cultural_entry(raw: &RawCulturalEntry) -> CulturalEntry {
    let breakdown = raw.score_breakdown.as_ref();
    CulturalEntry {
        country: country_name(raw.country.as_ref()),
        flag: country_flag(raw.country.as_ref()),
        score: raw
            .cultural_resonance_score
            .or_else(|| breakdown.and_then(|b| b.final_score))
            .map(|s| s.clamp(0.0, 10.0)),
        breakdown: breakdown.map(|b| ScoreBreakdown {
            safety_score: b.safety_score.map(|s| s.clamp(0.0, 10.0)),
            fluency_score: b.fluency_score.map(|s| s.clamp(0.0, 10.0)),
            vibe_score: b.vibe_score.map(|s| s.clamp(0.0, 10.0)),
            risk_verdict: trimmed(b.risk_verdict.as_deref()).map(str::to_string),
        }),
        notes: raw
            .cultural_notes
            .as_deref()
            .map(|notes| sanitize(&strip_formula_sections(notes)))
            .unwrap_or_default(),
    }
}

// ---------------------------------------------------------------------------
// Dimensions and assessment
// ---------------------------------------------------------------------------

/// Dimensions with neither a name nor a score carry nothing to show and are dropped.
fn dimension(raw: &RawDimension) -> Option<Dimension> {
    let name = trimmed(raw.name.as_deref());
    if name.is_none() && raw.score.is_none() {
        return None;
    }
    Some(Dimension {
        name: name.unwrap_or(NOT_AVAILABLE).to_string(),
        score: raw.score.map(|s| s.clamp(0.0, 10.0)),
        reasoning: raw
            .reasoning
            .as_deref()
            .map(reasoning_blocks)
            .unwrap_or_default(),
    })
}

fn final_assessment(raw: Option<&RawFinalAssessment>) -> Option<FinalAssessment> {
    match raw? {
        RawFinalAssessment::Text(text) => {
            sanitize_opt(Some(text.as_str())).map(|bottom_line| FinalAssessment {
                verdict: None,
                suitability_score: None,
                bottom_line: Some(bottom_line),
                recommendations: Vec::new(),
            })
        }
        RawFinalAssessment::Detailed(detail) => {
            let assessment = FinalAssessment {
                verdict: detail
                    .verdict
                    .as_deref()
                    .map(|v| parse_verdict(Some(v)))
                    .filter(|v| *v != Verdict::Unknown),
                suitability_score: detail.suitability_score.map(|s| s.clamp(0.0, 100.0)),
                bottom_line: sanitize_opt(detail.bottom_line.as_deref()),
                recommendations: sanitize_list(&detail.recommendations),
            };
            let empty = assessment.verdict.is_none()
                && assessment.suitability_score.is_none()
                && assessment.bottom_line.is_none()
                && assessment.recommendations.is_empty();
            (!empty).then_some(assessment)
        }
        RawFinalAssessment::Other(_) => {
            debug!("final_assessment has an unrecognized shape, ignoring");
            None
        }
    }
}

fn market_intelligence(raw: Option<&RawVisibilityAnalysis>) -> Option<MarketIntelligence> {
    let raw = raw?;
    Some(MarketIntelligence {
        user_intent: sanitize_opt(raw.user_intent.as_deref()),
        warning_triggered: raw.warning_triggered.unwrap_or(false),
        warning_reason: sanitize_opt(raw.warning_reason.as_deref()),
        direct_competitors: competitor_records(&raw.direct_competitors),
        phonetic_conflicts: competitor_records(&raw.phonetic_conflicts),
    })
}

// ---------------------------------------------------------------------------
// Competitors
// ---------------------------------------------------------------------------

/// Normalizes a competitor or conflict record. Records with no name under any
/// of `name`, `brand` or `mark` are dropped.
#[must_use]
pub fn competitor_record(raw: &RawCompetitor) -> Option<CompetitorRecord> {
    let name = trimmed(raw.name.as_deref())
        .or_else(|| trimmed(raw.brand.as_deref()))
        .or_else(|| trimmed(raw.mark.as_deref()))?;

    let category = trimmed(raw.category.as_deref())
        .or_else(|| trimmed(raw.positioning.as_deref()))
        .map(str::to_string);

    let commentary = [&raw.reason, &raw.commentary, &raw.reasoning]
        .into_iter()
        .find_map(|text| sanitize_opt(text.as_deref()));

    let position = matrix_point(raw.x_coordinate, raw.y_coordinate)
        .or_else(|| raw.coordinates.as_ref().and_then(coordinates_point));

    Some(CompetitorRecord {
        name: name.to_string(),
        risk_level: raw
            .risk_level
            .as_deref()
            .map_or(RiskLevel::Unknown, RiskLevel::parse),
        category,
        commentary,
        position,
    })
}

fn competitor_records(raw: &[RawCompetitor]) -> Vec<CompetitorRecord> {
    raw.iter().filter_map(competitor_record).collect()
}

/// Reconciles the flat-array and detailed-object competitor analysis shapes.
#[must_use]
pub fn competitor_landscape(raw: Option<&RawCompetitorAnalysis>) -> Option<CompetitorLandscape> {
    match raw? {
        RawCompetitorAnalysis::Flat(competitors) => landscape(competitors, None),
        RawCompetitorAnalysis::Detailed(detail) => landscape(&detail.competitors, Some(detail)),
        RawCompetitorAnalysis::Other(_) => {
            debug!("competitor_analysis has an unrecognized shape, ignoring");
            None
        }
    }
}

/// Normalizes the per-country competitor arrays, dropping empty entries.
#[must_use]
pub fn country_landscapes(raw: &[RawCountryCompetitors]) -> Vec<CountryLandscape> {
    raw.iter()
        .filter_map(|entry| {
            let landscape = landscape(&entry.analysis.competitors, Some(&entry.analysis))?;
            Some(CountryLandscape {
                country: country_name(entry.country.as_ref()),
                flag: country_flag(entry.country.as_ref()),
                landscape,
            })
        })
        .collect()
}

fn landscape(
    competitors: &[RawCompetitor],
    detail: Option<&RawCompetitorDetail>,
) -> Option<CompetitorLandscape> {
    let competitors = competitor_records(competitors);

    let landscape = CompetitorLandscape {
        x_axis_label: detail
            .and_then(|d| trimmed(d.x_axis_label.as_deref()))
            .unwrap_or(DEFAULT_X_AXIS)
            .to_string(),
        y_axis_label: detail
            .and_then(|d| trimmed(d.y_axis_label.as_deref()))
            .unwrap_or(DEFAULT_Y_AXIS)
            .to_string(),
        competitors,
        subject_position: detail
            .and_then(|d| d.user_brand_position.as_ref())
            .and_then(coordinates_point),
        white_space: detail.and_then(|d| sanitize_opt(d.white_space_analysis.as_deref())),
        strategic_advantage: detail.and_then(|d| sanitize_opt(d.strategic_advantage.as_deref())),
        suggested_pricing: detail.and_then(|d| sanitize_opt(d.suggested_pricing.as_deref())),
    };

    let empty = landscape.competitors.is_empty()
        && landscape.subject_position.is_none()
        && landscape.white_space.is_none()
        && landscape.strategic_advantage.is_none()
        && landscape.suggested_pricing.is_none();
    (!empty).then_some(landscape)
}

fn coordinates_point(raw: &RawCoordinates) -> Option<MatrixPoint> {
    matrix_point(raw.x.or(raw.x_coordinate), raw.y.or(raw.y_coordinate))
}

fn matrix_point(x: Option<f64>, y: Option<f64>) -> Option<MatrixPoint> {
    Some(MatrixPoint {
        x: x?.clamp(0.0, 100.0),
        y: y?.clamp(0.0, 100.0),
    })
}

// ---------------------------------------------------------------------------
// Domains
// ---------------------------------------------------------------------------

/// Domain availability for an evaluation.
///
/// `multi_domain_availability` (category then country domains) wins in full
/// when present. Otherwise the legacy `domain_analysis` contributes its exact
/// match domain and alternatives.
#[must_use]
pub fn domain_entries(evaluation: &RawBrandEvaluation) -> Vec<DomainStatus> {
    if let Some(multi) = &evaluation.multi_domain_availability {
        return multi
            .category_domains
            .iter()
            .map(|d| (d, DomainScope::Category))
            .chain(
                multi
                    .country_domains
                    .iter()
                    .map(|d| (d, DomainScope::Country)),
            )
            .filter_map(|(d, scope)| domain_status(d, scope))
            .collect();
    }

    let Some(legacy) = &evaluation.domain_analysis else {
        return Vec::new();
    };
    debug!("using legacy domain_analysis shape");

    let mut entries = Vec::with_capacity(legacy.alternatives.len() + 1);
    let primary = trimmed(legacy.domain.as_deref())
        .map(str::to_string)
        .or_else(|| {
            let brand = evaluation.brand_name.as_deref().or(evaluation.name.as_deref())?;
            primary_domain_for(brand)
        });
    if let Some(domain) = primary {
        if legacy.exact_match_status.is_some() || legacy.domain.is_some() {
            entries.push(DomainStatus {
                domain,
                available: is_available(None, legacy.exact_match_status.as_deref()),
                status: trimmed(legacy.exact_match_status.as_deref()).map(str::to_string),
                scope: DomainScope::Primary,
            });
        }
    }
    entries.extend(
        legacy
            .alternatives
            .iter()
            .filter_map(|d| domain_status(d, DomainScope::Alternative)),
    );
    entries
}

fn domain_status(raw: &RawDomainEntry, scope: DomainScope) -> Option<DomainStatus> {
    let domain = trimmed(raw.domain.as_deref())?;
    Some(DomainStatus {
        domain: domain.to_string(),
        available: is_available(raw.available, raw.status.as_deref()),
        status: trimmed(raw.status.as_deref()).map(str::to_string),
        scope,
    })
}

/// `<brand>.com` from the brand's ASCII letters and digits.
fn primary_domain_for(brand: &str) -> Option<String> {
    let slug: String = brand
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!slug.is_empty()).then(|| format!("{slug}.com"))
}

/// An explicit flag wins; otherwise the status text decides.
fn is_available(explicit: Option<bool>, status: Option<&str>) -> bool {
    explicit.unwrap_or_else(|| status.is_some_and(status_says_available))
}

/// True when the status mentions "available" without negating it.
#[must_use]
pub fn status_says_available(status: &str) -> bool {
    let lower = status.to_lowercase();
    lower.contains("available")
        && !lower.contains("unavailable")
        && !lower.contains("not available")
}

// ---------------------------------------------------------------------------
// Social handles
// ---------------------------------------------------------------------------

/// Platform availability, enhanced shape first, then legacy `platforms`,
/// then legacy `handles`.
#[must_use]
pub fn social_handles(evaluation: &RawBrandEvaluation) -> Vec<PlatformStatus> {
    social_availability(evaluation).platforms
}

/// Full social availability including the summary and which shape it came from.
#[must_use]
pub fn social_availability(evaluation: &RawBrandEvaluation) -> SocialAvailability {
    if let Some(enhanced) = &evaluation.enhanced_social_availability {
        let platforms = platform_statuses(&enhanced.platforms);
        let summary = enhanced.summary.as_ref().map_or_else(
            || social_summary(&platforms),
            |raw| summary_from(raw, &platforms),
        );
        return SocialAvailability {
            handle: trimmed(enhanced.handle.as_deref()).map(str::to_string),
            platforms,
            summary,
            source: SocialSource::Enhanced,
        };
    }

    if let Some(legacy) = &evaluation.social_availability {
        debug!("using legacy social_availability shape");
        let list = if legacy.platforms.is_empty() {
            &legacy.handles
        } else {
            &legacy.platforms
        };
        let platforms = platform_statuses(list);
        return SocialAvailability {
            handle: trimmed(legacy.handle.as_deref()).map(str::to_string),
            summary: social_summary(&platforms),
            platforms,
            source: SocialSource::Legacy,
        };
    }

    SocialAvailability::missing()
}

/// Derives totals from a platform list.
#[must_use]
pub fn social_summary(platforms: &[PlatformStatus]) -> SocialSummary {
    let total = count_u32(platforms.len());
    let available = count_u32(platforms.iter().filter(|p| p.available).count());
    SocialSummary {
        total,
        available,
        taken: total - available,
    }
}

fn summary_from(raw: &RawSocialSummary, platforms: &[PlatformStatus]) -> SocialSummary {
    let derived = social_summary(platforms);
    let total = raw.total_platforms.map_or(derived.total, to_count);
    let available = raw.available_count.map_or(derived.available, to_count);
    SocialSummary {
        total,
        available,
        taken: raw
            .taken_count
            .map_or_else(|| total.saturating_sub(available), to_count),
    }
}

fn platform_statuses(raw: &[RawPlatform]) -> Vec<PlatformStatus> {
    raw.iter()
        .filter_map(|p| {
            let platform = trimmed(p.platform.as_deref())?;
            Some(PlatformStatus {
                platform: platform.to_string(),
                handle: trimmed(p.handle.as_deref()).map(str::to_string),
                available: is_available(p.available, p.status.as_deref()),
                status: trimmed(p.status.as_deref()).map(str::to_string),
                url: trimmed(p.url.as_deref()).map(str::to_string),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Trademark
// ---------------------------------------------------------------------------

fn trademark_matrix(raw: Option<&RawTrademarkMatrix>) -> Option<TrademarkMatrix> {
    let raw = raw?;
    let cells: [(&str, &Option<RawMatrixCell>); 5] = [
        ("Genericness", &raw.genericness),
        ("Existing Conflicts", &raw.existing_conflicts),
        ("Phonetic Similarity", &raw.phonetic_similarity),
        ("Relevant Classes", &raw.relevant_classes),
        ("Rebranding Probability", &raw.rebranding_probability),
    ];

    let rows: Vec<TrademarkMatrixRow> = cells
        .into_iter()
        .filter_map(|(factor, cell)| {
            let cell = cell.as_ref()?;
            Some(TrademarkMatrixRow {
                factor: factor.to_string(),
                likelihood: cell.likelihood.map(|v| v.clamp(0.0, 10.0)),
                severity: cell.severity.map(|v| v.clamp(0.0, 10.0)),
                zone: trimmed(cell.zone.as_deref()).map(str::to_string),
                commentary: sanitize_opt(cell.commentary.as_deref()),
            })
        })
        .collect();
    let overall_assessment = sanitize_opt(raw.overall_assessment.as_deref());

    if rows.is_empty() && overall_assessment.is_none() {
        return None;
    }
    Some(TrademarkMatrix {
        rows,
        overall_assessment,
    })
}

fn trademark_research(raw: Option<&RawTrademarkResearch>) -> Option<TrademarkResearch> {
    let raw = raw?;
    let trademark_conflicts = competitor_records(&raw.trademark_conflicts);
    let company_conflicts = competitor_records(&raw.company_conflicts);

    let all = || trademark_conflicts.iter().chain(company_conflicts.iter());
    let derived_critical = count_u32(
        all()
            .filter(|c| matches!(c.risk_level, RiskLevel::Critical | RiskLevel::Fatal))
            .count(),
    );
    let derived_high = count_u32(all().filter(|c| c.risk_level == RiskLevel::High).count());
    let derived_total = count_u32(trademark_conflicts.len() + company_conflicts.len());

    let research = TrademarkResearch {
        overall_risk_score: raw.overall_risk_score.map(|v| v.clamp(0.0, 10.0)),
        registration_success_probability: raw
            .registration_success_probability
            .map(|v| v.clamp(0.0, 100.0)),
        opposition_probability: raw.opposition_probability.map(|v| v.clamp(0.0, 100.0)),
        critical_conflicts: raw
            .critical_conflicts_count
            .map_or(derived_critical, to_count),
        high_risk_conflicts: raw.high_risk_conflicts_count.map_or(derived_high, to_count),
        total_conflicts: raw.total_conflicts_found.map_or(derived_total, to_count),
        trademark_conflicts,
        company_conflicts,
    };

    let empty = research.overall_risk_score.is_none()
        && research.registration_success_probability.is_none()
        && research.opposition_probability.is_none()
        && research.trademark_conflicts.is_empty()
        && research.company_conflicts.is_empty()
        && research.total_conflicts == 0;
    (!empty).then_some(research)
}

// ---------------------------------------------------------------------------
// Strategy framework
// ---------------------------------------------------------------------------

const FRAMEWORK_RECOMMENDATION: &str = "executive_recommendation";
const FRAMEWORK_RATIONALE: &str = "recommendation_rationale";
const FRAMEWORK_CRITICAL: &str = "critical_assessment";

/// Top-level string fields map to the summary slots; every object-valued key
/// becomes a module whose scalar fields are listed in key order.
fn framework_detail(raw: Option<&Map<String, Value>>) -> Option<FrameworkDetail> {
    let raw = raw?;
    let text = |key: &str| raw.get(key).and_then(value_text);

    let modules: Vec<FrameworkModule> = raw
        .iter()
        .filter_map(|(key, value)| {
            let fields = value.as_object()?;
            let entries: Vec<(String, String)> = fields
                .iter()
                .filter_map(|(k, v)| Some((titleize(k), value_text(v)?)))
                .collect();
            (!entries.is_empty()).then(|| FrameworkModule {
                key: key.clone(),
                title: titleize(key),
                entries,
            })
        })
        .collect();

    let detail = FrameworkDetail {
        recommendation: text(FRAMEWORK_RECOMMENDATION),
        rationale: text(FRAMEWORK_RATIONALE),
        critical_assessment: text(FRAMEWORK_CRITICAL),
        modules,
    };

    let empty = detail.recommendation.is_none()
        && detail.rationale.is_none()
        && detail.critical_assessment.is_none()
        && detail.modules.is_empty();
    (!empty).then_some(detail)
}

/// Display text for a scalar or a list of scalars; nested objects yield `None`.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => sanitize_opt(Some(s.as_str())),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "Yes" } else { "No" }.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Null | Value::Object(_) => None,
    }
}

fn titleize(key: &str) -> String {
    key.split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn sanitize_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| sanitize_opt(Some(item.as_str())))
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u32 {
    value.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

fn count_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
