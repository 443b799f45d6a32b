//! Canonical report model.
//!
//! Upstream payloads arrive in several historical shapes; the pipeline in
//! `namescore-report` converges them onto these types once, at load time.
//! Nothing downstream of this model branches on payload shape.

use serde::{Deserialize, Serialize};

/// A fully normalized report. Only the first evaluation is surfaced by the
/// view builder, but all of them are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedReport {
    pub report_id: String,
    /// Sanitized executive summary markup.
    pub executive_summary: String,
    pub evaluations: Vec<NormalizedEvaluation>,
}

impl NormalizedReport {
    /// The evaluation shown by the report view.
    #[must_use]
    pub fn primary(&self) -> Option<&NormalizedEvaluation> {
        self.evaluations.first()
    }
}

/// Recommendation label attached to a brand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Go,
    ConditionalGo,
    NoGo,
    Reject,
    Unknown,
}

impl Verdict {
    /// Parse a verdict by exact (case-insensitive, trimmed) match against the
    /// known spellings. Anything else is [`Verdict::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "GO" => Verdict::Go,
            "CONDITIONAL GO" | "CONDITIONAL_GO" | "CONDITIONAL-GO" => Verdict::ConditionalGo,
            "NO-GO" | "NO_GO" | "NO GO" => Verdict::NoGo,
            "REJECT" => Verdict::Reject,
            _ => Verdict::Unknown,
        }
    }

    /// Display label used on score cards.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Go => "GO",
            Verdict::ConditionalGo => "CONDITIONAL GO",
            Verdict::NoGo => "NO-GO",
            Verdict::Reject => "REJECT",
            Verdict::Unknown => "PENDING",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Risk level of a conflict or competitor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
    Fatal,
    Unknown,
}

impl RiskLevel {
    /// Case-insensitive parse; unrecognized text maps to [`RiskLevel::Unknown`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "NONE" => RiskLevel::None,
            "LOW" => RiskLevel::Low,
            "MEDIUM" | "MODERATE" => RiskLevel::Medium,
            "HIGH" => RiskLevel::High,
            "CRITICAL" => RiskLevel::Critical,
            "FATAL" => RiskLevel::Fatal,
            _ => RiskLevel::Unknown,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::None => "None",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
            RiskLevel::Fatal => "Fatal",
            RiskLevel::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEvaluation {
    pub brand_name: String,
    /// Overall score, rounded and clamped to 0–100. `None` when absent or not a number.
    pub namescore: Option<u8>,
    pub verdict: Verdict,
    pub dimensions: Vec<Dimension>,
    pub strategic_classification: Option<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub final_assessment: Option<FinalAssessment>,
    pub market_intelligence: Option<MarketIntelligence>,
    pub cultural_analysis: Vec<CulturalEntry>,
    pub competitor_landscape: Option<CompetitorLandscape>,
    pub country_landscapes: Vec<CountryLandscape>,
    pub domains: Vec<DomainStatus>,
    pub social: SocialAvailability,
    pub trademark_matrix: Option<TrademarkMatrix>,
    pub trademark_research: Option<TrademarkResearch>,
    pub framework: Option<FrameworkDetail>,
}

/// One scored axis of name quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    /// Within `[0, 10]` when present; `None` when the payload gave no score.
    pub score: Option<f64>,
    pub reasoning: Vec<ReasoningBlock>,
}

/// A slice of free-text reasoning, optionally introduced by an embedded sub-header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningBlock {
    pub heading: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAssessment {
    pub verdict: Option<Verdict>,
    pub suitability_score: Option<f64>,
    pub bottom_line: Option<String>,
    pub recommendations: Vec<String>,
}

/// Search visibility and intent analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIntelligence {
    pub user_intent: Option<String>,
    pub warning_triggered: bool,
    pub warning_reason: Option<String>,
    pub direct_competitors: Vec<CompetitorRecord>,
    pub phonetic_conflicts: Vec<CompetitorRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalEntry {
    pub country: String,
    pub flag: Option<String>,
    /// `cultural_resonance_score`, else `score_breakdown.final_score`, on 0–10.
    pub score: Option<f64>,
    pub breakdown: Option<ScoreBreakdown>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub safety_score: Option<f64>,
    pub fluency_score: Option<f64>,
    pub vibe_score: Option<f64>,
    pub risk_verdict: Option<String>,
}

/// Percentile placement on a positioning matrix; both axes within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatrixPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    pub name: String,
    pub risk_level: RiskLevel,
    pub category: Option<String>,
    pub commentary: Option<String>,
    pub position: Option<MatrixPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorLandscape {
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub competitors: Vec<CompetitorRecord>,
    /// Where the evaluated name sits on the same matrix.
    pub subject_position: Option<MatrixPoint>,
    pub white_space: Option<String>,
    pub strategic_advantage: Option<String>,
    pub suggested_pricing: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryLandscape {
    pub country: String,
    pub flag: Option<String>,
    pub landscape: CompetitorLandscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainScope {
    Primary,
    Alternative,
    Category,
    Country,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStatus {
    pub domain: String,
    pub available: bool,
    pub status: Option<String>,
    pub scope: DomainScope,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformStatus {
    pub platform: String,
    pub handle: Option<String>,
    pub available: bool,
    pub status: Option<String>,
    pub url: Option<String>,
}

/// Which schema generation the social availability came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialSource {
    Enhanced,
    Legacy,
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSummary {
    pub total: u32,
    pub available: u32,
    pub taken: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAvailability {
    pub handle: Option<String>,
    pub platforms: Vec<PlatformStatus>,
    pub summary: SocialSummary,
    pub source: SocialSource,
}

impl SocialAvailability {
    #[must_use]
    pub fn missing() -> Self {
        Self {
            handle: None,
            platforms: Vec::new(),
            summary: SocialSummary {
                total: 0,
                available: 0,
                taken: 0,
            },
            source: SocialSource::Missing,
        }
    }
}

/// Likelihood × severity grid for trademark risk factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkMatrix {
    pub rows: Vec<TrademarkMatrixRow>,
    pub overall_assessment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkMatrixRow {
    pub factor: String,
    pub likelihood: Option<f64>,
    pub severity: Option<f64>,
    pub zone: Option<String>,
    pub commentary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrademarkResearch {
    /// Overall legal risk on 0–10.
    pub overall_risk_score: Option<f64>,
    pub registration_success_probability: Option<f64>,
    pub opposition_probability: Option<f64>,
    pub trademark_conflicts: Vec<CompetitorRecord>,
    pub company_conflicts: Vec<CompetitorRecord>,
    pub critical_conflicts: u32,
    pub high_risk_conflicts: u32,
    pub total_conflicts: u32,
}

/// Strategy-framework deep dive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkDetail {
    pub recommendation: Option<String>,
    pub rationale: Option<String>,
    pub critical_assessment: Option<String>,
    pub modules: Vec<FrameworkModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkModule {
    pub key: String,
    pub title: String,
    pub entries: Vec<(String, String)>,
}
