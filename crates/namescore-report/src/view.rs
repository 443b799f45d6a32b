//! View-model builder: turns a normalized report into an ordered tree of
//! renderable sections for a given viewer and render context.

use namescore_core::{
    CompetitorLandscape, CompetitorRecord, DensityProfile, DomainScope, NormalizedEvaluation,
    NormalizedReport, PresentationProfile, ReasoningBlock, SocialSummary, Verdict,
};
use serde::Serialize;
use tracing::debug;

use crate::classify::{
    bar_width_pct, risk_style, verdict_bucket, Classifier, ColorBucket, RiskBucket, Scale,
    ScoreBucket,
};
use crate::layout::{plan_pages, BlockKind, PageBreak, RenderContext};
use crate::normalize::{normalize_report, NOT_AVAILABLE};
use crate::types::RawReport;
use crate::visibility::{resolve_sections, SectionKey, Visibility};

/// Who is looking at the report. Derived from an external session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Viewer {
    pub authenticated: bool,
}

impl Viewer {
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
        }
    }

    #[must_use]
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    pub report_id: String,
    pub context: RenderContext,
    pub density: DensityProfile,
    pub cover: CoverView,
    /// Drawn sections in canonical order. Absent sections are omitted.
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverView {
    pub brand_name: String,
    pub namescore: Option<u8>,
    pub score_bucket: Option<ScoreBucket>,
    pub verdict: Verdict,
    pub verdict_label: &'static str,
    pub verdict_bucket: ColorBucket,
    /// Print context only.
    pub page_break: Option<PageBreak>,
    pub break_after: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub key: SectionKey,
    pub title: &'static str,
    pub visibility: Visibility,
    /// Print context only.
    pub page_break: Option<PageBreak>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SectionBody {
    Content { blocks: Vec<Block> },
    Locked { teaser: Teaser },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Teaser {
    pub headline: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub keep_together: bool,
    pub title: Option<String>,
    pub content: BlockContent,
}

impl Block {
    fn new(title: Option<&str>, content: BlockContent) -> Self {
        let kind = content.kind();
        Self {
            kind,
            keep_together: kind.keep_together(),
            title: title.map(str::to_string),
            content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Text {
        markup: String,
    },
    ScoreCard {
        score: Option<u8>,
        score_bucket: Option<ScoreBucket>,
        verdict_label: &'static str,
        verdict_bucket: ColorBucket,
    },
    ScoreBars {
        bars: Vec<ScoreBar>,
    },
    Radar {
        axes: Vec<RadarAxis>,
    },
    List {
        tone: ColorBucket,
        items: Vec<String>,
    },
    Table {
        columns: Vec<&'static str>,
        rows: Vec<TableRow>,
    },
    Matrix {
        x_axis_label: String,
        y_axis_label: String,
        points: Vec<MatrixMarker>,
    },
    Availability {
        summary: Option<SocialSummary>,
        cells: Vec<AvailabilityCell>,
    },
    KeyValue {
        entries: Vec<KeyValueEntry>,
    },
}

impl BlockContent {
    #[must_use]
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Text { .. } => BlockKind::Text,
            BlockContent::ScoreCard { .. }
            | BlockContent::List { .. }
            | BlockContent::KeyValue { .. } => BlockKind::Card,
            BlockContent::Table { .. } | BlockContent::Availability { .. } => BlockKind::Table,
            BlockContent::ScoreBars { .. }
            | BlockContent::Radar { .. }
            | BlockContent::Matrix { .. } => BlockKind::Chart,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBar {
    pub label: String,
    /// `None` renders as an unscored bar.
    pub score: Option<f64>,
    /// Score text, `N/A` when unscored.
    pub display: String,
    pub width_pct: f64,
    pub bucket: Option<ScoreBucket>,
    pub reasoning: Vec<ReasoningBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub label: String,
    pub value: f64,
}

/// Row styling: a score bucket for score tables, a risk bucket for conflict tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RowTone {
    Score(ScoreBucket),
    Risk(RiskBucket),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub tone: Option<RowTone>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixMarker {
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// True for the evaluated name itself.
    pub subject: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityCell {
    pub label: String,
    pub group: String,
    pub available: bool,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValueEntry {
    pub key: String,
    pub value: String,
}

impl KeyValueEntry {
    fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Normalize and build in one step. The raw payload is only borrowed.
#[must_use]
pub fn render_report(
    raw: &RawReport,
    viewer: Viewer,
    context: RenderContext,
    profile: &PresentationProfile,
) -> ReportView {
    build_view(&normalize_report(raw), viewer, context, profile)
}

/// Build the view tree for the first evaluation of a normalized report.
#[must_use]
pub fn build_view(
    report: &NormalizedReport,
    viewer: Viewer,
    context: RenderContext,
    profile: &PresentationProfile,
) -> ReportView {
    let classifier = Classifier::new(profile.thresholds);
    let resolved = resolve_sections(report, viewer.authenticated);
    let plan = plan_pages(&resolved);
    let print = context == RenderContext::Print;

    let sections: Vec<SectionView> = plan
        .sections
        .iter()
        .map(|planned| SectionView {
            key: planned.key,
            title: planned.key.title(),
            visibility: planned.visibility,
            page_break: print.then_some(planned.page_break),
            body: match planned.visibility {
                Visibility::Locked => SectionBody::Locked {
                    teaser: teaser(planned.key, profile),
                },
                _ => SectionBody::Content {
                    blocks: section_blocks(planned.key, report, &classifier),
                },
            },
        })
        .collect();

    debug!(
        report_id = %report.report_id,
        authenticated = viewer.authenticated,
        ?context,
        sections = sections.len(),
        "built report view"
    );

    ReportView {
        report_id: report.report_id.clone(),
        context,
        density: context.density(profile),
        cover: cover(report, &classifier, print.then_some(plan.cover), plan.break_after_cover),
        sections,
    }
}

fn cover(
    report: &NormalizedReport,
    classifier: &Classifier,
    page_break: Option<PageBreak>,
    break_after: bool,
) -> CoverView {
    let eval = report.primary();
    let namescore = eval.and_then(|e| e.namescore);
    let verdict = eval.map_or(Verdict::Unknown, |e| e.verdict);
    CoverView {
        brand_name: eval.map_or(NOT_AVAILABLE, |e| e.brand_name.as_str()).to_string(),
        namescore,
        score_bucket: namescore.map(|s| classifier.score_bucket(Scale::Overall, f64::from(s))),
        verdict,
        verdict_label: verdict.label(),
        verdict_bucket: verdict_bucket(verdict),
        page_break,
        break_after: page_break.is_some() && break_after,
    }
}

fn teaser(key: SectionKey, profile: &PresentationProfile) -> Teaser {
    Teaser {
        headline: format!("{} is available in the full report", key.title()),
        call_to_action: profile.locked_call_to_action.clone(),
    }
}

fn section_blocks(
    key: SectionKey,
    report: &NormalizedReport,
    classifier: &Classifier,
) -> Vec<Block> {
    let Some(eval) = report.primary() else {
        return summary_blocks(report, None, classifier);
    };
    match key {
        SectionKey::ExecutiveSummary => summary_blocks(report, Some(eval), classifier),
        SectionKey::Dimensions => dimension_blocks(eval, classifier),
        SectionKey::FinalAssessment => assessment_blocks(eval),
        SectionKey::StrategicClassification => eval
            .strategic_classification
            .iter()
            .map(|text| Block::new(None, BlockContent::Text { markup: text.clone() }))
            .collect(),
        SectionKey::FrameworkDetail => framework_blocks(eval),
        SectionKey::MarketIntelligence => market_blocks(eval, classifier),
        SectionKey::DigitalPresence => digital_blocks(eval),
        SectionKey::CompetitiveLandscape => competitive_blocks(eval),
        SectionKey::LegalRisk => legal_risk_blocks(eval),
        SectionKey::TrademarkResearch => trademark_research_blocks(eval),
    }
}

// ---------------------------------------------------------------------------
// Section builders
// ---------------------------------------------------------------------------

fn summary_blocks(
    report: &NormalizedReport,
    eval: Option<&NormalizedEvaluation>,
    classifier: &Classifier,
) -> Vec<Block> {
    let mut blocks = Vec::new();
    if let Some(eval) = eval {
        blocks.push(Block::new(
            Some(eval.brand_name.as_str()),
            BlockContent::ScoreCard {
                score: eval.namescore,
                score_bucket: eval
                    .namescore
                    .map(|s| classifier.score_bucket(Scale::Overall, f64::from(s))),
                verdict_label: eval.verdict.label(),
                verdict_bucket: verdict_bucket(eval.verdict),
            },
        ));
    }
    if !report.executive_summary.is_empty() {
        blocks.push(Block::new(
            None,
            BlockContent::Text {
                markup: report.executive_summary.clone(),
            },
        ));
    }
    blocks
}

fn dimension_blocks(eval: &NormalizedEvaluation, classifier: &Classifier) -> Vec<Block> {
    let axes = eval
        .dimensions
        .iter()
        .filter_map(|d| {
            d.score.map(|value| RadarAxis {
                label: d.name.clone(),
                value,
            })
        })
        .collect();
    let bars = eval
        .dimensions
        .iter()
        .map(|d| ScoreBar {
            label: d.name.clone(),
            score: d.score,
            display: fmt_opt(d.score),
            width_pct: d.score.map_or(0.0, bar_width_pct),
            bucket: d.score.map(|s| classifier.score_bucket(Scale::Dimension, s)),
            reasoning: d.reasoning.clone(),
        })
        .collect();
    vec![
        Block::new(Some("Dimension Profile"), BlockContent::Radar { axes }),
        Block::new(Some("Dimension Scores"), BlockContent::ScoreBars { bars }),
    ]
}

fn assessment_blocks(eval: &NormalizedEvaluation) -> Vec<Block> {
    let mut blocks = Vec::new();
    if let Some(fa) = &eval.final_assessment {
        let mut entries = Vec::new();
        if let Some(verdict) = fa.verdict {
            entries.push(KeyValueEntry::new("Verdict", verdict.label()));
        }
        if let Some(score) = fa.suitability_score {
            entries.push(KeyValueEntry::new("Suitability", fmt_number(score)));
        }
        if let Some(bottom_line) = &fa.bottom_line {
            entries.push(KeyValueEntry::new("Bottom Line", bottom_line.clone()));
        }
        if !entries.is_empty() {
            blocks.push(Block::new(None, BlockContent::KeyValue { entries }));
        }
        push_list(&mut blocks, "Recommendations", ColorBucket::Neutral, &fa.recommendations);
    }
    push_list(&mut blocks, "Strengths", ColorBucket::Positive, &eval.pros);
    push_list(&mut blocks, "Risks", ColorBucket::Negative, &eval.cons);
    blocks
}

fn framework_blocks(eval: &NormalizedEvaluation) -> Vec<Block> {
    let Some(framework) = &eval.framework else {
        return Vec::new();
    };
    let mut blocks = Vec::new();
    let summary: Vec<KeyValueEntry> = [
        ("Recommendation", &framework.recommendation),
        ("Rationale", &framework.rationale),
        ("Critical Assessment", &framework.critical_assessment),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_ref().map(|v| KeyValueEntry::new(key, v.clone())))
    .collect();
    if !summary.is_empty() {
        blocks.push(Block::new(None, BlockContent::KeyValue { entries: summary }));
    }
    for module in &framework.modules {
        let entries = module
            .entries
            .iter()
            .map(|(k, v)| KeyValueEntry::new(k, v.clone()))
            .collect();
        blocks.push(Block::new(
            Some(module.title.as_str()),
            BlockContent::KeyValue { entries },
        ));
    }
    blocks
}

fn market_blocks(eval: &NormalizedEvaluation, classifier: &Classifier) -> Vec<Block> {
    let mut blocks = Vec::new();
    if let Some(market) = &eval.market_intelligence {
        let mut entries = vec![KeyValueEntry::new(
            "User Intent",
            market.user_intent.as_deref().unwrap_or(NOT_AVAILABLE),
        )];
        if market.warning_triggered {
            entries.push(KeyValueEntry::new(
                "Warning",
                market.warning_reason.as_deref().unwrap_or("Triggered"),
            ));
        }
        blocks.push(Block::new(
            Some("Search Visibility"),
            BlockContent::KeyValue { entries },
        ));
        push_competitor_table(&mut blocks, "Direct Competitors", &market.direct_competitors);
        push_competitor_table(&mut blocks, "Phonetic Conflicts", &market.phonetic_conflicts);
    }

    if !eval.cultural_analysis.is_empty() {
        let rows = eval
            .cultural_analysis
            .iter()
            .map(|entry| {
                let breakdown = entry.breakdown.as_ref();
                let country = match &entry.flag {
                    Some(flag) => format!("{flag} {}", entry.country),
                    None => entry.country.clone(),
                };
                TableRow {
                    cells: vec![
                        country,
                        fmt_opt(entry.score),
                        fmt_opt(breakdown.and_then(|b| b.safety_score)),
                        fmt_opt(breakdown.and_then(|b| b.fluency_score)),
                        fmt_opt(breakdown.and_then(|b| b.vibe_score)),
                        breakdown
                            .and_then(|b| b.risk_verdict.clone())
                            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                        entry.notes.clone(),
                    ],
                    tone: entry
                        .score
                        .map(|s| RowTone::Score(classifier.score_bucket(Scale::Dimension, s))),
                }
            })
            .collect();
        blocks.push(Block::new(
            Some("Cultural Resonance"),
            BlockContent::Table {
                columns: vec![
                    "Country", "Score", "Safety", "Fluency", "Vibe", "Verdict", "Notes",
                ],
                rows,
            },
        ));
    }
    blocks
}

fn digital_blocks(eval: &NormalizedEvaluation) -> Vec<Block> {
    let mut blocks = Vec::new();
    if !eval.domains.is_empty() {
        let cells = eval
            .domains
            .iter()
            .map(|d| AvailabilityCell {
                label: d.domain.clone(),
                group: domain_group(d.scope).to_string(),
                available: d.available,
                detail: d.status.clone(),
            })
            .collect();
        blocks.push(Block::new(
            Some("Domains"),
            BlockContent::Availability {
                summary: None,
                cells,
            },
        ));
    }
    if !eval.social.platforms.is_empty() {
        let cells = eval
            .social
            .platforms
            .iter()
            .map(|p| AvailabilityCell {
                label: p.platform.clone(),
                group: "Social".to_string(),
                available: p.available,
                detail: p.handle.clone().or_else(|| p.status.clone()),
            })
            .collect();
        blocks.push(Block::new(
            Some("Social Handles"),
            BlockContent::Availability {
                summary: Some(eval.social.summary),
                cells,
            },
        ));
    }
    blocks
}

fn competitive_blocks(eval: &NormalizedEvaluation) -> Vec<Block> {
    let mut blocks = Vec::new();
    if let Some(landscape) = &eval.competitor_landscape {
        push_landscape(&mut blocks, None, &eval.brand_name, landscape);
    }
    for country in &eval.country_landscapes {
        let title = match &country.flag {
            Some(flag) => format!("{flag} {}", country.country),
            None => country.country.clone(),
        };
        push_landscape(
            &mut blocks,
            Some(title.as_str()),
            &eval.brand_name,
            &country.landscape,
        );
    }
    blocks
}

fn legal_risk_blocks(eval: &NormalizedEvaluation) -> Vec<Block> {
    let Some(matrix) = &eval.trademark_matrix else {
        return Vec::new();
    };
    let mut blocks = Vec::new();
    if !matrix.rows.is_empty() {
        let rows = matrix
            .rows
            .iter()
            .map(|row| TableRow {
                cells: vec![
                    row.factor.clone(),
                    fmt_opt(row.likelihood),
                    fmt_opt(row.severity),
                    row.zone.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    row.commentary.clone().unwrap_or_default(),
                ],
                tone: None,
            })
            .collect();
        blocks.push(Block::new(
            None,
            BlockContent::Table {
                columns: vec!["Factor", "Likelihood", "Severity", "Zone", "Commentary"],
                rows,
            },
        ));
    }
    if let Some(overall) = &matrix.overall_assessment {
        blocks.push(Block::new(
            Some("Overall Assessment"),
            BlockContent::Text {
                markup: overall.clone(),
            },
        ));
    }
    blocks
}

fn trademark_research_blocks(eval: &NormalizedEvaluation) -> Vec<Block> {
    let Some(research) = &eval.trademark_research else {
        return Vec::new();
    };
    let entries = vec![
        KeyValueEntry::new("Overall Risk", fmt_opt(research.overall_risk_score)),
        KeyValueEntry::new(
            "Registration Success",
            fmt_pct(research.registration_success_probability),
        ),
        KeyValueEntry::new("Opposition Risk", fmt_pct(research.opposition_probability)),
        KeyValueEntry::new("Total Conflicts", research.total_conflicts.to_string()),
        KeyValueEntry::new("Critical Conflicts", research.critical_conflicts.to_string()),
        KeyValueEntry::new("High-Risk Conflicts", research.high_risk_conflicts.to_string()),
    ];
    let mut blocks = vec![Block::new(None, BlockContent::KeyValue { entries })];
    push_competitor_table(&mut blocks, "Trademark Conflicts", &research.trademark_conflicts);
    push_competitor_table(&mut blocks, "Company Conflicts", &research.company_conflicts);
    blocks
}

// ---------------------------------------------------------------------------
// Block helpers
// ---------------------------------------------------------------------------

fn push_list(blocks: &mut Vec<Block>, title: &str, tone: ColorBucket, items: &[String]) {
    if items.is_empty() {
        return;
    }
    blocks.push(Block::new(
        Some(title),
        BlockContent::List {
            tone,
            items: items.to_vec(),
        },
    ));
}

fn push_competitor_table(blocks: &mut Vec<Block>, title: &str, records: &[CompetitorRecord]) {
    if records.is_empty() {
        return;
    }
    let rows = records
        .iter()
        .map(|record| {
            let style = risk_style(record.risk_level);
            TableRow {
                cells: vec![
                    record.name.clone(),
                    style.display_label,
                    record
                        .category
                        .clone()
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    record.commentary.clone().unwrap_or_default(),
                ],
                tone: Some(RowTone::Risk(style.bucket)),
            }
        })
        .collect();
    blocks.push(Block::new(
        Some(title),
        BlockContent::Table {
            columns: vec!["Name", "Risk", "Category", "Commentary"],
            rows,
        },
    ));
}

fn push_landscape(
    blocks: &mut Vec<Block>,
    title: Option<&str>,
    brand_name: &str,
    landscape: &CompetitorLandscape,
) {
    let mut points: Vec<MatrixMarker> = landscape
        .competitors
        .iter()
        .filter_map(|c| {
            let p = c.position?;
            Some(MatrixMarker {
                label: c.name.clone(),
                x: p.x,
                y: p.y,
                subject: false,
            })
        })
        .collect();
    if let Some(p) = landscape.subject_position {
        points.push(MatrixMarker {
            label: brand_name.to_string(),
            x: p.x,
            y: p.y,
            subject: true,
        });
    }
    let matrix_title = title.unwrap_or("Positioning Matrix");
    if !points.is_empty() {
        blocks.push(Block::new(
            Some(matrix_title),
            BlockContent::Matrix {
                x_axis_label: landscape.x_axis_label.clone(),
                y_axis_label: landscape.y_axis_label.clone(),
                points,
            },
        ));
    }
    push_competitor_table(
        blocks,
        title.unwrap_or("Competitors"),
        &landscape.competitors,
    );

    let entries: Vec<KeyValueEntry> = [
        ("White Space", &landscape.white_space),
        ("Strategic Advantage", &landscape.strategic_advantage),
        ("Suggested Pricing", &landscape.suggested_pricing),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_ref().map(|v| KeyValueEntry::new(key, v.clone())))
    .collect();
    if !entries.is_empty() {
        blocks.push(Block::new(title, BlockContent::KeyValue { entries }));
    }
}

fn domain_group(scope: DomainScope) -> &'static str {
    match scope {
        DomainScope::Primary => "Exact Match",
        DomainScope::Alternative => "Alternatives",
        DomainScope::Category => "Category",
        DomainScope::Country => "Country",
    }
}

fn fmt_number(value: f64) -> String {
    if (value - value.round()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), fmt_number)
}

fn fmt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{}%", fmt_number(v)))
}
