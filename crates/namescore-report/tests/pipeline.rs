use namescore_core::PresentationProfile;
use namescore_report::layout::PageBreak;
use namescore_report::view::BlockContent;
use namescore_report::{
    classify, country_name, normalize_report, parse_report, render_report, resolve_visibility,
    sanitize, social_handles, RawReport, RenderContext, ScoreBucket, SectionBody, SectionKey,
    Viewer, Visibility,
};
use serde_json::{json, Value};

fn full_payload() -> Value {
    json!({
        "report_id": "rpt-7f3a",
        "executive_summary": "**Brand: Lumora** Category: Skincare Verdict: GO Score: 82/100 Lumora is *distinctive* and easy to say.",
        "brand_scores": [{
            "brand_name": "Lumora",
            "namescore": 82,
            "verdict": "GO",
            "strategic_classification": "Premium challenger",
            "pros": ["Memorable", "Positive connotations"],
            "cons": ["Similar mark in class 3"],
            "dimensions": [
                {"name": "Distinctiveness", "score": 8.5, "reasoning": "**Sound:** Soft and bright. **Risk:** Low."},
                {"name": "Trademark Safety", "score": "6.0", "reasoning": "Some overlap."},
                {"name": "Global Fit", "score": 5.9}
            ],
            "final_assessment": {
                "verdict": "GO",
                "suitability_score": 84,
                "bottom_line": "Proceed to filing.",
                "recommendations": ["File in class 3", "Secure lumora.co"]
            },
            "visibility_analysis": {
                "user_intent": "Beauty shoppers",
                "warning_triggered": false,
                "direct_competitors": [{"name": "Lumina", "risk_level": "MEDIUM"}]
            },
            "cultural_analysis": [
                {"country": "India", "cultural_resonance_score": 8},
                {"country": {"name": "Japan", "flag": "🇯🇵"}, "score_breakdown": {"final_score": 6.5}}
            ],
            "competitor_analysis": {
                "x_axis_label": "Price",
                "y_axis_label": "Clinical vs Natural",
                "competitors": [{"name": "Lumina", "x_coordinate": 60, "y_coordinate": 40}],
                "user_brand_position": {"x": 70, "y": 65}
            },
            "country_competitor_analysis": [
                {"country": {"name": "India", "flag": "🇮🇳"}, "competitors": [{"brand": "Lumiere", "coordinates": {"x": 30, "y": 50}}]}
            ],
            "domain_analysis": {"exact_match_status": "TAKEN"},
            "multi_domain_availability": {
                "category_domains": [{"domain": "lumora.shop", "available": true}],
                "country_domains": [{"domain": "lumora.in", "status": "Available"}]
            },
            "social_availability": {"handles": [{"platform": "twitter", "available": true}]},
            "enhanced_social_availability": {
                "handle": "lumora",
                "platforms": [
                    {"platform": "instagram", "available": false},
                    {"platform": "tiktok", "available": true}
                ],
                "summary": {"total_platforms": 2, "available_count": 1, "taken_count": 1}
            },
            "trademark_matrix": {
                "genericness": {"likelihood": 2, "severity": 4, "zone": "Green"},
                "overall_assessment": "Low risk overall."
            },
            "trademark_research": {
                "overall_risk_score": 3,
                "registration_success_probability": 78,
                "trademark_conflicts": [{"name": "LUMORA SPA", "risk_level": "LOW"}]
            },
            "mckinsey_analysis": {
                "executive_recommendation": "PROCEED",
                "benefits_experiences": {"emotional_benefits": ["Radiance"]}
            }
        }]
    })
}

fn raw_full() -> RawReport {
    RawReport::from_value(full_payload()).expect("fixture parses")
}

fn profile() -> PresentationProfile {
    PresentationProfile::default()
}

// -----------------------------------------------------------------------
// Documented scenarios
// -----------------------------------------------------------------------

#[test]
fn scenario_composite_header_sanitizes_to_body() {
    let raw = "**Brand: Acme** Category: Widgets Verdict: GO Score: 80/100 The name is strong.";
    assert_eq!(sanitize(raw), "The name is strong.");
}

#[test]
fn scenario_dimension_score_buckets() {
    assert_eq!(classify(8.5, "").score_bucket, ScoreBucket::Strong);
    assert_eq!(classify(6.0, "").score_bucket, ScoreBucket::Moderate);
    assert_eq!(classify(5.9, "").score_bucket, ScoreBucket::Weak);
}

#[test]
fn scenario_enhanced_social_is_never_merged_with_legacy() {
    let raw = raw_full();
    let handles = social_handles(&raw.brand_scores[0]);
    let names: Vec<&str> = handles.iter().map(|p| p.platform.as_str()).collect();
    assert_eq!(names, vec!["instagram", "tiktok"]);
}

#[test]
fn scenario_trademark_matrix_visibility() {
    let key: SectionKey = "trademark_matrix".parse().unwrap();
    assert_eq!(resolve_visibility(key, true, false), Visibility::Locked);
    assert_eq!(resolve_visibility(key, false, false), Visibility::Absent);
    assert_eq!(resolve_visibility(key, false, true), Visibility::Absent);
}

#[test]
fn scenario_country_name_shapes() {
    let report = RawReport::from_value(json!({
        "brand_scores": [{"cultural_analysis": [
            {"country": "India"},
            {"country": {"name": "India", "flag": "🇮🇳"}},
            {}
        ]}]
    }))
    .unwrap();
    let entries = &report.brand_scores[0].cultural_analysis;
    assert_eq!(country_name(entries[0].country.as_ref()), "India");
    assert_eq!(country_name(entries[1].country.as_ref()), "India");
    assert_eq!(country_name(entries[2].country.as_ref()), "Not specified");
}

// -----------------------------------------------------------------------
// Full render
// -----------------------------------------------------------------------

#[test]
fn authenticated_screen_render_draws_every_section() {
    let view = render_report(
        &raw_full(),
        Viewer::authenticated(),
        RenderContext::Screen,
        &profile(),
    );

    assert_eq!(view.report_id, "rpt-7f3a");
    assert_eq!(view.cover.brand_name, "Lumora");
    assert_eq!(view.cover.namescore, Some(82));
    assert_eq!(view.cover.score_bucket, Some(ScoreBucket::Strong));
    assert!(view.cover.page_break.is_none());

    let keys: Vec<SectionKey> = view.sections.iter().map(|s| s.key).collect();
    assert_eq!(keys, SectionKey::ALL.to_vec());
    for section in &view.sections {
        assert_eq!(section.visibility, Visibility::Render, "{}", section.key);
        assert!(section.page_break.is_none());
        assert!(
            matches!(&section.body, SectionBody::Content { blocks } if !blocks.is_empty()),
            "{} has no blocks",
            section.key
        );
    }
}

#[test]
fn executive_summary_is_sanitized_in_view() {
    let view = render_report(
        &raw_full(),
        Viewer::authenticated(),
        RenderContext::Screen,
        &profile(),
    );
    let SectionBody::Content { blocks } = &view.sections[0].body else {
        panic!("summary should render");
    };
    let text = blocks.iter().find_map(|b| match &b.content {
        BlockContent::Text { markup } => Some(markup.as_str()),
        _ => None,
    });
    assert_eq!(
        text,
        Some("Lumora is <em>distinctive</em> and easy to say.")
    );
}

#[test]
fn anonymous_viewer_sees_locked_teasers() {
    let view = render_report(
        &raw_full(),
        Viewer::anonymous(),
        RenderContext::Screen,
        &profile(),
    );
    assert_eq!(view.sections.len(), SectionKey::ALL.len());
    for section in &view.sections {
        assert_eq!(section.visibility, Visibility::Locked);
        let SectionBody::Locked { teaser } = &section.body else {
            panic!("{} should be locked", section.key);
        };
        assert_eq!(teaser.call_to_action, profile().locked_call_to_action);
    }
}

#[test]
fn print_render_annotates_page_breaks() {
    let view = render_report(
        &raw_full(),
        Viewer::authenticated(),
        RenderContext::Print,
        &profile(),
    );
    assert_eq!(view.cover.page_break, Some(PageBreak::NewPage));
    assert!(view.cover.break_after);
    assert_eq!(view.density, profile().print);

    let breaks: Vec<(SectionKey, Option<PageBreak>)> = view
        .sections
        .iter()
        .map(|s| (s.key, s.page_break))
        .collect();
    assert_eq!(breaks[0], (SectionKey::ExecutiveSummary, Some(PageBreak::NewPage)));
    assert_eq!(breaks[1], (SectionKey::Dimensions, Some(PageBreak::Continue)));
    assert_eq!(
        breaks[4],
        (SectionKey::FrameworkDetail, Some(PageBreak::NewPage))
    );
    assert_eq!(
        breaks[9],
        (SectionKey::TrademarkResearch, Some(PageBreak::NewPage))
    );
}

#[test]
fn charts_and_tables_keep_together_text_does_not() {
    let view = render_report(
        &raw_full(),
        Viewer::authenticated(),
        RenderContext::Print,
        &profile(),
    );
    for section in &view.sections {
        if let SectionBody::Content { blocks } = &section.body {
            for block in blocks {
                let is_text = matches!(block.content, BlockContent::Text { .. });
                assert_eq!(block.keep_together, !is_text);
            }
        }
    }
}

#[test]
fn missing_sections_are_absent_regardless_of_auth() {
    let raw = RawReport::from_value(json!({
        "brand_scores": [{"brand_name": "Solo", "namescore": 50, "dimensions": [{"name": "Fit", "score": 5}]}]
    }))
    .unwrap();
    for viewer in [Viewer::anonymous(), Viewer::authenticated()] {
        let view = render_report(&raw, viewer, RenderContext::Screen, &profile());
        let keys: Vec<SectionKey> = view.sections.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec![SectionKey::ExecutiveSummary, SectionKey::Dimensions]
        );
    }
}

// -----------------------------------------------------------------------
// Properties
// -----------------------------------------------------------------------

#[test]
fn render_leaves_input_unchanged() {
    let raw = raw_full();
    let before = raw.clone();
    let _ = render_report(&raw, Viewer::authenticated(), RenderContext::Print, &profile());
    let _ = normalize_report(&raw);
    assert_eq!(raw, before);
}

#[test]
fn every_historical_shape_normalizes_without_panicking() {
    let payloads = [
        json!({}),
        json!({"brand_scores": null}),
        json!({"brand_scores": [{}]}),
        json!({"brand_scores": [null, 3, "x"]}),
        json!({"brand_scores": [{
            "country_competitor_analysis": "none",
            "competitor_analysis": [{"name": "A"}, "junk"],
            "social_availability": {"platforms": "oops"},
            "enhanced_social_availability": [],
            "domain_analysis": {"alternatives": [{"status": "available"}]},
            "multi_domain_availability": {"category_domains": {}},
            "final_assessment": 12,
            "trademark_research": {"trademark_conflicts": [{}]},
            "mckinsey_analysis": ["not", "a", "map"],
            "dimensions": [{"score": "NaN"}, {"name": null}]
        }]}),
    ];
    for payload in payloads {
        let raw = RawReport::from_value(payload.clone()).expect("object payloads parse");
        for viewer in [Viewer::anonymous(), Viewer::authenticated()] {
            for context in [RenderContext::Screen, RenderContext::Print] {
                let view = render_report(&raw, viewer, context, &profile());
                assert!(view.sections.len() <= SectionKey::ALL.len(), "{payload}");
            }
        }
    }
}

#[test]
fn parse_report_round_trips_full_fixture() {
    let text = serde_json::to_string(&full_payload()).unwrap();
    let parsed = parse_report(&text).unwrap();
    assert_eq!(parsed, raw_full());
}

#[test]
fn view_serializes_with_tagged_bodies() {
    let view = render_report(
        &raw_full(),
        Viewer::anonymous(),
        RenderContext::Screen,
        &profile(),
    );
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["sections"][0]["key"], "executive_summary");
    assert_eq!(json["sections"][0]["visibility"], "LOCKED");
    assert_eq!(json["sections"][0]["body"]["state"], "locked");
    assert_eq!(json["context"], "screen");
}
