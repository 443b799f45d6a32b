use super::*;

// -----------------------------------------------------------------------
// sanitize
// -----------------------------------------------------------------------

#[test]
fn composite_header_is_removed() {
    let raw = "**Brand: Acme** Category: Widgets Verdict: GO Score: 80/100 The name is strong.";
    assert_eq!(sanitize(raw), "The name is strong.");
}

#[test]
fn composite_header_with_bold_labels_is_removed() {
    let raw = "**Brand:** Acme **Category:** Widgets **Verdict:** CONDITIONAL GO **Score:** 68/100 Solid choice.";
    assert_eq!(sanitize(raw), "Solid choice.");
}

#[test]
fn label_lines_on_real_newlines_are_removed() {
    let raw = "**Brand:** Acme\n**Category:** Widgets\n**Verdict:** NO-GO\n**Score:** 41/100\n\nToo close to an existing mark.";
    assert_eq!(sanitize(raw), "Too close to an existing mark.");
}

#[test]
fn label_lines_on_literal_newlines_are_removed() {
    let raw = r"Verdict: GO\nScore: 82/100\nStrong **fit** here.";
    assert_eq!(sanitize(raw), "Strong <strong>fit</strong> here.");
}

#[test]
fn removed_label_line_keeps_neighbours_apart() {
    let raw = r"Intro\nBrand: Acme\nOutro";
    assert_eq!(sanitize(raw), "Intro<br/>Outro");
}

#[test]
fn header_sharing_a_line_with_prose_keeps_the_prose() {
    assert_eq!(
        sanitize("Verdict: GO Score: 80/100 The name is strong."),
        "The name is strong."
    );
    assert_eq!(
        sanitize("Score: 80/100 The name is strong."),
        "The name is strong."
    );
    assert_eq!(
        sanitize("Brand: Acme. This name works well across markets."),
        "This name works well across markets."
    );
    assert_eq!(
        sanitize("**Verdict:** CONDITIONAL GO - pending a clearance search."),
        "- pending a clearance search."
    );
}

#[test]
fn header_run_is_removed_in_any_label_order() {
    assert_eq!(sanitize("Score: 7/10 Verdict: NO-GO Too generic."), "Too generic.");
    assert_eq!(
        sanitize("Category: Widgets Brand: Acme; Clear and short."),
        "Clear and short."
    );
}

#[test]
fn long_label_text_is_treated_as_prose() {
    let text = "Verdict: we recommend proceeding with this name once a full clearance search is done";
    assert_eq!(sanitize(text), text);
}

#[test]
fn label_words_inside_prose_are_kept() {
    assert_eq!(
        sanitize("The score: 5 is fine for a launch."),
        "The score: 5 is fine for a launch."
    );
    assert_eq!(
        sanitize("Brand Strategy: premium positioning"),
        "Brand Strategy: premium positioning"
    );
}

#[test]
fn bold_and_italic_become_markup() {
    assert_eq!(
        sanitize("**bold** and *italic*"),
        "<strong>bold</strong> and <em>italic</em>"
    );
}

#[test]
fn italic_inside_bold_is_converted() {
    assert_eq!(
        sanitize("**a *b* c**"),
        "<strong>a <em>b</em> c</strong>"
    );
}

#[test]
fn unmatched_markers_stay_literal() {
    assert_eq!(sanitize("**unclosed and *also"), "**unclosed and *also");
    assert_eq!(sanitize("2 * 3 * 4"), "2 * 3 * 4");
}

#[test]
fn whitespace_is_collapsed_and_trimmed() {
    assert_eq!(sanitize("  a \n\n\t b  "), "a b");
}

#[test]
fn empty_input_is_returned_unchanged() {
    assert_eq!(sanitize(""), "");
}

#[test]
fn sanitize_is_idempotent_on_representative_inputs() {
    let inputs = [
        "**Brand: Acme** Category: Widgets Verdict: GO Score: 80/100 The name is strong.",
        r"Line one\nLine two with *emphasis*",
        "**unclosed and *also",
        "*a\n\nb*",
        "Verdict: REJECT\nToo generic.",
        "  plain   text  ",
        "Verdict: GO Score: 80/100 The name is strong.",
        "Brand: Acme. This name works well across markets.",
        "\u{a0}Score: 5 body",
        "\u{c}Verdict: GO\nbody",
        "\u{2003}**Verdict:** GO\u{2028}Works well.",
        "Intro\u{a0}\nBrand: Acme\n\u{3000}Score: 9/10 Outro",
    ];
    for input in inputs {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn unicode_whitespace_before_a_header_does_not_hide_it() {
    assert_eq!(sanitize("\u{a0}Score: 5 body"), "body");
    assert_eq!(sanitize("\u{c}Verdict: GO\nbody"), "body");
}

// -----------------------------------------------------------------------
// apply_rule
// -----------------------------------------------------------------------

#[test]
fn rule_order_starts_with_headers_and_ends_with_whitespace() {
    assert_eq!(SANITIZE_RULES[0], SanitizeRule::CompositeHeader);
    assert_eq!(SANITIZE_RULES[8], SanitizeRule::CollapseWhitespace);
    let bold = SANITIZE_RULES
        .iter()
        .position(|r| *r == SanitizeRule::Bold)
        .unwrap();
    let italic = SANITIZE_RULES
        .iter()
        .position(|r| *r == SanitizeRule::Italic)
        .unwrap();
    assert!(bold < italic);
}

#[test]
fn bold_rule_alone_leaves_italic_markers() {
    assert_eq!(
        apply_rule(SanitizeRule::Bold, "**x** *y*"),
        "<strong>x</strong> *y*"
    );
}

#[test]
fn line_break_rule_converts_only_literal_sequences() {
    assert_eq!(apply_rule(SanitizeRule::LineBreak, "a\\nb\nc"), "a<br/>b\nc");
}

#[test]
fn verdict_rule_alone_cuts_the_header_run_through_the_verdict() {
    assert_eq!(
        apply_rule(
            SanitizeRule::VerdictLine,
            "Verdict: GO Score: 80/100 The name is strong."
        ),
        "Score: 80/100 The name is strong."
    );
    assert_eq!(
        apply_rule(
            SanitizeRule::VerdictLine,
            "Score: 80/100 Verdict: GO The name is strong."
        ),
        "The name is strong."
    );
}

#[test]
fn score_line_rule_ignores_other_labels() {
    let text = "Brand: Acme\nScore: 7/10\nBody";
    assert_eq!(apply_rule(SanitizeRule::ScoreLine, text), "Brand: Acme\nBody");
}

#[test]
fn sanitize_opt_maps_blank_results_to_none() {
    assert_eq!(sanitize_opt(None), None);
    assert_eq!(sanitize_opt(Some("Score: 80/100")), None);
    assert_eq!(sanitize_opt(Some("*ok*")).as_deref(), Some("<em>ok</em>"));
}

// -----------------------------------------------------------------------
// strip_formula_sections
// -----------------------------------------------------------------------

#[test]
fn formula_section_is_removed_up_to_blank_line() {
    let notes = "Strong appeal.\n\nFormula: (0.4*9)+(0.6*8) = 8.4\n\nWorks well in Hindi.";
    let stripped = strip_formula_sections(notes);
    assert_eq!(sanitize(&stripped), "Strong appeal. Works well in Hindi.");
}

#[test]
fn trailing_score_breakdown_is_removed_to_end() {
    let notes = "Positive associations.\nScore Breakdown: safety 9, fluency 8\nvibe 7";
    assert_eq!(
        sanitize(&strip_formula_sections(notes)),
        "Positive associations."
    );
}

#[test]
fn notes_without_formula_are_untouched() {
    let notes = "No issues found in local slang.";
    assert_eq!(strip_formula_sections(notes), notes);
}

// -----------------------------------------------------------------------
// reasoning_blocks
// -----------------------------------------------------------------------

#[test]
fn reasoning_is_split_on_sub_headers() {
    let text = "Overall solid. **Memorability:** Short and punchy. **Risk**: Low *overall*.";
    let blocks = reasoning_blocks(text);
    assert_eq!(
        blocks,
        vec![
            ReasoningBlock {
                heading: None,
                body: "Overall solid.".to_string(),
            },
            ReasoningBlock {
                heading: Some("Memorability".to_string()),
                body: "Short and punchy.".to_string(),
            },
            ReasoningBlock {
                heading: Some("Risk".to_string()),
                body: "Low <em>overall</em>.".to_string(),
            },
        ]
    );
}

#[test]
fn reasoning_without_sub_headers_is_one_block() {
    let blocks = reasoning_blocks("Easy to spell and say.");
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].heading.is_none());
}

#[test]
fn empty_reasoning_has_no_blocks() {
    assert!(reasoning_blocks("").is_empty());
    assert!(reasoning_blocks("   ").is_empty());
}
