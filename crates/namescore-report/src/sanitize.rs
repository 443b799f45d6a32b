//! Text sanitizer for free-text report fields.
//!
//! Upstream text is "markdown-lite": it may open with boilerplate header lines
//! (`Brand:`, `Category:`, `Verdict:`, `Score:`, or all four run together),
//! and uses `**bold**`, `*italic*` and literal two-character `\n` sequences.
//! [`sanitize`] folds [`SANITIZE_RULES`] over the input in a fixed order:
//!
//! 1. Composite header (brand + category + verdict + score on one run).
//! 2. Individual `Label: value` headers, in brand, category, verdict, score
//!    order. A header is only recognized in the run of headers that opens a
//!    line; prose after the run is kept.
//! 3. Bold, then italic, so `*` inside a `**` span is never mistaken for italics.
//! 4. Literal `\n` to `<br/>`.
//! 5. Whitespace collapse and trim.

use std::sync::LazyLock;

use namescore_core::ReasoningBlock;
use regex::Regex;

/// One step of the sanitizer. Each can be applied alone with [`apply_rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeRule {
    CompositeHeader,
    BrandLine,
    CategoryLine,
    VerdictLine,
    ScoreLine,
    Bold,
    Italic,
    LineBreak,
    CollapseWhitespace,
}

/// The order in which [`sanitize`] applies its rules.
pub const SANITIZE_RULES: [SanitizeRule; 9] = [
    SanitizeRule::CompositeHeader,
    SanitizeRule::BrandLine,
    SanitizeRule::CategoryLine,
    SanitizeRule::VerdictLine,
    SanitizeRule::ScoreLine,
    SanitizeRule::Bold,
    SanitizeRule::Italic,
    SanitizeRule::LineBreak,
    SanitizeRule::CollapseWhitespace,
];

static COMPOSITE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\*{0,2}[^\S\n]*brand(?:[^\S\n]+name)?[^\S\n]*\*{0,2}[^\S\n]*:[^\S\n]*\*{0,2}[^\S\n]*",
        r"[^*\n]*?\*{0,2}\s*\*{0,2}[^\S\n]*",
        r"category[^\S\n]*\*{0,2}[^\S\n]*:.*?",
        r"verdict[^\S\n]*\*{0,2}[^\S\n]*:[^\S\n]*\*{0,2}[^\S\n]*",
        r"(?:conditional(?:[^\S\n]|[_-])+go|no(?:[^\S\n]|[_-])*go|go|reject)\b[^\S\n]*\*{0,2}\s*",
        r"(?:name[^\S\n]*)?score[^\S\n]*\*{0,2}[^\S\n]*:[^\S\n]*\*{0,2}[^\S\n]*",
        r"\d+(?:\.\d+)?(?:[^\S\n]*/[^\S\n]*(?:100|10))?\*{0,2}",
    ))
    .expect("valid composite header regex")
});

// Opening `**`, the label, and the colon with any emphasis around it.
static HEADER_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^\*{0,2}[^\S\n]*",
        r"(?:(?P<brand>brand(?:[^\S\n]+name)?)|(?P<category>category)",
        r"|(?P<verdict>(?:final[^\S\n]+)?verdict)|(?P<score>(?:name[^\S\n]*)?score))",
        r"[^\S\n]*\*{0,2}[^\S\n]*:[^\S\n]*\*{0,2}[^\S\n]*",
    ))
    .expect("valid header label regex")
});

static VERDICT_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:conditional(?:[^\S\n]|[_-])+go|no(?:[^\S\n]|[_-])*go|go|reject)\b")
        .expect("valid verdict value regex")
});

static SCORE_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)?(?:[^\S\n]*/[^\S\n]*(?:100|10)\b)?%?")
        .expect("valid score value regex")
});

// Closing emphasis and one clause mark after a header value.
static HEADER_CLOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\S\n]*\*{0,2}[^\S\n]*[.,;|]?").expect("valid header close regex")
});

static LINE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n|\\n").expect("valid line separator regex"));

/// Longest free-text header value, in bytes. A longer run is prose.
const MAX_HEADER_VALUE: usize = 60;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").expect("valid bold regex"));

// Opening and closing characters must not be whitespace, which keeps
// arithmetic such as `2 * 3 * 4` literal.
static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").expect("valid italic regex")
});

static LITERAL_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\n").expect("valid literal newline regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static FORMULA_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?is)(?:\A|\n|\\n)[ \t]*\*{0,2}[ \t]*",
        r"(?:score[ \t]+breakdown|(?:score[ \t]+)?formula|(?:score[ \t]+)?calculation)",
        r"[^:\n]{0,40}:.*?(?:\n[ \t]*\n|\\n\\n|\z)",
    ))
    .expect("valid formula section regex")
});

static SUB_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^*\n]{1,80}?)[ \t]*(?::\*\*|\*\*[ \t]*:)").expect("valid sub-header regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderLabel {
    Brand,
    Category,
    Verdict,
    Score,
}

/// One `Label: value` header within a line; `end` is a byte offset.
#[derive(Debug, Clone, Copy)]
struct HeaderToken {
    label: HeaderLabel,
    end: usize,
}

fn skip_inline_space(line: &str, from: usize) -> usize {
    line[from..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(line.len(), |(i, _)| from + i)
}

/// The run of headers that opens `line`, each ending after its trailing space.
fn header_run(line: &str) -> Vec<HeaderToken> {
    let mut tokens = Vec::new();
    let mut pos = skip_inline_space(line, 0);
    while let Some(mut token) = header_at(line, pos) {
        token.end = skip_inline_space(line, token.end);
        pos = token.end;
        tokens.push(token);
    }
    tokens
}

fn header_at(line: &str, start: usize) -> Option<HeaderToken> {
    let caps = HEADER_LABEL.captures(&line[start..])?;
    let label = if caps.name("brand").is_some() {
        HeaderLabel::Brand
    } else if caps.name("category").is_some() {
        HeaderLabel::Category
    } else if caps.name("verdict").is_some() {
        HeaderLabel::Verdict
    } else {
        HeaderLabel::Score
    };
    let value_start = start + caps.get(0)?.end();
    let value = &line[value_start..];
    let value_len = VERDICT_VALUE
        .find(value)
        .or_else(|| SCORE_VALUE.find(value))
        .map(|m| m.end())
        .or_else(|| free_value_len(value))?;
    let close_start = value_start + value_len;
    let close_len = HEADER_CLOSE
        .find(&line[close_start..])
        .map_or(0, |m| m.end());
    Some(HeaderToken {
        label,
        end: close_start + close_len,
    })
}

/// Length of a free-text value: up to a clause mark, emphasis, the next
/// header, or the end of the line. `None` when the run is too long to be a
/// header value.
fn free_value_len(value: &str) -> Option<usize> {
    let mut after_space = false;
    for (i, c) in value.char_indices() {
        if i > MAX_HEADER_VALUE {
            return None;
        }
        let ends = match c {
            ',' | ';' | '|' | '*' => true,
            '.' => value[i + 1..].chars().next().is_none_or(char::is_whitespace),
            _ => after_space && HEADER_LABEL.is_match(&value[i..]),
        };
        if ends {
            return Some(i);
        }
        after_space = c.is_whitespace();
    }
    (value.len() <= MAX_HEADER_VALUE).then_some(value.len())
}

/// Cut the run of headers that opens each line up to and including its last
/// `label` header. Headers before it in the run go with it; the line after
/// the cut is kept.
///
/// Cutting a prefix never changes how the rest of the run parses, so the four
/// label rules give the same result in any order. Lines are split on real
/// newlines and literal `\n`. A line left blank is dropped together with the
/// separator that follows it, so the surrounding lines stay apart.
fn strip_headers(text: &str, label: HeaderLabel) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_start = 0;
    let mut separators = LINE_SEPARATOR.find_iter(text);
    loop {
        let sep = separators.next();
        let line_end = sep.map_or(text.len(), |m| m.start());
        let line = &text[line_start..line_end];
        let sep_text = sep.map_or("", |m| m.as_str());

        let cut = header_run(line)
            .into_iter()
            .rev()
            .find(|t| t.label == label)
            .map(|t| t.end);
        match cut {
            None => {
                out.push_str(line);
                out.push_str(sep_text);
            }
            Some(cut) => {
                let kept = &line[cut..];
                if !kept.trim().is_empty() {
                    out.push_str(kept);
                    out.push_str(sep_text);
                }
            }
        }

        match sep {
            Some(m) => line_start = m.end(),
            None => break,
        }
    }
    out
}

/// Sanitize free text into inline markup.
///
/// Pure and total: empty input yields an empty string, unmatched `**` or `*`
/// markers stay literal.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    SANITIZE_RULES
        .iter()
        .fold(raw.to_string(), |text, rule| apply_rule(*rule, &text))
}

/// Apply a single sanitizer rule.
#[must_use]
pub fn apply_rule(rule: SanitizeRule, text: &str) -> String {
    match rule {
        SanitizeRule::CompositeHeader => COMPOSITE_HEADER.replace_all(text, " ").into_owned(),
        SanitizeRule::BrandLine => strip_headers(text, HeaderLabel::Brand),
        SanitizeRule::CategoryLine => strip_headers(text, HeaderLabel::Category),
        SanitizeRule::VerdictLine => strip_headers(text, HeaderLabel::Verdict),
        SanitizeRule::ScoreLine => strip_headers(text, HeaderLabel::Score),
        SanitizeRule::Bold => BOLD
            .replace_all(text, "<strong>${1}</strong>")
            .into_owned(),
        SanitizeRule::Italic => ITALIC.replace_all(text, "<em>${1}</em>").into_owned(),
        SanitizeRule::LineBreak => LITERAL_NEWLINE.replace_all(text, "<br/>").into_owned(),
        SanitizeRule::CollapseWhitespace => WHITESPACE.replace_all(text, " ").trim().to_string(),
    }
}

/// Sanitize an optional field, treating a result with no content as absent.
#[must_use]
pub fn sanitize_opt(raw: Option<&str>) -> Option<String> {
    raw.map(sanitize).filter(|s| !s.is_empty())
}

/// Remove embedded score-formula sections from cultural notes.
///
/// A section starts at a line labelled `Formula`, `Calculation` or
/// `Score Breakdown` and runs to the next blank line or the end of the text.
#[must_use]
pub fn strip_formula_sections(text: &str) -> String {
    FORMULA_SECTION.replace_all(text, "\n").into_owned()
}

/// Split dimension reasoning on `**Heading:**` sub-headers.
///
/// Text before the first sub-header becomes a block without a heading. Every
/// body is sanitized; blocks with neither heading nor body are dropped.
#[must_use]
pub fn reasoning_blocks(text: &str) -> Vec<ReasoningBlock> {
    let mut blocks = Vec::new();
    let mut heading: Option<String> = None;
    let mut cursor = 0;

    for caps in SUB_HEADER.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        push_block(&mut blocks, heading.take(), &text[cursor..whole.start()]);
        heading = caps
            .get(1)
            .map(|m| m.as_str().trim().to_string())
            .filter(|h| !h.is_empty());
        cursor = whole.end();
    }
    push_block(&mut blocks, heading, &text[cursor..]);

    blocks
}

fn push_block(blocks: &mut Vec<ReasoningBlock>, heading: Option<String>, body: &str) {
    let body = sanitize(body);
    if heading.is_none() && body.is_empty() {
        return;
    }
    blocks.push(ReasoningBlock { heading, body });
}

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod tests;
