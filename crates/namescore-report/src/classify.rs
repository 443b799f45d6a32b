//! Score and verdict classification into presentation buckets.

use namescore_core::{RiskLevel, ScoreThresholds, Verdict};
use serde::Serialize;

/// Score bucket, declared from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBucket {
    Weak,
    Moderate,
    Strong,
}

impl ScoreBucket {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBucket::Weak => "Weak",
            ScoreBucket::Moderate => "Moderate",
            ScoreBucket::Strong => "Strong",
        }
    }

    #[must_use]
    pub fn color(self) -> ColorBucket {
        match self {
            ScoreBucket::Weak => ColorBucket::Negative,
            ScoreBucket::Moderate => ColorBucket::Caution,
            ScoreBucket::Strong => ColorBucket::Positive,
        }
    }
}

/// Color bucket, declared from least to most positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    Negative,
    Neutral,
    Caution,
    Positive,
}

/// Which scale a score is expressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// 0–10, used by dimensions and cultural scores.
    Dimension,
    /// 0–100, used by the overall namescore.
    Overall,
}

impl Scale {
    fn max(self) -> f64 {
        match self {
            Scale::Dimension => 10.0,
            Scale::Overall => 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub score_bucket: ScoreBucket,
    /// Derived from the score alone.
    pub color_bucket: ColorBucket,
    pub verdict: Verdict,
    pub verdict_bucket: ColorBucket,
    /// The verdict label when the verdict is recognized, else the score bucket label.
    pub label: &'static str,
}

/// Classifier bound to a set of thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    thresholds: ScoreThresholds,
}

impl Classifier {
    #[must_use]
    pub fn new(thresholds: ScoreThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> &ScoreThresholds {
        &self.thresholds
    }

    /// Bucket a score. Bounds are inclusive. NaN, infinite and out-of-range
    /// scores are [`ScoreBucket::Weak`].
    #[must_use]
    pub fn score_bucket(&self, scale: Scale, score: f64) -> ScoreBucket {
        let (strong, moderate) = match scale {
            Scale::Dimension => (
                self.thresholds.dimension_strong,
                self.thresholds.dimension_moderate,
            ),
            Scale::Overall => (
                self.thresholds.overall_strong,
                self.thresholds.overall_moderate,
            ),
        };

        if !score.is_finite() || score < 0.0 || score > scale.max() {
            ScoreBucket::Weak
        } else if score >= strong {
            ScoreBucket::Strong
        } else if score >= moderate {
            ScoreBucket::Moderate
        } else {
            ScoreBucket::Weak
        }
    }

    /// Classify a 0–10 score together with a verdict string.
    #[must_use]
    pub fn classify(&self, score: f64, verdict: &str) -> Classification {
        self.classify_on(Scale::Dimension, score, verdict)
    }

    /// Classify a 0–100 overall score together with a verdict string.
    #[must_use]
    pub fn classify_overall(&self, score: f64, verdict: &str) -> Classification {
        self.classify_on(Scale::Overall, score, verdict)
    }

    fn classify_on(&self, scale: Scale, score: f64, verdict: &str) -> Classification {
        let score_bucket = self.score_bucket(scale, score);
        let verdict = Verdict::parse(verdict);
        let label = if verdict == Verdict::Unknown {
            score_bucket.label()
        } else {
            verdict.label()
        };
        Classification {
            score_bucket,
            color_bucket: score_bucket.color(),
            verdict,
            verdict_bucket: verdict_bucket(verdict),
            label,
        }
    }
}

/// Classify a 0–10 score with the default thresholds.
#[must_use]
pub fn classify(score: f64, verdict: &str) -> Classification {
    Classifier::default().classify(score, verdict)
}

/// Classify a 0–100 score with the default thresholds.
#[must_use]
pub fn classify_overall(score: f64, verdict: &str) -> Classification {
    Classifier::default().classify_overall(score, verdict)
}

#[must_use]
pub fn verdict_bucket(verdict: Verdict) -> ColorBucket {
    match verdict {
        Verdict::Go => ColorBucket::Positive,
        Verdict::ConditionalGo => ColorBucket::Caution,
        Verdict::NoGo | Verdict::Reject => ColorBucket::Negative,
        Verdict::Unknown => ColorBucket::Neutral,
    }
}

/// Width of a 0–10 score bar as a percentage.
#[must_use]
pub fn bar_width_pct(score: f64) -> f64 {
    if score.is_finite() {
        (score * 10.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Risk levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    Critical,
    High,
    Medium,
    Low,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskStyle {
    pub bucket: RiskBucket,
    pub display_label: String,
}

/// Style a free-text risk level. Unknown text keeps its own label and takes
/// the neutral bucket; blank text is labelled `N/A`.
#[must_use]
pub fn risk_level_style(level: &str) -> RiskStyle {
    let parsed = RiskLevel::parse(level);
    if parsed == RiskLevel::Unknown {
        let trimmed = level.trim();
        return RiskStyle {
            bucket: RiskBucket::Neutral,
            display_label: if trimmed.is_empty() {
                "N/A".to_string()
            } else {
                trimmed.to_uppercase()
            },
        };
    }
    risk_style(parsed)
}

/// Style an already parsed risk level.
#[must_use]
pub fn risk_style(level: RiskLevel) -> RiskStyle {
    let bucket = match level {
        RiskLevel::Fatal | RiskLevel::Critical => RiskBucket::Critical,
        RiskLevel::High => RiskBucket::High,
        RiskLevel::Medium => RiskBucket::Medium,
        RiskLevel::Low | RiskLevel::None => RiskBucket::Low,
        RiskLevel::Unknown => RiskBucket::Neutral,
    };
    let display_label = match level {
        RiskLevel::Unknown => "N/A".to_string(),
        known => known.label().to_ascii_uppercase(),
    };
    RiskStyle {
        bucket,
        display_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_scores_bucket_on_default_thresholds() {
        assert_eq!(classify(8.5, "").score_bucket, ScoreBucket::Strong);
        assert_eq!(classify(8.0, "").score_bucket, ScoreBucket::Strong);
        assert_eq!(classify(6.0, "").score_bucket, ScoreBucket::Moderate);
        assert_eq!(classify(5.9, "").score_bucket, ScoreBucket::Weak);
    }

    #[test]
    fn overall_scores_bucket_on_scaled_thresholds() {
        assert_eq!(classify_overall(75.0, "").score_bucket, ScoreBucket::Strong);
        assert_eq!(classify_overall(74.9, "").score_bucket, ScoreBucket::Moderate);
        assert_eq!(classify_overall(60.0, "").score_bucket, ScoreBucket::Moderate);
        assert_eq!(classify_overall(59.0, "").score_bucket, ScoreBucket::Weak);
    }

    #[test]
    fn nan_and_out_of_range_scores_are_weak() {
        assert_eq!(classify(f64::NAN, "GO").score_bucket, ScoreBucket::Weak);
        assert_eq!(classify(f64::INFINITY, "").score_bucket, ScoreBucket::Weak);
        assert_eq!(classify(-1.0, "").score_bucket, ScoreBucket::Weak);
        assert_eq!(classify(11.0, "").score_bucket, ScoreBucket::Weak);
        assert_eq!(classify_overall(101.0, "").color_bucket, ColorBucket::Negative);
    }

    #[test]
    fn color_bucket_is_monotone_in_score() {
        let scores: Vec<f64> = (0..=100).map(|i| f64::from(i) / 10.0).collect();
        for pair in scores.windows(2) {
            let lower = classify(pair[0], "REJECT").color_bucket;
            let higher = classify(pair[1], "GO").color_bucket;
            assert!(
                lower <= higher,
                "{} -> {lower:?} is more positive than {} -> {higher:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn verdicts_map_to_buckets() {
        assert_eq!(classify(5.0, "GO").verdict_bucket, ColorBucket::Positive);
        assert_eq!(
            classify(5.0, "CONDITIONAL GO").verdict_bucket,
            ColorBucket::Caution
        );
        assert_eq!(classify(5.0, "NO-GO").verdict_bucket, ColorBucket::Negative);
        assert_eq!(classify(5.0, "REJECT").verdict_bucket, ColorBucket::Negative);
        assert_eq!(classify(5.0, "MAYBE").verdict_bucket, ColorBucket::Neutral);
    }

    #[test]
    fn label_prefers_recognized_verdict() {
        assert_eq!(classify(9.0, "conditional go").label, "CONDITIONAL GO");
        assert_eq!(classify(9.0, "").label, "Strong");
        assert_eq!(classify(3.0, "unclear").label, "Weak");
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let classifier = Classifier::new(ScoreThresholds {
            dimension_strong: 9.0,
            dimension_moderate: 7.0,
            ..ScoreThresholds::default()
        });
        assert_eq!(
            classifier.score_bucket(Scale::Dimension, 8.5),
            ScoreBucket::Moderate
        );
        assert_eq!(
            classifier.score_bucket(Scale::Dimension, 6.5),
            ScoreBucket::Weak
        );
        assert_eq!(
            classifier.score_bucket(Scale::Overall, 80.0),
            ScoreBucket::Strong
        );
    }

    #[test]
    fn bar_width_is_clamped() {
        assert!((bar_width_pct(7.5) - 75.0).abs() < f64::EPSILON);
        assert!((bar_width_pct(12.0) - 100.0).abs() < f64::EPSILON);
        assert!(bar_width_pct(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn risk_levels_map_to_five_buckets() {
        assert_eq!(risk_level_style("FATAL").bucket, RiskBucket::Critical);
        assert_eq!(risk_level_style("critical").bucket, RiskBucket::Critical);
        assert_eq!(risk_level_style("High").bucket, RiskBucket::High);
        assert_eq!(risk_level_style("moderate").bucket, RiskBucket::Medium);
        assert_eq!(risk_level_style("LOW").bucket, RiskBucket::Low);
        assert_eq!(risk_level_style("none").bucket, RiskBucket::Low);
        assert_eq!(risk_level_style("severe-ish").bucket, RiskBucket::Neutral);
    }

    #[test]
    fn risk_display_labels() {
        assert_eq!(risk_level_style("fatal").display_label, "FATAL");
        assert_eq!(risk_level_style("moderate").display_label, "MEDIUM");
        assert_eq!(risk_level_style(" elevated ").display_label, "ELEVATED");
        assert_eq!(risk_level_style("").display_label, "N/A");
        assert_eq!(risk_style(RiskLevel::Unknown).display_label, "N/A");
    }
}
