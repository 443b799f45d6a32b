use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Score cut-offs used by the classifier. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreThresholds {
    /// Dimension scores (0–10) at or above this are "strong".
    pub dimension_strong: f64,
    /// Dimension scores (0–10) at or above this, and below strong, are "moderate".
    pub dimension_moderate: f64,
    /// Overall scores (0–100) at or above this are "strong".
    pub overall_strong: f64,
    pub overall_moderate: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            dimension_strong: 8.0,
            dimension_moderate: 6.0,
            overall_strong: 75.0,
            overall_moderate: 60.0,
        }
    }
}

/// Typographic density for one render context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    pub base_font_pt: f32,
    pub heading_font_pt: f32,
    pub block_padding_pt: f32,
    pub line_height: f32,
}

impl DensityProfile {
    #[must_use]
    pub fn screen() -> Self {
        Self {
            base_font_pt: 12.0,
            heading_font_pt: 20.0,
            block_padding_pt: 18.0,
            line_height: 1.6,
        }
    }

    #[must_use]
    pub fn print() -> Self {
        Self {
            base_font_pt: 9.0,
            heading_font_pt: 14.0,
            block_padding_pt: 8.0,
            line_height: 1.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationProfile {
    pub thresholds: ScoreThresholds,
    pub screen: DensityProfile,
    pub print: DensityProfile,
    /// Call-to-action shown on locked section teasers.
    pub locked_call_to_action: String,
}

impl Default for PresentationProfile {
    fn default() -> Self {
        Self {
            thresholds: ScoreThresholds::default(),
            screen: DensityProfile::screen(),
            print: DensityProfile::print(),
            locked_call_to_action: "Sign in to unlock the full report".to_string(),
        }
    }
}

impl PresentationProfile {
    /// Parse and validate a profile from YAML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the YAML is malformed or fails validation.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let profile: PresentationProfile =
            serde_yaml::from_str(content).map_err(ConfigError::ProfileFileParse)?;
        validate_profile(&profile)?;
        Ok(profile)
    }
}

/// Load and validate the presentation profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile(path: &Path) -> Result<PresentationProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    PresentationProfile::from_yaml_str(&content)
}

fn validate_profile(profile: &PresentationProfile) -> Result<(), ConfigError> {
    let t = &profile.thresholds;

    validate_scale("dimension", t.dimension_moderate, t.dimension_strong, 10.0)?;
    validate_scale("overall", t.overall_moderate, t.overall_strong, 100.0)?;

    for (name, density) in [("screen", &profile.screen), ("print", &profile.print)] {
        let values = [
            density.base_font_pt,
            density.heading_font_pt,
            density.block_padding_pt,
            density.line_height,
        ];
        if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::Validation(format!(
                "{name} density values must be positive"
            )));
        }
    }

    if profile.locked_call_to_action.trim().is_empty() {
        return Err(ConfigError::Validation(
            "locked_call_to_action must be non-empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_scale(name: &str, moderate: f64, strong: f64, max: f64) -> Result<(), ConfigError> {
    let in_range = |v: f64| v.is_finite() && (0.0..=max).contains(&v);
    if !in_range(moderate) || !in_range(strong) {
        return Err(ConfigError::Validation(format!(
            "{name} thresholds must lie within 0..={max}"
        )));
    }
    if moderate >= strong {
        return Err(ConfigError::Validation(format!(
            "{name} moderate threshold {moderate} must be below strong threshold {strong}"
        )));
    }
    Ok(())
}
