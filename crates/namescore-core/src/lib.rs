//! Shared types for namescore: the canonical report model, the presentation
//! profile that drives classification and print density, and application
//! configuration loaded from the environment.

pub mod app_config;
pub mod config;
pub mod profile;
pub mod report;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use profile::{load_profile, DensityProfile, PresentationProfile, ScoreThresholds};
pub use report::{
    CompetitorLandscape, CompetitorRecord, CountryLandscape, CulturalEntry, Dimension,
    DomainScope, DomainStatus, FinalAssessment, FrameworkDetail, FrameworkModule,
    MarketIntelligence, MatrixPoint, NormalizedEvaluation, NormalizedReport, PlatformStatus,
    ReasoningBlock, RiskLevel, ScoreBreakdown, SocialAvailability, SocialSource, SocialSummary,
    TrademarkMatrix, TrademarkMatrixRow, TrademarkResearch, Verdict,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read profile file {path}: {source}")]
    ProfileFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile file: {0}")]
    ProfileFileParse(#[from] serde_yaml::Error),

    #[error("profile validation failed: {0}")]
    Validation(String),
}
