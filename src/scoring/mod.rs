//! Certificate authenticity scoring.
//!
//! Turns the four analyzer outcomes of an [`AnalysisBundle`](crate::model::AnalysisBundle)
//! into a [`FinalVerdict`]:
//!
//! - **Normalization**: seal match and layout similarity as fractions, with
//!   defaults for failed analyzers or missing metrics
//! - **Signature**: a score drawn from an interval picked by seal and layout integrity
//! - **Aggregation**: fixed 40/35/25 weighting, rounded to two decimals
//! - **Classification**: fraud likelihood and authenticity level from independent tables
//! - **Confidence**: share of analyzers that reported success
//!
//! OCR quality is computed and reported but carries no weight.
//!
//! # Usage
//!
//! ```
//! use cert_authenticity::model::AnalysisBundle;
//! use cert_authenticity::scoring::{AuthenticityLevel, ScoringEngine};
//!
//! let engine = ScoringEngine::new();
//! let verdict = engine.score(&AnalysisBundle::default());
//!
//! assert!(!verdict.is_degraded());
//! assert_ne!(verdict.authenticity_level, AuthenticityLevel::Unknown);
//! ```

mod aggregate;
mod classify;
mod confidence;
mod engine;
mod normalize;
mod ocr_quality;
mod signature;
mod tables;
mod verdict;

pub use aggregate::{as_percentage, round_to_hundredths, weighted_percentage};
pub use confidence::{estimate_confidence, success_rate};
pub use engine::{ScoringEngine, SCORING_ENGINE_VERSION};
pub use normalize::{
    NormalizedInputs, DEFAULT_LAYOUT_SIMILARITY, DEFAULT_SEAL_MATCH, LAYOUT_SIMILARITY_METRIC,
    SEAL_MATCH_METRIC,
};
pub use ocr_quality::{ocr_quality_score, SCORED_FIELDS};
pub use signature::derive_signature_score;
pub use tables::{
    AuthenticityThresholds, ConfidenceThresholds, FraudThresholds, ScoreRange, ScoringTables,
    ScoringWeights, SignaturePolicy,
};
pub use verdict::{AuthenticityLevel, Confidence, FinalVerdict, FraudLikelihood, ScoreBreakdown};
