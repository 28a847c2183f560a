//! Verdict types produced by the scoring engine.

use super::tables::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal fraud-likelihood bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FraudLikelihood {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl FraudLikelihood {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for FraudLikelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Authenticity level derived from the final score.
///
/// `Unknown` only appears on degraded verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthenticityLevel {
    #[serde(rename = "Highly Authentic")]
    HighlyAuthentic,
    #[serde(rename = "Likely Authentic")]
    LikelyAuthentic,
    Uncertain,
    Questionable,
    #[serde(rename = "Likely Fraudulent")]
    LikelyFraudulent,
    Unknown,
}

impl AuthenticityLevel {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::HighlyAuthentic => "Highly Authentic",
            Self::LikelyAuthentic => "Likely Authentic",
            Self::Uncertain => "Uncertain",
            Self::Questionable => "Questionable",
            Self::LikelyFraudulent => "Likely Fraudulent",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AuthenticityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Confidence tier, from the share of analyzers that succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-component percentages (0-100), rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub ocr_quality: f64,
    pub layout_similarity: f64,
    pub seal_match: f64,
    pub signature_authenticity: f64,
}

/// Final result of scoring one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct FinalVerdict {
    /// Weighted score (0-100)
    pub final_score: f64,
    pub fraud_likelihood: FraudLikelihood,
    pub authenticity_level: AuthenticityLevel,
    pub confidence: Confidence,
    #[serde(rename = "score_breakdown")]
    pub breakdown: ScoreBreakdown,
    pub weights_used: ScoringWeights,
    /// Diagnostic message when scoring could not complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FinalVerdict {
    /// Fallback verdict for a bundle that could not be aggregated.
    pub fn degraded(
        error: impl Into<String>,
        confidence: Confidence,
        weights_used: ScoringWeights,
    ) -> Self {
        Self {
            final_score: 0.0,
            fraud_likelihood: FraudLikelihood::High,
            authenticity_level: AuthenticityLevel::Unknown,
            confidence,
            breakdown: ScoreBreakdown::default(),
            weights_used,
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}
