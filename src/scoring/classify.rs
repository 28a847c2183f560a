//! Threshold tables mapping the final score to labels.
//!
//! Both tables read the same score independently; bounds are inclusive and
//! checked from the top down.

use super::tables::{AuthenticityThresholds, FraudThresholds};
use super::verdict::{AuthenticityLevel, FraudLikelihood};

impl FraudLikelihood {
    /// Bucket for a final score (0-100)
    #[must_use]
    pub fn from_score(score: f64, thresholds: &FraudThresholds) -> Self {
        if score >= thresholds.very_low {
            Self::VeryLow
        } else if score >= thresholds.low {
            Self::Low
        } else if score >= thresholds.medium {
            Self::Medium
        } else if score >= thresholds.high {
            Self::High
        } else {
            Self::VeryHigh
        }
    }
}

impl AuthenticityLevel {
    /// Level for a final score (0-100). Never returns `Unknown`.
    #[must_use]
    pub fn from_score(score: f64, thresholds: &AuthenticityThresholds) -> Self {
        if score >= thresholds.highly_authentic {
            Self::HighlyAuthentic
        } else if score >= thresholds.likely_authentic {
            Self::LikelyAuthentic
        } else if score >= thresholds.uncertain {
            Self::Uncertain
        } else if score >= thresholds.questionable {
            Self::Questionable
        } else {
            Self::LikelyFraudulent
        }
    }
}
