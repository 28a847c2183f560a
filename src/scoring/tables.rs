//! Weight and threshold tables used by the scoring engine.
//!
//! The tables are plain immutable values handed to
//! [`ScoringEngine`](super::ScoringEngine). [`ScoringTables::default`] is the
//! fixed production configuration; tests may build their own tables, which
//! are validated before an engine accepts them.

use serde::{Deserialize, Serialize};

/// Weights for the final score (sum to 1.0).
///
/// OCR quality has no weight: it is reported in the breakdown only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Seal/logo match reported by the image analyzer
    pub logo_match: f64,
    /// Layout similarity reported by the layout analyzer
    pub layout_similarity: f64,
    /// Derived signature authenticity
    pub signature_authenticity: f64,
}

impl ScoringWeights {
    pub const FIXED: Self = Self {
        logo_match: 0.40,
        layout_similarity: 0.35,
        signature_authenticity: 0.25,
    };

    /// Return weights as an array for iteration
    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        [
            self.logo_match,
            self.layout_similarity,
            self.signature_authenticity,
        ]
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::FIXED
    }
}

/// Closed interval `[low, high]` of fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub low: f64,
    pub high: f64,
}

impl ScoreRange {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Two-branch policy for the derived signature score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignaturePolicy {
    /// Minimum seal and layout fraction for the high-integrity branch
    pub threshold: f64,
    /// Draw interval when both seal and layout reach the threshold
    pub high_integrity: ScoreRange,
    /// Draw interval otherwise
    pub low_integrity: ScoreRange,
}

impl SignaturePolicy {
    /// Both inputs must reach the threshold; the bound is inclusive.
    #[must_use]
    pub fn is_high_integrity(&self, seal: f64, layout: f64) -> bool {
        seal >= self.threshold && layout >= self.threshold
    }

    /// Interval the signature score is drawn from for these inputs
    #[must_use]
    pub fn range_for(&self, seal: f64, layout: f64) -> ScoreRange {
        if self.is_high_integrity(seal, layout) {
            self.high_integrity
        } else {
            self.low_integrity
        }
    }
}

impl Default for SignaturePolicy {
    fn default() -> Self {
        Self {
            threshold: 0.80,
            high_integrity: ScoreRange::new(0.90, 1.00),
            low_integrity: ScoreRange::new(0.40, 0.70),
        }
    }
}

/// Inclusive lower bounds (percent) for each fraud-likelihood bucket.
/// Anything below `high` is `VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FraudThresholds {
    pub very_low: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl FraudThresholds {
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [self.very_low, self.low, self.medium, self.high]
    }
}

impl Default for FraudThresholds {
    fn default() -> Self {
        Self {
            very_low: 80.0,
            low: 65.0,
            medium: 50.0,
            high: 35.0,
        }
    }
}

/// Inclusive lower bounds (percent) for each authenticity level.
/// Anything below `questionable` is `LikelyFraudulent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuthenticityThresholds {
    pub highly_authentic: f64,
    pub likely_authentic: f64,
    pub uncertain: f64,
    pub questionable: f64,
}

impl AuthenticityThresholds {
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [
            self.highly_authentic,
            self.likely_authentic,
            self.uncertain,
            self.questionable,
        ]
    }
}

impl Default for AuthenticityThresholds {
    fn default() -> Self {
        Self {
            highly_authentic: 85.0,
            likely_authentic: 70.0,
            uncertain: 55.0,
            questionable: 40.0,
        }
    }
}

/// Minimum analyzer success rates for each confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.75,
            medium: 0.50,
        }
    }
}

/// Every table the engine needs, bundled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringTables {
    pub weights: ScoringWeights,
    pub signature: SignaturePolicy,
    pub fraud: FraudThresholds,
    pub authenticity: AuthenticityThresholds,
    pub confidence: ConfidenceThresholds,
}

impl ScoringTables {
    /// Replace the weights
    #[must_use]
    pub const fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the signature policy
    #[must_use]
    pub const fn with_signature_policy(mut self, policy: SignaturePolicy) -> Self {
        self.signature = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_weights_sum_to_one() {
        let sum = ScoringWeights::FIXED.sum();
        assert!((sum - 1.0).abs() < f64::EPSILON, "weights sum to {sum}");
    }

    #[test]
    fn test_signature_threshold_is_inclusive() {
        let policy = SignaturePolicy::default();
        assert!(policy.is_high_integrity(0.80, 0.80));
        assert!(!policy.is_high_integrity(0.80, 0.7999));
        assert!(!policy.is_high_integrity(1.0, 0.0));
        assert_eq!(policy.range_for(0.9, 0.9), ScoreRange::new(0.90, 1.00));
        assert_eq!(policy.range_for(0.9, 0.5), ScoreRange::new(0.40, 0.70));
    }

    #[test]
    fn test_default_thresholds_descend() {
        let fraud = FraudThresholds::default().as_array();
        assert!(fraud.windows(2).all(|w| w[0] > w[1]));
        let auth = AuthenticityThresholds::default().as_array();
        assert!(auth.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_with_weights_replaces_only_weights() {
        let weights = ScoringWeights {
            logo_match: 0.5,
            layout_similarity: 0.5,
            signature_authenticity: 0.0,
        };
        let tables = ScoringTables::default().with_weights(weights);
        assert_eq!(tables.weights, weights);
        assert_eq!(tables.signature, SignaturePolicy::default());
    }
}
