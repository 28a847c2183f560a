//! Weighted combination of seal, layout and signature scores.

use super::tables::ScoringWeights;

/// Weighted final score as a percentage rounded to two decimals.
///
/// Inputs are fractions in `[0, 1]`.
#[must_use]
pub fn weighted_percentage(seal: f64, layout: f64, signature: f64, weights: &ScoringWeights) -> f64 {
    let fraction = seal * weights.logo_match
        + layout * weights.layout_similarity
        + signature * weights.signature_authenticity;
    round_to_hundredths(fraction * 100.0).clamp(0.0, 100.0)
}

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A `[0, 1]` fraction as a rounded percentage
#[must_use]
pub fn as_percentage(fraction: f64) -> f64 {
    round_to_hundredths(fraction * 100.0)
}
