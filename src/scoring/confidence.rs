//! Confidence tier from analyzer success flags.

use super::tables::ConfidenceThresholds;
use super::verdict::Confidence;

/// Share of analyzers that succeeded; `0.0` for an empty slice.
#[must_use]
pub fn success_rate(flags: &[bool]) -> f64 {
    if flags.is_empty() {
        return 0.0;
    }
    flags.iter().filter(|&&ok| ok).count() as f64 / flags.len() as f64
}

/// Confidence tier for the given success flags
#[must_use]
pub fn estimate_confidence(flags: &[bool], thresholds: &ConfidenceThresholds) -> Confidence {
    let rate = success_rate(flags);
    if rate >= thresholds.high {
        Confidence::High
    } else if rate >= thresholds.medium {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
