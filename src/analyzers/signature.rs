//! Signature presence and quality heuristics.

use super::raster::RasterStats;
use super::AnalyzerReport;
use serde::{Deserialize, Serialize};

/// Minimum grayscale variance for a page to count as signed
const DETECTION_VARIANCE: f64 = 500.0;

/// Signature analyzer output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureReport {
    pub signature_detected: bool,
    /// Percentage
    pub authenticity_score: f64,
    pub signature_quality: String,
}

impl AnalyzerReport for SignatureReport {}

#[must_use]
pub fn analyze_signature(stats: &RasterStats) -> SignatureReport {
    let score = if stats.gray_variance > 1500.0 {
        75.0
    } else if stats.gray_variance > 800.0 {
        65.0
    } else {
        55.0
    };
    SignatureReport {
        signature_detected: stats.gray_variance > DETECTION_VARIANCE,
        authenticity_score: score,
        signature_quality: quality_label(score).to_string(),
    }
}

/// Quality label for a signature score
#[must_use]
pub fn quality_label(score: f64) -> &'static str {
    if score > 70.0 {
        "High Quality"
    } else if score > 50.0 {
        "Medium Quality"
    } else {
        "Low Quality"
    }
}
