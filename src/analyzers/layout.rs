//! Layout structure, alignment and anomaly heuristics.

use super::raster::RasterStats;
use super::AnalyzerReport;
use serde::{Deserialize, Serialize};

pub const LOW_QUALITY_ANOMALY: &str = "Low image quality or blur detected";
pub const DIMENSIONS_ANOMALY: &str = "Unusual document dimensions detected";

/// Layout analyzer output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Mean of structure and alignment
    pub layout_similarity: f64,
    pub structure_score: f64,
    pub alignment_score: f64,
    pub anomalies_detected: usize,
    pub anomalies: Vec<String>,
}

impl AnalyzerReport for LayoutReport {}

#[must_use]
pub fn analyze_layout(stats: &RasterStats) -> LayoutReport {
    let structure_score = if stats.gray_variance > 1500.0 {
        80.0
    } else if stats.gray_variance > 800.0 {
        65.0
    } else {
        55.0
    };
    let alignment_score = if stats.edge_density > 30.0 {
        75.0
    } else if stats.edge_density > 15.0 {
        65.0
    } else {
        55.0
    };
    let anomalies = detect_anomalies(stats);

    LayoutReport {
        layout_similarity: (structure_score + alignment_score) / 2.0,
        structure_score,
        alignment_score,
        anomalies_detected: anomalies.len(),
        anomalies,
    }
}

fn detect_anomalies(stats: &RasterStats) -> Vec<String> {
    let mut anomalies = Vec::new();
    if stats.gray_variance < 500.0 {
        anomalies.push(LOW_QUALITY_ANOMALY.to_string());
    }
    let aspect = stats.aspect_ratio();
    if !(0.5..=2.5).contains(&aspect) {
        anomalies.push(DIMENSIONS_ANOMALY.to_string());
    }
    anomalies
}
