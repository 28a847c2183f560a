//! Visual element heuristics: seal, page proportions, formatting, resolution.

use super::raster::RasterStats;
use super::AnalyzerReport;
use serde::{Deserialize, Serialize};

/// Image analyzer output. All scores are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageReport {
    pub seal_match_percentage: f64,
    pub layout_similarity: f64,
    pub formatting_score: f64,
    pub image_quality: f64,
}

impl AnalyzerReport for ImageReport {}

/// Score the visual elements of a page
#[must_use]
pub fn analyze_image(stats: &RasterStats) -> ImageReport {
    ImageReport {
        seal_match_percentage: seal_score(stats.gray_variance),
        layout_similarity: proportion_score(stats.aspect_ratio()),
        formatting_score: formatting_score(stats.mean_brightness),
        image_quality: resolution_score(stats.pixel_count()),
    }
}

fn seal_score(variance: f64) -> f64 {
    if variance > 2000.0 {
        85.0
    } else if variance > 1000.0 {
        70.0
    } else {
        55.0
    }
}

/// Landscape (about A4/letter turned) or portrait certificate proportions
fn proportion_score(aspect: f64) -> f64 {
    let landscape = aspect > 1.2 && aspect < 1.6;
    let portrait = aspect > 0.7 && aspect < 0.9;
    if landscape || portrait {
        80.0
    } else {
        65.0
    }
}

fn formatting_score(mean_brightness: f64) -> f64 {
    if mean_brightness > 100.0 && mean_brightness < 200.0 {
        75.0
    } else {
        60.0
    }
}

fn resolution_score(pixels: u64) -> f64 {
    if pixels > 2_000_000 {
        85.0
    } else if pixels > 1_000_000 {
        70.0
    } else {
        55.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(width: u32, height: u32, variance: f64, brightness: f64) -> RasterStats {
        RasterStats {
            width,
            height,
            gray_variance: variance,
            mean_brightness: brightness,
            edge_density: 0.0,
        }
    }

    #[test]
    fn test_seal_score_tiers() {
        assert_eq!(seal_score(2500.0), 85.0);
        assert_eq!(seal_score(2000.0), 70.0);
        assert_eq!(seal_score(1000.5), 70.0);
        assert_eq!(seal_score(1000.0), 55.0);
    }

    #[test]
    fn test_proportion_bounds_are_exclusive() {
        assert_eq!(proportion_score(1.414), 80.0);
        assert_eq!(proportion_score(0.77), 80.0);
        assert_eq!(proportion_score(1.2), 65.0);
        assert_eq!(proportion_score(1.0), 65.0);
        assert_eq!(proportion_score(3.0), 65.0);
    }

    #[test]
    fn test_scanned_a4_landscape() {
        // 300 dpi A4 landscape
        let report = analyze_image(&stats(3508, 2480, 2600.0, 180.0));
        assert_eq!(report.seal_match_percentage, 85.0);
        assert_eq!(report.layout_similarity, 80.0);
        assert_eq!(report.formatting_score, 75.0);
        assert_eq!(report.image_quality, 85.0);
    }

    #[test]
    fn test_small_dark_square() {
        let report = analyze_image(&stats(800, 800, 300.0, 40.0));
        assert_eq!(report.seal_match_percentage, 55.0);
        assert_eq!(report.layout_similarity, 65.0);
        assert_eq!(report.formatting_score, 60.0);
        assert_eq!(report.image_quality, 55.0);
    }

    #[test]
    fn test_report_becomes_successful_outcome() {
        let outcome = analyze_image(&stats(1200, 1000, 1500.0, 150.0)).to_outcome();
        assert!(outcome.is_success());
        assert_eq!(
            outcome.metric("seal_match_percentage").and_then(|v| v.as_f64()),
            Some(70.0)
        );
        assert_eq!(outcome.metric("image_quality").and_then(|v| v.as_f64()), Some(70.0));
    }
}
