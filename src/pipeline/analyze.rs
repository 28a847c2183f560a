//! Running the built-in analyzers over one rasterized page.

use crate::analyzers::{
    analyze_image, analyze_layout, analyze_signature, analyze_text, AnalyzerReport, RasterStats,
};
use crate::model::{AnalysisBundle, AnalyzerOutcome};
use std::path::{Path, PathBuf};

/// One page to analyze
#[derive(Debug, Clone, Default)]
pub struct PageInput {
    /// Rasterized page (PNG or JPEG)
    pub image: PathBuf,
    /// Text layer embedded in the original document
    pub embedded_text: Option<String>,
    /// Text recognized by an OCR engine
    pub ocr_text: Option<String>,
}

/// Run all four analyzers and collect their outcomes.
///
/// A page that cannot be decoded fails the three raster analyzers; the text
/// analyzer still runs.
#[must_use]
pub fn analyze_page(input: &PageInput, run_parallel: bool) -> AnalysisBundle {
    let text = || analyze_text(input.embedded_text.as_deref(), input.ocr_text.as_deref());
    let raster = || raster_outcomes(&input.image, run_parallel);

    let (ocr, (image, signature, layout)) = if run_parallel {
        rayon::join(text, raster)
    } else {
        (text(), raster())
    };

    AnalysisBundle::new(ocr, image, signature, layout)
}

fn raster_outcomes(
    path: &Path,
    run_parallel: bool,
) -> (AnalyzerOutcome, AnalyzerOutcome, AnalyzerOutcome) {
    let stats = match RasterStats::from_path(path) {
        Ok(stats) => stats,
        Err(e) => {
            let message = e.display_chain();
            tracing::warn!("Raster analysis unavailable: {}", message);
            return (
                AnalyzerOutcome::failure(message.clone()),
                AnalyzerOutcome::failure(message.clone()),
                AnalyzerOutcome::failure(message),
            );
        }
    };

    let image = || analyze_image(&stats).to_outcome();
    let signature = || analyze_signature(&stats).to_outcome();
    let layout = || analyze_layout(&stats).to_outcome();

    if run_parallel {
        let (image, (signature, layout)) = rayon::join(image, || rayon::join(signature, layout));
        (image, signature, layout)
    } else {
        (image(), signature(), layout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use tempfile::TempDir;

    fn write_page(dir: &Path) -> PathBuf {
        let path = dir.join("page.png");
        GrayImage::from_fn(140, 100, |x, _| Luma([if x % 20 < 10 { 20 } else { 230 }]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let tmp = TempDir::new().unwrap();
        let input = PageInput {
            image: write_page(tmp.path()),
            embedded_text: Some("This is to certify that Ada Lovelace, University of London".into()),
            ocr_text: None,
        };

        let parallel = analyze_page(&input, true);
        let sequential = analyze_page(&input, false);
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.success_flags(), [true; 4]);
        // Stripes of 20 and 230: variance 105^2, aspect 1.4
        assert_eq!(
            parallel.image.metric("seal_match_percentage").and_then(|v| v.as_f64()),
            Some(85.0)
        );
        assert_eq!(
            parallel.image.metric("layout_similarity").and_then(|v| v.as_f64()),
            Some(80.0)
        );
    }

    #[test]
    fn test_unreadable_page_fails_raster_analyzers_only() {
        let input = PageInput {
            image: PathBuf::from("/nonexistent/page.png"),
            embedded_text: None,
            ocr_text: Some("Certificate of Achievement".into()),
        };

        let bundle = analyze_page(&input, true);
        assert_eq!(bundle.success_flags(), [true, false, false, false]);
        assert!(bundle.image.failure_message().unwrap().contains("page.png"));
    }
}
