//! Built-in analyzers.
//!
//! Lightweight heuristics over an already-rasterized certificate page and its
//! text. Each analyzer produces a typed report that converts into the
//! [`AnalyzerOutcome`] consumed by the scoring engine:
//!
//! - [`analyze_image`]: seal match, page proportions, formatting, resolution
//! - [`analyze_signature`]: signature presence and quality
//! - [`analyze_layout`]: structure, alignment and anomalies
//! - [`analyze_text`]: text selection and certificate field parsing
//!
//! The raster analyzers share one [`RasterStats`] computation per page.

mod layout;
mod raster;
mod signature;
mod text;
mod visual;

pub use layout::{analyze_layout, LayoutReport, DIMENSIONS_ANOMALY, LOW_QUALITY_ANOMALY};
pub use raster::RasterStats;
pub use signature::{analyze_signature, quality_label, SignatureReport};
pub use text::{analyze_text, extract_text, ExtractedFields, TextReport, TextSource};
pub use visual::{analyze_image, ImageReport};

use crate::model::AnalyzerOutcome;
use serde::Serialize;
use serde_json::Value;

/// A typed analyzer report that can be handed to the scoring engine.
pub trait AnalyzerReport: Serialize {
    /// Flatten the report into a successful outcome.
    fn to_outcome(&self) -> AnalyzerOutcome {
        match serde_json::to_value(self) {
            Ok(Value::Object(metrics)) => AnalyzerOutcome::success(metrics),
            Ok(other) => AnalyzerOutcome::failure(format!("report is not an object: {other}")),
            Err(e) => AnalyzerOutcome::failure(format!("report serialization failed: {e}")),
        }
    }
}
