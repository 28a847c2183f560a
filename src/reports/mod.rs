//! Report generators for scored certificates.
//!
//! Supports the following output formats:
//! - JSON: the analysis response envelope, one object per document
//! - Summary: compact text for terminals, optionally colored

mod json;
mod summary;
mod types;

pub use json::{
    AnalysisSection, JsonReporter, LayoutDetails, OcrData, ResponseEnvelope, SignatureAnalysis,
    VisualAnalysis,
};
pub use summary::SummaryReporter;
pub use types::{DocumentAnalysis, DocumentReport, ReportConfig, ReportFormat};

use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render reports for one or more documents
    fn generate(
        &self,
        reports: &[DocumentReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the output format
    fn format(&self) -> ReportFormat;
}

/// Create a report generator with color control.
///
/// `Auto` should be resolved by the caller; here it falls back to JSON.
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json | ReportFormat::Auto => Box::new(JsonReporter::new()),
    }
}
