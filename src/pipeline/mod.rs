//! Pipeline orchestration for certificate scoring.
//!
//! Shared load → analyze → score → report stages used by the CLI command
//! handlers.

mod analyze;
mod load;
mod output;
mod report_stage;
mod score;

pub use analyze::{analyze_page, PageInput};
pub use load::{document_name, load_bundle, load_optional_text};
pub use output::{write_verdicts, OutputTarget};
pub use report_stage::{exit_code_for, output_reports};
pub use score::{score_bundle, score_files};

use crate::error::CertError;

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an input file
    #[error("Load failed for {path}: {source}")]
    LoadFailed { path: String, source: CertError },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    /// Message including every underlying cause
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::LoadFailed { source, .. } => source.display_chain(),
            Self::ReportFailed { source } => format!("{source:#}"),
        }
    }
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Every document scored at or above the minimum
    pub const SUCCESS: i32 = 0;
    /// At least one document scored below `--min-score`
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
