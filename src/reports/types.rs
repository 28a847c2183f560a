//! Report type definitions.

use crate::config::DEFAULT_TEXT_PREVIEW_CHARS;
use crate::model::AnalysisBundle;
use crate::scoring::FinalVerdict;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Auto-detect: summary on a terminal, JSON otherwise
    #[default]
    Auto,
    /// API response envelope as JSON
    Json,
    /// Human-readable verdict summary
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Characters of extracted text included in the report
    pub text_preview_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            text_preview_chars: DEFAULT_TEXT_PREVIEW_CHARS,
        }
    }
}

/// Inputs and verdict for one scored document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAnalysis {
    pub bundle: AnalysisBundle,
    pub verdict: FinalVerdict,
}

/// Everything reported about one document.
///
/// `analysis` is `None` when the document could not be loaded at all.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    pub filename: String,
    pub analyzed_at: DateTime<Utc>,
    pub analysis: Option<DocumentAnalysis>,
    load_error: Option<String>,
}

impl DocumentReport {
    /// Report for a scored document
    pub fn scored(filename: impl Into<String>, bundle: AnalysisBundle, verdict: FinalVerdict) -> Self {
        Self {
            filename: filename.into(),
            analyzed_at: Utc::now(),
            analysis: Some(DocumentAnalysis { bundle, verdict }),
            load_error: None,
        }
    }

    /// Report for a document that could not be loaded
    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            analyzed_at: Utc::now(),
            analysis: None,
            load_error: Some(error.into()),
        }
    }

    /// Scored without degradation
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.analysis
            .as_ref()
            .is_some_and(|a| !a.verdict.is_degraded())
    }

    /// Load error or degraded-verdict message
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.load_error.as_deref().or_else(|| {
            self.analysis
                .as_ref()
                .and_then(|a| a.verdict.error.as_deref())
        })
    }

    #[must_use]
    pub fn verdict(&self) -> Option<&FinalVerdict> {
        self.analysis.as_ref().map(|a| &a.verdict)
    }
}
