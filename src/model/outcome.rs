//! Analyzer outcomes and the per-document analysis bundle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Raw metrics reported by a successful analyzer.
pub type Metrics = Map<String, Value>;

/// Message used when a bundle carries no entry for an analyzer.
pub const MISSING_OUTCOME_MESSAGE: &str = "no result reported";

/// The four analyzers feeding the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    /// Text extraction and certificate field parsing
    Ocr,
    /// Whole-page image statistics (seal, layout, formatting, quality)
    Image,
    /// Signature-region statistics
    Signature,
    /// Structure and alignment statistics
    Layout,
}

impl AnalyzerKind {
    /// All analyzer kinds, in bundle order.
    pub const ALL: [Self; 4] = [Self::Ocr, Self::Image, Self::Signature, Self::Layout];

    /// Key used for this analyzer in bundle JSON
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ocr => "ocr",
            Self::Image => "image",
            Self::Signature => "signature",
            Self::Layout => "layout",
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of one analyzer run.
///
/// On the wire this is the collaborator's flat JSON object: a `success` flag
/// next to the metrics, or `{"success": false, "error": "..."}`. Anything
/// without `"success": true` is a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Metrics", into = "Metrics")]
pub enum AnalyzerOutcome {
    /// Analyzer completed and reported metrics
    Success { metrics: Metrics },
    /// Analyzer failed; metrics are unavailable
    Failure { message: String },
}

impl AnalyzerOutcome {
    /// Successful outcome carrying the given metrics
    pub fn success(metrics: Metrics) -> Self {
        Self::Success { metrics }
    }

    /// Failed outcome with a diagnostic message
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Placeholder for an analyzer that reported nothing at all
    #[must_use]
    pub fn missing() -> Self {
        Self::failure(MISSING_OUTCOME_MESSAGE)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Metrics of a successful outcome
    #[must_use]
    pub const fn metrics(&self) -> Option<&Metrics> {
        match self {
            Self::Success { metrics } => Some(metrics),
            Self::Failure { .. } => None,
        }
    }

    /// A single metric; `None` for failures, absent keys and JSON nulls.
    #[must_use]
    pub fn metric(&self, key: &str) -> Option<&Value> {
        self.metrics()
            .and_then(|m| m.get(key))
            .filter(|v| !v.is_null())
    }

    /// Failure message, if any
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

impl From<Metrics> for AnalyzerOutcome {
    fn from(mut map: Metrics) -> Self {
        let succeeded = matches!(map.remove("success"), Some(Value::Bool(true)));
        if succeeded {
            return Self::Success { metrics: map };
        }

        let message = match map.remove("error") {
            Some(Value::String(msg)) if !msg.is_empty() => msg,
            Some(other) if !other.is_null() => other.to_string(),
            _ => "analysis reported failure".to_string(),
        };
        Self::Failure { message }
    }
}

impl From<AnalyzerOutcome> for Metrics {
    fn from(outcome: AnalyzerOutcome) -> Self {
        match outcome {
            AnalyzerOutcome::Success { mut metrics } => {
                metrics.insert("success".to_string(), Value::Bool(true));
                metrics
            }
            AnalyzerOutcome::Failure { message } => {
                let mut map = Map::new();
                map.insert("success".to_string(), Value::Bool(false));
                map.insert("error".to_string(), Value::String(message));
                map
            }
        }
    }
}

/// The four analyzer outcomes for one document.
///
/// Built once per document and consumed once by the scoring engine. Keys that
/// are absent from bundle JSON become [`AnalyzerOutcome::missing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    #[serde(default = "AnalyzerOutcome::missing")]
    pub ocr: AnalyzerOutcome,
    #[serde(default = "AnalyzerOutcome::missing")]
    pub image: AnalyzerOutcome,
    #[serde(default = "AnalyzerOutcome::missing")]
    pub signature: AnalyzerOutcome,
    #[serde(default = "AnalyzerOutcome::missing")]
    pub layout: AnalyzerOutcome,
}

impl AnalysisBundle {
    #[must_use]
    pub const fn new(
        ocr: AnalyzerOutcome,
        image: AnalyzerOutcome,
        signature: AnalyzerOutcome,
        layout: AnalyzerOutcome,
    ) -> Self {
        Self {
            ocr,
            image,
            signature,
            layout,
        }
    }

    /// Parse a bundle from collaborator JSON.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub const fn get(&self, kind: AnalyzerKind) -> &AnalyzerOutcome {
        match kind {
            AnalyzerKind::Ocr => &self.ocr,
            AnalyzerKind::Image => &self.image,
            AnalyzerKind::Signature => &self.signature,
            AnalyzerKind::Layout => &self.layout,
        }
    }

    pub fn set(&mut self, kind: AnalyzerKind, outcome: AnalyzerOutcome) {
        match kind {
            AnalyzerKind::Ocr => self.ocr = outcome,
            AnalyzerKind::Image => self.image = outcome,
            AnalyzerKind::Signature => self.signature = outcome,
            AnalyzerKind::Layout => self.layout = outcome,
        }
    }

    /// Per-analyzer success flags, in [`AnalyzerKind::ALL`] order
    #[must_use]
    pub fn success_flags(&self) -> [bool; 4] {
        AnalyzerKind::ALL.map(|kind| self.get(kind).is_success())
    }

    /// Analyzers that failed, with their messages
    pub fn failures(&self) -> impl Iterator<Item = (AnalyzerKind, &str)> + '_ {
        AnalyzerKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).failure_message().map(|msg| (kind, msg)))
    }
}

impl Default for AnalysisBundle {
    fn default() -> Self {
        Self::new(
            AnalyzerOutcome::missing(),
            AnalyzerOutcome::missing(),
            AnalyzerOutcome::missing(),
            AnalyzerOutcome::missing(),
        )
    }
}
