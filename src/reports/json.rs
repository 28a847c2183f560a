//! JSON report generator.
//!
//! Emits the analysis response envelope: verdict, breakdown and the detail
//! sections read back from the analyzer outcomes. Detail values missing from
//! an outcome are shown as `0`, `false`, `"Unknown"` or an empty list.

use super::{DocumentAnalysis, DocumentReport, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::AnalyzerOutcome;
use crate::scoring::{
    AuthenticityLevel, Confidence, FraudLikelihood, ScoreBreakdown, ScoringWeights,
    SCORING_ENGINE_VERSION,
};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    /// A single document renders as one envelope, several as an array.
    fn generate(
        &self,
        reports: &[DocumentReport],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let envelopes: Vec<ResponseEnvelope> = reports
            .iter()
            .map(|report| ResponseEnvelope::build(report, config))
            .collect();
        match envelopes.as_slice() {
            [single] => self.serialize(single),
            _ => self.serialize(&envelopes),
        }
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// ============================================================================
// Envelope structures
// ============================================================================

/// Response for one document
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisSection>,
    pub scoring_engine_version: &'static str,
    pub analyzed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    #[must_use]
    pub fn build(report: &DocumentReport, config: &ReportConfig) -> Self {
        Self {
            success: report.is_success(),
            filename: report.filename.clone(),
            analysis: report
                .analysis
                .as_ref()
                .map(|analysis| AnalysisSection::build(analysis, config)),
            scoring_engine_version: SCORING_ENGINE_VERSION,
            analyzed_at: report.analyzed_at.to_rfc3339(),
            error: report.error().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisSection {
    pub authenticity_score: f64,
    pub fraud_likelihood: FraudLikelihood,
    pub authenticity_level: AuthenticityLevel,
    pub confidence: Confidence,
    pub score_breakdown: ScoreBreakdown,
    pub weights_used: IndexMap<&'static str, String>,
    pub ocr_data: OcrData,
    pub visual_analysis: VisualAnalysis,
    pub signature_analysis: SignatureAnalysis,
    pub layout_details: LayoutDetails,
}

impl AnalysisSection {
    fn build(analysis: &DocumentAnalysis, config: &ReportConfig) -> Self {
        let DocumentAnalysis { bundle, verdict } = analysis;
        Self {
            authenticity_score: verdict.final_score,
            fraud_likelihood: verdict.fraud_likelihood,
            authenticity_level: verdict.authenticity_level,
            confidence: verdict.confidence,
            score_breakdown: verdict.breakdown,
            weights_used: weight_labels(&verdict.weights_used),
            ocr_data: OcrData {
                extracted_text: text_metric(&bundle.ocr, "text", "")
                    .chars()
                    .take(config.text_preview_chars)
                    .collect(),
                word_count: count_metric(&bundle.ocr, "word_count"),
                extracted_fields: bundle
                    .ocr
                    .metric("extracted_data")
                    .cloned()
                    .unwrap_or_else(|| Value::Object(Map::new())),
            },
            visual_analysis: VisualAnalysis {
                seal_match_percentage: number_metric(&bundle.image, "seal_match_percentage"),
                layout_similarity: number_metric(&bundle.layout, "layout_similarity"),
                formatting_score: number_metric(&bundle.image, "formatting_score"),
                image_quality: number_metric(&bundle.image, "image_quality"),
            },
            signature_analysis: SignatureAnalysis {
                signature_detected: bundle
                    .signature
                    .metric("signature_detected")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                authenticity_score: number_metric(&bundle.signature, "authenticity_score"),
                signature_quality: text_metric(&bundle.signature, "signature_quality", "Unknown")
                    .to_string(),
            },
            layout_details: LayoutDetails {
                structure_score: number_metric(&bundle.layout, "structure_score"),
                alignment_score: number_metric(&bundle.layout, "alignment_score"),
                anomalies_detected: count_metric(&bundle.layout, "anomalies_detected"),
                anomalies: bundle
                    .layout
                    .metric("anomalies")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OcrData {
    pub extracted_text: String,
    pub word_count: u64,
    pub extracted_fields: Value,
}

#[derive(Debug, Serialize)]
pub struct VisualAnalysis {
    pub seal_match_percentage: f64,
    pub layout_similarity: f64,
    pub formatting_score: f64,
    pub image_quality: f64,
}

#[derive(Debug, Serialize)]
pub struct SignatureAnalysis {
    pub signature_detected: bool,
    pub authenticity_score: f64,
    pub signature_quality: String,
}

#[derive(Debug, Serialize)]
pub struct LayoutDetails {
    pub structure_score: f64,
    pub alignment_score: f64,
    pub anomalies_detected: u64,
    pub anomalies: Vec<String>,
}

/// Weights as one-decimal percentages under the service's keys, e.g.
/// `"logo_weight": "40.0%"`
fn weight_labels(weights: &ScoringWeights) -> IndexMap<&'static str, String> {
    let label = |w: f64| format!("{:.1}%", w * 100.0);
    IndexMap::from([
        ("logo_weight", label(weights.logo_match)),
        ("layout_weight", label(weights.layout_similarity)),
        ("signature_weight", label(weights.signature_authenticity)),
    ])
}

fn number_metric(outcome: &AnalyzerOutcome, key: &str) -> f64 {
    outcome.metric(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn count_metric(outcome: &AnalyzerOutcome, key: &str) -> u64 {
    outcome.metric(key).and_then(Value::as_u64).unwrap_or(0)
}

fn text_metric<'a>(outcome: &'a AnalyzerOutcome, key: &str, default: &'a str) -> &'a str {
    outcome.metric(key).and_then(Value::as_str).unwrap_or(default)
}
