//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable verdict for terminal usage.

use super::{DocumentReport, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::AnalyzerKind;
use crate::scoring::{AuthenticityLevel, FinalVerdict, FraudLikelihood};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn render_document(&self, report: &DocumentReport, lines: &mut Vec<String>) {
        lines.push(self.color(&format!("Certificate: {}", report.filename), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        let Some(analysis) = report.analysis.as_ref() else {
            lines.push(format!(
                "{} {}",
                self.color("Error:", "red"),
                report.error().unwrap_or("unknown error")
            ));
            return;
        };
        let verdict = &analysis.verdict;

        lines.push(format!(
            "{}  {:.2}/100",
            self.color("Authenticity score:", "cyan"),
            verdict.final_score
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Authenticity level:", "cyan"),
            self.color(verdict.authenticity_level.label(), level_color(verdict.authenticity_level))
        ));
        lines.push(format!(
            "{}    {}",
            self.color("Fraud likelihood:", "cyan"),
            self.color(verdict.fraud_likelihood.label(), fraud_color(verdict.fraud_likelihood))
        ));
        lines.push(format!(
            "{}          {}",
            self.color("Confidence:", "cyan"),
            verdict.confidence
        ));

        self.render_breakdown(verdict, lines);

        let failed: Vec<_> = analysis.bundle.failures().collect();
        if !failed.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Analyzer failures:", "yellow"));
            for (kind, message) in failed {
                lines.push(format!("  {:<10} {message}", analyzer_label(kind)));
            }
        }

        if let Some(error) = &verdict.error {
            lines.push(String::new());
            lines.push(format!("{} {error}", self.color("Scoring failed:", "red")));
        }
    }

    fn render_breakdown(&self, verdict: &FinalVerdict, lines: &mut Vec<String>) {
        let b = &verdict.breakdown;
        let w = &verdict.weights_used;
        lines.push(String::new());
        lines.push(self.color("Score breakdown:", "bold"));
        lines.push(format!(
            "  Seal match          {:>6.2}  {}",
            b.seal_match,
            self.color(&weight_note(w.logo_match), "dim")
        ));
        lines.push(format!(
            "  Layout similarity   {:>6.2}  {}",
            b.layout_similarity,
            self.color(&weight_note(w.layout_similarity), "dim")
        ));
        lines.push(format!(
            "  Signature           {:>6.2}  {}",
            b.signature_authenticity,
            self.color(&weight_note(w.signature_authenticity), "dim")
        ));
        lines.push(format!(
            "  OCR quality         {:>6.2}  {}",
            b.ocr_quality,
            self.color("(informational)", "dim")
        ));
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        reports: &[DocumentReport],
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            self.render_document(report, &mut lines);
        }
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

fn weight_note(weight: f64) -> String {
    format!("(weight {:.0}%)", weight * 100.0)
}

fn analyzer_label(kind: AnalyzerKind) -> &'static str {
    match kind {
        AnalyzerKind::Ocr => "OCR",
        AnalyzerKind::Image => "Image",
        AnalyzerKind::Signature => "Signature",
        AnalyzerKind::Layout => "Layout",
    }
}

const fn level_color(level: AuthenticityLevel) -> &'static str {
    match level {
        AuthenticityLevel::HighlyAuthentic | AuthenticityLevel::LikelyAuthentic => "green",
        AuthenticityLevel::Uncertain | AuthenticityLevel::Unknown => "yellow",
        AuthenticityLevel::Questionable | AuthenticityLevel::LikelyFraudulent => "red",
    }
}

const fn fraud_color(likelihood: FraudLikelihood) -> &'static str {
    match likelihood {
        FraudLikelihood::VeryLow | FraudLikelihood::Low => "green",
        FraudLikelihood::Medium => "yellow",
        FraudLikelihood::High | FraudLikelihood::VeryHigh => "red",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisBundle, AnalyzerOutcome};
    use crate::scoring::{Confidence, ScoreBreakdown, ScoringWeights};

    fn verdict() -> FinalVerdict {
        FinalVerdict {
            final_score: 58.4,
            fraud_likelihood: FraudLikelihood::Medium,
            authenticity_level: AuthenticityLevel::Uncertain,
            confidence: Confidence::Low,
            breakdown: ScoreBreakdown {
                ocr_quality: 30.0,
                layout_similarity: 60.0,
                seal_match: 60.0,
                signature_authenticity: 53.6,
            },
            weights_used: ScoringWeights::FIXED,
            error: None,
        }
    }

    #[test]
    fn test_plain_summary() {
        let report = DocumentReport::scored("scan.json", AnalysisBundle::default(), verdict());
        let text = SummaryReporter::new()
            .no_color()
            .generate(&[report], &ReportConfig::default())
            .unwrap();

        assert!(text.contains("Certificate: scan.json"));
        assert!(text.contains("58.40/100"));
        assert!(text.contains("Uncertain"));
        assert!(text.contains("Medium"));
        assert!(text.contains("(weight 40%)"));
        assert!(text.contains("Analyzer failures:"));
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn test_colored_summary() {
        let mut bundle = AnalysisBundle::default();
        for kind in AnalyzerKind::ALL {
            bundle.set(kind, AnalyzerOutcome::success(serde_json::Map::new()));
        }
        let report = DocumentReport::scored("scan.json", bundle, verdict());
        let text = SummaryReporter::new()
            .generate(&[report], &ReportConfig::default())
            .unwrap();
        assert!(text.contains("\x1b[33mUncertain\x1b[0m"));
        assert!(!text.contains("Analyzer failures:"));
    }

    #[test]
    fn test_load_failure_summary() {
        let text = SummaryReporter::new()
            .no_color()
            .generate(
                &[DocumentReport::failed("gone.json", "file not found")],
                &ReportConfig::default(),
            )
            .unwrap();
        assert!(text.contains("Error: file not found"));
    }
}
