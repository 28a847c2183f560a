//! Extraction of percentage metrics from analyzer outcomes.

use crate::error::ScoringErrorKind;
use crate::model::{AnalyzerKind, AnalyzerOutcome};
use serde_json::Value;

/// Seal match used when the image analyzer failed or omitted it
pub const DEFAULT_SEAL_MATCH: f64 = 60.0;
/// Layout similarity used when the layout analyzer failed or omitted it
pub const DEFAULT_LAYOUT_SIMILARITY: f64 = 60.0;

pub const SEAL_MATCH_METRIC: &str = "seal_match_percentage";
pub const LAYOUT_SIMILARITY_METRIC: &str = "layout_similarity";

/// Seal and layout inputs for the aggregator, as fractions of 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInputs {
    pub seal: f64,
    pub layout: f64,
}

impl NormalizedInputs {
    /// Read seal match from the image outcome and layout similarity from the
    /// layout outcome.
    pub fn from_outcomes(
        image: &AnalyzerOutcome,
        layout: &AnalyzerOutcome,
    ) -> Result<Self, ScoringErrorKind> {
        let seal = percentage_metric(
            image,
            AnalyzerKind::Image,
            SEAL_MATCH_METRIC,
            DEFAULT_SEAL_MATCH,
        )?;
        let layout = percentage_metric(
            layout,
            AnalyzerKind::Layout,
            LAYOUT_SIMILARITY_METRIC,
            DEFAULT_LAYOUT_SIMILARITY,
        )?;
        Ok(Self {
            seal: seal / 100.0,
            layout: layout / 100.0,
        })
    }
}

/// A percentage metric clamped to `[0, 100]`.
///
/// Failed outcomes and absent metrics yield `default`. A metric that is
/// present but not a number is malformed input.
pub fn percentage_metric(
    outcome: &AnalyzerOutcome,
    analyzer: AnalyzerKind,
    key: &str,
    default: f64,
) -> Result<f64, ScoringErrorKind> {
    match numeric_metric(outcome, analyzer, key)? {
        Some(value) => Ok(value.clamp(0.0, 100.0)),
        None => Ok(default),
    }
}

/// A numeric metric, `None` when the outcome failed or the key is absent.
pub fn numeric_metric(
    outcome: &AnalyzerOutcome,
    analyzer: AnalyzerKind,
    key: &str,
) -> Result<Option<f64>, ScoringErrorKind> {
    let Some(value) = outcome.metric(key) else {
        return Ok(None);
    };
    match value {
        Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| non_numeric(analyzer, key, value)),
        other => Err(non_numeric(analyzer, key, other)),
    }
}

fn non_numeric(analyzer: AnalyzerKind, key: &str, found: &Value) -> ScoringErrorKind {
    ScoringErrorKind::NonNumericMetric {
        analyzer: analyzer.name().to_string(),
        metric: key.to_string(),
        found: found.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outcome(value: serde_json::Value) -> AnalyzerOutcome {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_reads_and_scales_percentages() {
        let image = outcome(json!({"success": true, "seal_match_percentage": 85.0}));
        let layout = outcome(json!({"success": true, "layout_similarity": 72.5}));
        let inputs = NormalizedInputs::from_outcomes(&image, &layout).unwrap();
        assert!((inputs.seal - 0.85).abs() < 1e-12);
        assert!((inputs.layout - 0.725).abs() < 1e-12);
    }

    #[test]
    fn test_failures_use_defaults() {
        let inputs = NormalizedInputs::from_outcomes(
            &AnalyzerOutcome::failure("render failed"),
            &AnalyzerOutcome::missing(),
        )
        .unwrap();
        assert!((inputs.seal - 0.60).abs() < 1e-12);
        assert!((inputs.layout - 0.60).abs() < 1e-12);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let image = outcome(json!({"success": true, "image_quality": 85.0}));
        let seal = percentage_metric(&image, AnalyzerKind::Image, SEAL_MATCH_METRIC, 60.0).unwrap();
        assert_eq!(seal, 60.0);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let high = outcome(json!({"success": true, "layout_similarity": 140}));
        let low = outcome(json!({"success": true, "layout_similarity": -3}));
        let key = LAYOUT_SIMILARITY_METRIC;
        assert_eq!(percentage_metric(&high, AnalyzerKind::Layout, key, 60.0).unwrap(), 100.0);
        assert_eq!(percentage_metric(&low, AnalyzerKind::Layout, key, 60.0).unwrap(), 0.0);
    }

    #[test]
    fn test_non_numeric_metric_is_rejected() {
        let image = outcome(json!({"success": true, "seal_match_percentage": "85"}));
        let err = percentage_metric(&image, AnalyzerKind::Image, SEAL_MATCH_METRIC, 60.0)
            .unwrap_err();
        assert!(matches!(
            err,
            ScoringErrorKind::NonNumericMetric { ref metric, .. } if metric == SEAL_MATCH_METRIC
        ));
    }
}
