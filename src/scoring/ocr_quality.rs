//! OCR quality score.
//!
//! Informational only: the score is reported in the breakdown but carries no
//! weight in the final score.

use super::normalize::numeric_metric;
use crate::error::ScoringErrorKind;
use crate::model::{AnalyzerKind, AnalyzerOutcome};
use serde_json::Value;

/// Fields whose presence in `extracted_data` each add a bonus
pub const SCORED_FIELDS: [&str; 3] = ["student_name", "degree", "institution"];

// Points are hundredths of the 0-1 score; integers keep the sum exact.
const FAILURE_POINTS: u32 = 30;
const BASE_POINTS: u32 = 50;
const LONG_TEXT_POINTS: u32 = 20;
const MEDIUM_TEXT_POINTS: u32 = 10;
const FIELD_POINTS: u32 = 10;
const MAX_POINTS: u32 = 100;

const LONG_TEXT_WORDS: f64 = 100.0;
const MEDIUM_TEXT_WORDS: f64 = 50.0;

/// OCR quality in `[0, 1]` for the OCR analyzer's outcome.
pub fn ocr_quality_score(outcome: &AnalyzerOutcome) -> Result<f64, ScoringErrorKind> {
    Ok(f64::from(ocr_quality_points(outcome)?) / 100.0)
}

fn ocr_quality_points(outcome: &AnalyzerOutcome) -> Result<u32, ScoringErrorKind> {
    if !outcome.is_success() {
        return Ok(FAILURE_POINTS);
    }

    let word_count = numeric_metric(outcome, AnalyzerKind::Ocr, "word_count")?.unwrap_or(0.0);
    let mut points = BASE_POINTS;

    if word_count > LONG_TEXT_WORDS {
        points += LONG_TEXT_POINTS;
    } else if word_count > MEDIUM_TEXT_WORDS {
        points += MEDIUM_TEXT_POINTS;
    }

    if let Some(Value::Object(fields)) = outcome.metric("extracted_data") {
        let present = SCORED_FIELDS
            .iter()
            .filter(|field| fields.contains_key(**field))
            .count() as u32;
        points += present * FIELD_POINTS;
    }

    Ok(points.min(MAX_POINTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ocr(value: serde_json::Value) -> AnalyzerOutcome {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_failed_ocr_scores_fixed_value() {
        let score = ocr_quality_score(&AnalyzerOutcome::failure("tesseract missing")).unwrap();
        assert_eq!(score, 0.30);
    }

    #[test]
    fn test_full_marks() {
        let outcome = ocr(json!({
            "success": true,
            "word_count": 150,
            "extracted_data": {
                "student_name": "Jane Doe",
                "degree": "Bachelor of Science",
                "institution": "University of Leeds"
            }
        }));
        assert_eq!(ocr_quality_score(&outcome).unwrap(), 1.0);
    }

    #[test]
    fn test_word_count_bands() {
        let short = ocr(json!({"success": true, "word_count": 50}));
        let medium = ocr(json!({"success": true, "word_count": 51}));
        let long = ocr(json!({"success": true, "word_count": 101}));
        let boundary = ocr(json!({"success": true, "word_count": 100}));

        assert_eq!(ocr_quality_score(&short).unwrap(), 0.50);
        assert_eq!(ocr_quality_score(&medium).unwrap(), 0.60);
        assert_eq!(ocr_quality_score(&boundary).unwrap(), 0.60);
        assert_eq!(ocr_quality_score(&long).unwrap(), 0.70);
    }

    #[test]
    fn test_dates_do_not_count_as_field() {
        let outcome = ocr(json!({
            "success": true,
            "word_count": 10,
            "extracted_data": {"degree": "Diploma in Nursing", "dates": ["12/05/2021"]}
        }));
        assert_eq!(ocr_quality_score(&outcome).unwrap(), 0.60);
    }

    #[test]
    fn test_missing_word_count_counts_as_zero() {
        let outcome = ocr(json!({"success": true, "text": ""}));
        assert_eq!(ocr_quality_score(&outcome).unwrap(), 0.50);
    }

    #[test]
    fn test_non_numeric_word_count_is_malformed() {
        let outcome = ocr(json!({"success": true, "word_count": "many"}));
        assert!(ocr_quality_score(&outcome).is_err());
    }
}
