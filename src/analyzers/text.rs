//! Certificate text selection and field parsing.
//!
//! Text is supplied by the caller: the text layer embedded in the document
//! and the output of an OCR engine. The longer candidate wins.

use super::AnalyzerReport;
use crate::model::AnalyzerOutcome;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

static NAME_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)(?:Name|Student Name|Candidate)[:\s]+([A-Z][a-z]+(?:\s[A-Z][a-z]+)+)")
            .expect("static regex"),
        Regex::new(r"(?i)This is to certify that\s+([A-Z][a-z]+(?:\s[A-Z][a-z]+)+)")
            .expect("static regex"),
    ]
});

static DEGREE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(
            r"(?i)(?:Degree|Course|Program)[:\s]+[A-Za-z\s]+(?:Science|Arts|Engineering|Business|Technology)",
        )
        .expect("static regex"),
        Regex::new(r"(?i)(?:Bachelor|Master|Diploma|Certificate)\s+(?:of|in)\s+[A-Za-z\s]+")
            .expect("static regex"),
    ]
});

static INSTITUTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:University|Institute|College)\s+(?:of\s+)?[A-Za-z\s]+")
        .expect("static regex")
});

static DATE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b").expect("static regex"),
        Regex::new(&format!(r"(?i)\b(?:{MONTHS})\s+\d{{1,2}},?\s+\d{{4}}\b"))
            .expect("static regex"),
    ]
});

/// Where the selected text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    /// Text layer embedded in the document
    Embedded,
    /// Optical character recognition
    Ocr,
}

/// Certificate fields found in the text. Absent fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dates: Vec<String>,
}

impl ExtractedFields {
    /// Parse fields out of free text
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let student_name = NAME_PATTERNS
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string());
        let degree = DEGREE_PATTERNS
            .iter()
            .find_map(|re| re.find(text))
            .map(|m| m.as_str().trim().to_string());
        let institution = INSTITUTION_PATTERN
            .find(text)
            .map(|m| m.as_str().trim().to_string());
        let dates = DATE_PATTERNS
            .iter()
            .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
            .collect();

        Self {
            student_name,
            degree,
            institution,
            dates,
        }
    }

    /// Number of populated fields
    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.student_name.is_some(),
            self.degree.is_some(),
            self.institution.is_some(),
            !self.dates.is_empty(),
        ]
        .iter()
        .filter(|&&present| present)
        .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Text analyzer output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReport {
    pub text: String,
    pub extracted_data: ExtractedFields,
    pub word_count: usize,
    pub method: TextSource,
}

impl AnalyzerReport for TextReport {}

/// Pick the longer of the two candidates and parse it.
///
/// Returns `None` when neither candidate has any non-whitespace text.
/// Equal lengths prefer the OCR text.
#[must_use]
pub fn extract_text(embedded: Option<&str>, ocr: Option<&str>) -> Option<TextReport> {
    let embedded = embedded.map(str::trim).unwrap_or_default();
    let ocr = ocr.map(str::trim).unwrap_or_default();

    let (text, method) = if embedded.chars().count() > ocr.chars().count() {
        (embedded, TextSource::Embedded)
    } else {
        (ocr, TextSource::Ocr)
    };
    if text.is_empty() {
        return None;
    }

    let extracted_data = ExtractedFields::parse(text);
    tracing::debug!(
        method = ?method,
        chars = text.chars().count(),
        fields = extracted_data.len(),
        "Selected certificate text"
    );

    Some(TextReport {
        text: text.to_string(),
        word_count: text.split_whitespace().count(),
        extracted_data,
        method,
    })
}

/// Text analyzer outcome; a failure when there is no text at all.
#[must_use]
pub fn analyze_text(embedded: Option<&str>, ocr: Option<&str>) -> AnalyzerOutcome {
    extract_text(embedded, ocr).map_or_else(
        || AnalyzerOutcome::failure("no text could be extracted"),
        |report| report.to_outcome(),
    )
}
