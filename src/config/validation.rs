//! Configuration validation for cert-authenticity.
//!
//! Provides the validation trait and implementations for the file
//! configuration and for scoring tables.

use super::types::{AnalysisConfig, AppConfig, BehaviorConfig, OutputConfig};
use crate::scoring::{ScoreRange, ScoringTables};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors.extend(self.analysis.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score {
            if !(0.0..=100.0).contains(&min_score) {
                errors.push(ConfigError::new(
                    "behavior.min_score",
                    format!("Minimum score must be between 0 and 100, got {min_score}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // Every seed and preview length is usable
        Vec::new()
    }
}

impl Validatable for ScoringTables {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let weights = self.weights.as_array();
        if weights.iter().any(|w| !(0.0..=1.0).contains(w)) {
            errors.push(ConfigError::new(
                "weights",
                format!("Each weight must be between 0.0 and 1.0, got {weights:?}"),
            ));
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-9 {
            errors.push(ConfigError::new(
                "weights",
                format!("Weights must sum to 1.0, got {sum}"),
            ));
        }

        if !(0.0..=1.0).contains(&self.signature.threshold) {
            errors.push(ConfigError::new(
                "signature.threshold",
                format!(
                    "Threshold must be between 0.0 and 1.0, got {}",
                    self.signature.threshold
                ),
            ));
        }
        validate_range(
            "signature.high_integrity",
            &self.signature.high_integrity,
            &mut errors,
        );
        validate_range(
            "signature.low_integrity",
            &self.signature.low_integrity,
            &mut errors,
        );

        validate_descending("fraud", &self.fraud.as_array(), &mut errors);
        validate_descending("authenticity", &self.authenticity.as_array(), &mut errors);

        let confidence = &self.confidence;
        if !(0.0..=1.0).contains(&confidence.high)
            || !(0.0..=1.0).contains(&confidence.medium)
            || confidence.medium > confidence.high
        {
            errors.push(ConfigError::new(
                "confidence",
                format!(
                    "Confidence rates must satisfy 0 <= medium <= high <= 1, got medium={} high={}",
                    confidence.medium, confidence.high
                ),
            ));
        }

        errors
    }
}

fn validate_range(field: &str, range: &ScoreRange, errors: &mut Vec<ConfigError>) {
    let in_unit = (0.0..=1.0).contains(&range.low) && (0.0..=1.0).contains(&range.high);
    if !in_unit || range.low > range.high {
        errors.push(ConfigError::new(
            field,
            format!(
                "Range must satisfy 0 <= low <= high <= 1, got [{}, {}]",
                range.low, range.high
            ),
        ));
    }
}

fn validate_descending(field: &str, bounds: &[f64], errors: &mut Vec<ConfigError>) {
    if bounds.iter().any(|b| !(0.0..=100.0).contains(b)) {
        errors.push(ConfigError::new(
            field,
            format!("Thresholds must be between 0 and 100, got {bounds:?}"),
        ));
    }
    if !bounds.windows(2).all(|w| w[0] > w[1]) {
        errors.push(ConfigError::new(
            field,
            format!("Thresholds must be strictly descending, got {bounds:?}"),
        ));
    }
}

// ============================================================================
// Tests
// ============================================================================
