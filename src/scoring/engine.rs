//! Scoring engine.
//!
//! Combines the four analyzer outcomes of a bundle into a [`FinalVerdict`]:
//! normalize seal and layout, derive the signature score, weight the three,
//! classify the result and rate confidence from the analyzer success flags.

use super::aggregate::{as_percentage, weighted_percentage};
use super::confidence::estimate_confidence;
use super::normalize::NormalizedInputs;
use super::ocr_quality::ocr_quality_score;
use super::signature::derive_signature_score;
use super::tables::ScoringTables;
use super::verdict::{AuthenticityLevel, Confidence, FinalVerdict, FraudLikelihood, ScoreBreakdown};
use crate::config::Validatable;
use crate::error::{CertError, ErrorContext, ScoringErrorKind};
use crate::model::{AnalysisBundle, AnalyzerKind};
use rand::Rng;

/// Scoring engine version, reported alongside verdicts
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Stateless scorer over validated [`ScoringTables`].
///
/// The engine holds no mutable state and can be shared between threads.
/// [`score`](Self::score) draws from the thread-local generator;
/// [`score_with_rng`](Self::score_with_rng) takes any generator.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    tables: ScoringTables,
}

impl ScoringEngine {
    /// Engine with the fixed production tables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom tables, rejected unless they validate.
    pub fn with_tables(tables: ScoringTables) -> crate::Result<Self> {
        let errors = tables.validate();
        if !errors.is_empty() {
            let joined = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CertError::scoring(
                "validating scoring tables",
                ScoringErrorKind::InvalidTables(joined),
            ));
        }
        Ok(Self { tables })
    }

    #[must_use]
    pub const fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    /// Score a bundle using the thread-local random generator.
    pub fn score(&self, bundle: &AnalysisBundle) -> FinalVerdict {
        self.score_with_rng(bundle, &mut rand::thread_rng())
    }

    /// Score a bundle; malformed input yields a degraded verdict.
    pub fn score_with_rng<R: Rng + ?Sized>(
        &self,
        bundle: &AnalysisBundle,
        rng: &mut R,
    ) -> FinalVerdict {
        let confidence = self.confidence(bundle);
        match self.aggregate(bundle, confidence, rng) {
            Ok(verdict) => verdict,
            Err(err) => {
                let message = err.display_chain();
                tracing::warn!(error = %message, "Scoring failed, returning degraded verdict");
                FinalVerdict::degraded(message, confidence, self.tables.weights)
            }
        }
    }

    /// Score a bundle, surfacing malformed input as an error.
    pub fn try_score_with_rng<R: Rng + ?Sized>(
        &self,
        bundle: &AnalysisBundle,
        rng: &mut R,
    ) -> crate::Result<FinalVerdict> {
        self.aggregate(bundle, self.confidence(bundle), rng)
    }

    fn confidence(&self, bundle: &AnalysisBundle) -> Confidence {
        estimate_confidence(&bundle.success_flags(), &self.tables.confidence)
    }

    fn aggregate<R: Rng + ?Sized>(
        &self,
        bundle: &AnalysisBundle,
        confidence: Confidence,
        rng: &mut R,
    ) -> crate::Result<FinalVerdict> {
        for (kind, message) in bundle.failures() {
            tracing::debug!(analyzer = %kind, message, "Analyzer failed, substituting defaults");
        }

        let ocr = ocr_quality_score(&bundle.ocr)
            .map_err(|e| CertError::scoring("scoring OCR quality", e))?;
        let inputs = NormalizedInputs::from_outcomes(&bundle.image, &bundle.layout)
            .map_err(|e| CertError::scoring("normalizing analyzer metrics", e))
            .with_context(|| {
                format!(
                    "reading {} and {} outcomes",
                    AnalyzerKind::Image,
                    AnalyzerKind::Layout
                )
            })?;

        let signature =
            derive_signature_score(inputs.seal, inputs.layout, &self.tables.signature, rng);
        let final_score =
            weighted_percentage(inputs.seal, inputs.layout, signature, &self.tables.weights);

        let verdict = FinalVerdict {
            final_score,
            fraud_likelihood: FraudLikelihood::from_score(final_score, &self.tables.fraud),
            authenticity_level: AuthenticityLevel::from_score(
                final_score,
                &self.tables.authenticity,
            ),
            confidence,
            breakdown: ScoreBreakdown {
                ocr_quality: as_percentage(ocr),
                layout_similarity: as_percentage(inputs.layout),
                seal_match: as_percentage(inputs.seal),
                signature_authenticity: as_percentage(signature),
            },
            weights_used: self.tables.weights,
            error: None,
        };

        tracing::debug!(
            final_score,
            fraud_likelihood = %verdict.fraud_likelihood,
            authenticity_level = %verdict.authenticity_level,
            confidence = %verdict.confidence,
            "Computed authenticity verdict"
        );

        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnalyzerOutcome;
    use crate::scoring::tables::{ScoreRange, ScoringWeights, SignaturePolicy};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn outcome(value: serde_json::Value) -> AnalyzerOutcome {
        serde_json::from_value(value).unwrap()
    }

    fn strong_bundle() -> AnalysisBundle {
        AnalysisBundle::new(
            outcome(json!({
                "success": true,
                "word_count": 150,
                "extracted_data": {"student_name": "A B", "degree": "C", "institution": "D"}
            })),
            outcome(json!({"success": true, "seal_match_percentage": 90.0})),
            outcome(json!({"success": true, "authenticity_score": 75.0})),
            outcome(json!({"success": true, "layout_similarity": 90.0})),
        )
    }

    #[test]
    fn test_strong_bundle_scores_high() {
        let engine = ScoringEngine::new();
        let verdict = engine.score_with_rng(&strong_bundle(), &mut StdRng::seed_from_u64(1));

        assert!(!verdict.is_degraded());
        assert!((90.0..=92.5).contains(&verdict.final_score), "{}", verdict.final_score);
        assert_eq!(verdict.fraud_likelihood, FraudLikelihood::VeryLow);
        assert_eq!(verdict.confidence, Confidence::High);
        assert_eq!(verdict.breakdown.ocr_quality, 100.0);
        assert_eq!(verdict.breakdown.seal_match, 90.0);
        assert_eq!(verdict.breakdown.layout_similarity, 90.0);
        assert!((90.0..=100.0).contains(&verdict.breakdown.signature_authenticity));
    }

    #[test]
    fn test_all_failures_fall_back_to_defaults() {
        let engine = ScoringEngine::new();
        let verdict = engine.score_with_rng(&AnalysisBundle::default(), &mut StdRng::seed_from_u64(2));

        assert!(!verdict.is_degraded());
        assert!((55.0..=62.5).contains(&verdict.final_score), "{}", verdict.final_score);
        assert_eq!(verdict.confidence, Confidence::Low);
        assert_eq!(verdict.breakdown.ocr_quality, 30.0);
        assert_eq!(verdict.breakdown.seal_match, 60.0);
        assert_eq!(verdict.breakdown.layout_similarity, 60.0);
    }

    #[test]
    fn test_malformed_metric_degrades() {
        let mut bundle = strong_bundle();
        bundle.image = outcome(json!({"success": true, "seal_match_percentage": "ninety"}));

        let engine = ScoringEngine::new();
        let verdict = engine.score_with_rng(&bundle, &mut StdRng::seed_from_u64(3));

        assert!(verdict.is_degraded());
        assert_eq!(verdict.final_score, 0.0);
        assert_eq!(verdict.fraud_likelihood, FraudLikelihood::High);
        assert_eq!(verdict.authenticity_level, AuthenticityLevel::Unknown);
        assert_eq!(verdict.confidence, Confidence::High);
        let message = verdict.error.unwrap();
        assert!(message.contains("seal_match_percentage"), "{message}");

        assert!(engine
            .try_score_with_rng(&bundle, &mut StdRng::seed_from_u64(3))
            .is_err());
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let engine = ScoringEngine::new();
        let a = engine.score_with_rng(&strong_bundle(), &mut StdRng::seed_from_u64(42));
        let b = engine.score_with_rng(&strong_bundle(), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_tables_are_used() {
        let pinned = SignaturePolicy {
            threshold: 0.80,
            high_integrity: ScoreRange::new(1.0, 1.0),
            low_integrity: ScoreRange::new(0.5, 0.5),
        };
        let tables = ScoringTables::default().with_signature_policy(pinned);
        let engine = ScoringEngine::with_tables(tables).unwrap();

        let verdict = engine.score(&AnalysisBundle::default());
        // 0.6*0.40 + 0.6*0.35 + 0.5*0.25 = 0.575
        assert!((verdict.final_score - 57.5).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_tables_rejected() {
        let tables = ScoringTables::default().with_weights(ScoringWeights {
            logo_match: 0.5,
            layout_similarity: 0.5,
            signature_authenticity: 0.5,
        });
        let err = ScoringEngine::with_tables(tables).unwrap_err();
        assert!(matches!(
            err,
            CertError::Scoring {
                source: ScoringErrorKind::InvalidTables(_),
                ..
            }
        ));
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringEngine>();
    }
}
