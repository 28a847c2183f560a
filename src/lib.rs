//! **Heuristic authenticity scoring for scanned academic certificates.**
//!
//! `cert-authenticity` combines the results of independent document analyzers
//! (text extraction, seal matching, layout comparison, signature inspection)
//! into a single, explainable verdict: a 0–100 authenticity score, a fraud
//! likelihood bucket, an authenticity level and a confidence estimate.
//!
//! It powers both a command-line interface for scoring analyzer output and a
//! Rust library for embedding the scoring engine in your own services.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The input model. An [`AnalysisBundle`] holds one
//!   [`AnalyzerOutcome`] per analyzer; each outcome is either a bag of metrics
//!   or a failure message.
//! - **[`scoring`]**: The [`ScoringEngine`], which normalizes the metrics,
//!   derives a signature score, aggregates the weighted score and classifies
//!   it into a [`FinalVerdict`].
//! - **[`analyzers`]**: Built-in heuristics over an already-rasterized page
//!   and its text, producing outcomes the engine understands.
//! - **[`pipeline`]**: Load, analyze, score and report stages shared by the
//!   CLI commands.
//! - **[`reports`]**: JSON response envelopes and terminal summaries.
//! - **[`config`]**: YAML configuration, validation and discovery.
//!
//! ## Getting Started: Scoring a Bundle
//!
//! ```
//! use cert_authenticity::{AnalysisBundle, Confidence, ScoringEngine};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let bundle = AnalysisBundle::from_json_str(r#"{
//!     "ocr": {"success": true, "word_count": 120,
//!             "extracted_data": {"student_name": "Ada Lovelace", "degree": "BSc"}},
//!     "image": {"success": true, "seal_match_percentage": 85.0},
//!     "signature": {"success": true},
//!     "layout": {"success": true, "layout_similarity": 82.5}
//! }"#)?;
//!
//! let engine = ScoringEngine::new();
//! let verdict = engine.score_with_rng(&bundle, &mut StdRng::seed_from_u64(42));
//!
//! assert!(verdict.final_score > 85.0);
//! assert_eq!(verdict.confidence, Confidence::High);
//! # Ok::<(), cert_authenticity::CertError>(())
//! ```
//!
//! Failed analyzers never abort scoring: their metrics fall back to neutral
//! defaults and the confidence drops accordingly. Only malformed metrics
//! produce a degraded verdict (score 0, level `Unknown`) carrying an error
//! message.
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the library crate. The `cert-authenticity`
//! binary exposes `score` for bundle files and `inspect` for rasterized pages.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Pixel counts and word counts are converted to f64 for scoring
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use error::{CertError, ErrorContext, Result};
pub use model::{AnalysisBundle, AnalyzerKind, AnalyzerOutcome};
pub use reports::{DocumentReport, ReportFormat, ReportGenerator};
pub use scoring::{
    AuthenticityLevel, Confidence, FinalVerdict, FraudLikelihood, ScoringEngine, ScoringTables,
};
