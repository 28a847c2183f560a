//! Input model for authenticity scoring.
//!
//! Each document is described by an [`AnalysisBundle`]: one
//! [`AnalyzerOutcome`] per [`AnalyzerKind`]. Outcomes are either a bag of
//! loosely-typed metrics reported by the analyzer, or a failure message.
//!
//! ```
//! use cert_authenticity::model::AnalysisBundle;
//!
//! let bundle = AnalysisBundle::from_json_str(r#"{
//!     "image": {"success": true, "seal_match_percentage": 85.0},
//!     "layout": {"success": false, "error": "render failed"}
//! }"#).unwrap();
//!
//! assert_eq!(bundle.success_flags(), [false, true, false, false]);
//! ```

mod outcome;

pub use outcome::*;
