//! Unified error types for cert-authenticity.
//!
//! Analyzer failures and missing metrics are not errors here: they are
//! modelled as [`AnalyzerOutcome::Failure`](crate::model::AnalyzerOutcome)
//! values and default substitutions. The types below cover the cases that
//! genuinely cannot be scored or loaded.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cert-authenticity operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CertError {
    /// Errors while combining analyzer results into a verdict
    #[error("Scoring failed: {context}")]
    Scoring {
        context: String,
        #[source]
        source: ScoringErrorKind,
    },

    /// Errors while reading analyzer input (bundles, rasters, text)
    #[error("Invalid input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific scoring error kinds
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScoringErrorKind {
    #[error("Metric '{metric}' of the {analyzer} analyzer is not numeric: {found}")]
    NonNumericMetric {
        analyzer: String,
        metric: String,
        found: String,
    },

    #[error("Scoring tables rejected: {0}")]
    InvalidTables(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Raster could not be decoded: {0}")]
    RasterDecode(String),

    #[error("Raster has no pixels")]
    EmptyRaster,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for cert-authenticity operations
pub type Result<T> = std::result::Result<T, CertError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CertError {
    /// Create a scoring error with context
    pub fn scoring(context: impl Into<String>, source: ScoringErrorKind) -> Self {
        Self::Scoring {
            context: context.into(),
            source,
        }
    }

    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// This error and all of its sources, joined with ": ".
    #[must_use]
    pub fn display_chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CertError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<image::ImageError> for CertError {
    fn from(err: image::ImageError) -> Self {
        Self::input("raster decoding", InputErrorKind::RasterDecode(err.to_string()))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain outermost-first, e.g.
/// `"loading bundle: JSON deserialization"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<CertError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: CertError, new_ctx: &str) -> CertError {
    match err {
        CertError::Scoring {
            context: existing,
            source,
        } => CertError::Scoring {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CertError::Input {
            context: existing,
            source,
        } => CertError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        CertError::Io {
            path,
            message,
            source,
        } => CertError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CertError::scoring(
            "normalizing image outcome",
            ScoringErrorKind::NonNumericMetric {
                analyzer: "image".to_string(),
                metric: "seal_match_percentage".to_string(),
                found: "\"high\"".to_string(),
            },
        );
        assert!(err.to_string().contains("Scoring failed"));
        assert!(err.to_string().contains("normalizing image outcome"));

        let err = CertError::input("bundle.json", InputErrorKind::EmptyRaster);
        assert!(err.to_string().contains("bundle.json"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CertError::io("/tmp/page.png", io_err);
        assert!(err.to_string().contains("/tmp/page.png"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(CertError::input(
                "base",
                InputErrorKind::RasterDecode("unsupported format".to_string()),
            ))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(CertError::Input { context, source }) => {
                assert_eq!(context, "outer layer: middle layer: base");
                assert!(source.to_string().contains("unsupported format"));
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(CertError::input("scan.png", InputErrorKind::EmptyRaster));
        let err = err_result.with_context(|| {
            called = true;
            "inspecting page"
        });
        assert!(called);
        assert!(
            matches!(err, Err(CertError::Input { context, .. }) if context == "inspecting page: scan.png")
        );
    }

    #[test]
    fn test_serde_json_error_converts_to_input() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: CertError = parsed.unwrap_err().into();
        assert!(matches!(
            err,
            CertError::Input {
                source: InputErrorKind::InvalidJson(_),
                ..
            }
        ));
    }

    #[test]
    fn test_display_chain_includes_source() {
        let err = CertError::input("page.png", InputErrorKind::EmptyRaster);
        assert_eq!(err.display_chain(), "Invalid input: page.png: Raster has no pixels");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
