//! Loading analysis bundles and certificate text from disk.

use super::PipelineError;
use crate::error::{CertError, ErrorContext};
use crate::model::AnalysisBundle;
use std::path::Path;

/// Read and parse a pre-computed analysis bundle.
pub fn load_bundle(path: &Path, quiet: bool) -> Result<AnalysisBundle, PipelineError> {
    if !quiet {
        tracing::info!("Loading analysis bundle: {}", path.display());
    }

    let bundle = std::fs::read_to_string(path)
        .map_err(|e| CertError::io(path, e))
        .and_then(|raw| AnalysisBundle::from_json_str(&raw))
        .with_context(|| format!("loading {}", path.display()))
        .map_err(|source| PipelineError::LoadFailed {
            path: path.display().to_string(),
            source,
        })?;

    let failed = bundle.failures().count();
    if failed > 0 {
        tracing::warn!(
            "{} of 4 analyzers failed in {}",
            failed,
            path.display()
        );
    }
    Ok(bundle)
}

/// Read an optional UTF-8 text file; `None` when no path is given.
pub fn load_optional_text(path: Option<&Path>) -> Result<Option<String>, PipelineError> {
    path.map(|p| {
        std::fs::read_to_string(p).map_err(|e| PipelineError::LoadFailed {
            path: p.display().to_string(),
            source: CertError::io(p, e),
        })
    })
    .transpose()
}

/// Display name for a document path
#[must_use]
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
