//! Inspect command handler.
//!
//! Implements the `inspect` subcommand: run the built-in analyzers over a
//! rasterized certificate page and score the result.

use super::ensure_valid;
use crate::config::AppConfig;
use crate::pipeline::{
    analyze_page, document_name, exit_code_for, load_optional_text, output_reports, score_bundle,
    PageInput,
};
use crate::reports::DocumentReport;
use crate::scoring::ScoringEngine;
use anyhow::Result;
use std::path::PathBuf;

/// Inputs for one page inspection
#[derive(Debug, Clone, Default)]
pub struct InspectArgs {
    /// Rasterized page (PNG or JPEG)
    pub image: PathBuf,
    /// File holding the text layer embedded in the document
    pub text: Option<PathBuf>,
    /// File holding OCR output for the page
    pub ocr_text: Option<PathBuf>,
}

/// Run the inspect command, returning the desired exit code.
pub fn run_inspect(config: &AppConfig, args: &InspectArgs) -> Result<i32> {
    ensure_valid(config)?;

    let input = PageInput {
        image: args.image.clone(),
        embedded_text: load_optional_text(args.text.as_deref())?,
        ocr_text: load_optional_text(args.ocr_text.as_deref())?,
    };

    if !config.behavior.quiet {
        tracing::info!("Inspecting {}", args.image.display());
    }
    let bundle = analyze_page(&input, config.analysis.run_parallel);
    let verdict = score_bundle(&ScoringEngine::new(), &bundle, config.analysis.seed);
    let report = DocumentReport::scored(document_name(&args.image), bundle, verdict);

    let reports = [report];
    output_reports(config, &reports)?;
    Ok(exit_code_for(&reports, config.behavior.min_score))
}
