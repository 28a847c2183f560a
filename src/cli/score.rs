//! Score command handler.
//!
//! Implements the `score` subcommand for pre-computed analysis bundles.

use super::ensure_valid;
use crate::config::AppConfig;
use crate::pipeline::{exit_code_for, output_reports, score_files};
use crate::scoring::ScoringEngine;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: &AppConfig, bundles: &[PathBuf]) -> Result<i32> {
    ensure_valid(config)?;
    if bundles.is_empty() {
        bail!("no analysis bundles given");
    }

    let engine = ScoringEngine::new();
    if !config.behavior.quiet {
        tracing::info!("Scoring {} document(s)", bundles.len());
    }
    let reports = score_files(&engine, bundles, config.analysis.seed, config.behavior.quiet);

    output_reports(config, &reports)?;
    Ok(exit_code_for(&reports, config.behavior.min_score))
}
