//! Scoring stage: bundles in, document reports out.

use super::load::{document_name, load_bundle};
use crate::model::AnalysisBundle;
use crate::reports::DocumentReport;
use crate::scoring::{FinalVerdict, ScoringEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::path::PathBuf;

/// Score one bundle, seeding the signature draw when a seed is given.
pub fn score_bundle(engine: &ScoringEngine, bundle: &AnalysisBundle, seed: Option<u64>) -> FinalVerdict {
    let verdict = match seed {
        Some(seed) => engine.score_with_rng(bundle, &mut StdRng::seed_from_u64(seed)),
        None => engine.score(bundle),
    };
    tracing::debug!(
        final_score = verdict.final_score,
        level = %verdict.authenticity_level,
        "Scored bundle"
    );
    verdict
}

/// Load and score bundle files in parallel.
///
/// Reports keep the input order. With a seed, file `i` uses `seed + i` so
/// reruns are reproducible regardless of scheduling. Unreadable files yield
/// failed reports instead of aborting the batch.
#[must_use]
pub fn score_files(
    engine: &ScoringEngine,
    paths: &[PathBuf],
    seed: Option<u64>,
    quiet: bool,
) -> Vec<DocumentReport> {
    paths
        .par_iter()
        .enumerate()
        .map(|(i, path)| {
            let name = document_name(path);
            match load_bundle(path, quiet) {
                Ok(bundle) => {
                    let file_seed = seed.map(|s| s.wrapping_add(i as u64));
                    let verdict = score_bundle(engine, &bundle, file_seed);
                    DocumentReport::scored(name, bundle, verdict)
                }
                Err(e) => {
                    tracing::error!("{}", e);
                    DocumentReport::failed(name, e.detail())
                }
            }
        })
        .collect()
}
