#![no_main]
use cert_authenticity::{AnalysisBundle, ScoringEngine};
use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Fuzz bundle parsing and scoring.
///
/// Any bundle that parses must score without panicking, and the verdict
/// must stay within 0-100.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(bundle) = AnalysisBundle::from_json_str(s) {
            let verdict =
                ScoringEngine::new().score_with_rng(&bundle, &mut StdRng::seed_from_u64(0));
            assert!((0.0..=100.0).contains(&verdict.final_score));
        }
    }
});
