//! Derived signature authenticity score.
//!
//! There is no ground truth for the signature, so the score is drawn from an
//! interval chosen by seal and layout integrity. The draw is the only
//! non-deterministic step of scoring; callers pass the generator in so tests
//! can seed it.

use super::tables::SignaturePolicy;
use rand::Rng;

/// Draw a signature score in `[0, 1]` for the given seal and layout fractions.
pub fn derive_signature_score<R: Rng + ?Sized>(
    seal: f64,
    layout: f64,
    policy: &SignaturePolicy,
    rng: &mut R,
) -> f64 {
    let range = policy.range_for(seal, layout);
    let score = rng.gen_range(range.low..=range.high);
    tracing::debug!(
        seal,
        layout,
        high_integrity = policy.is_high_integrity(seal, layout),
        score,
        "Derived signature score"
    );
    score
}
