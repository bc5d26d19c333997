//! Categorical value generators.

use crate::record::Flag;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Pick one candidate uniformly at random.
///
/// Candidates must be non-empty, which a validated `Catalog` guarantees.
/// Release builds fall back to an empty string.
pub fn pick<R: Rng>(rng: &mut R, candidates: &[String]) -> String {
    debug_assert!(!candidates.is_empty(), "no candidates to pick from");
    candidates.choose(rng).cloned().unwrap_or_default()
}

/// Pick one candidate if a fair coin flip succeeds, otherwise an empty
/// string ("not applicable to this product").
pub fn pick_optional<R: Rng>(rng: &mut R, candidates: &[String]) -> String {
    if rng.random_bool(0.5) {
        pick(rng, candidates)
    } else {
        String::new()
    }
}

/// Fair `TRUE` / `FALSE` flag.
pub fn flag<R: Rng>(rng: &mut R) -> Flag {
    Flag(rng.random_bool(0.5))
}
