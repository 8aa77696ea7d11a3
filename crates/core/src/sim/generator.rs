//! Random reference strings.
//!
//! Pages are drawn uniformly from `[0, 2 * frames)`, so roughly half the
//! distinct pages fit in memory at once and every policy sees both hits and
//! evictions.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::PageNumber;
use crate::config::{GeneratorConfig, MAX_GENERATED_LENGTH};

/// Number of distinct pages the generator draws from for `frames` frames.
pub fn page_span(frames: usize) -> u32 {
    u32::try_from(frames.max(1).saturating_mul(2)).unwrap_or(u32::MAX)
}

/// Generates a random reference string.
///
/// # Arguments
///
/// * `length` - Requested length, clamped to `[1, MAX_GENERATED_LENGTH]`.
/// * `frames` - Frame count the string is meant for.
/// * `seed` - RNG seed; `None` seeds from entropy.
pub fn generate_reference(length: usize, frames: usize, seed: Option<u64>) -> Vec<PageNumber> {
    let length = length.clamp(1, MAX_GENERATED_LENGTH);
    let span = page_span(frames);
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    (0..length)
        .map(|_| PageNumber(rng.gen_range(0..span)))
        .collect()
}

/// Generates a reference string from configuration.
pub fn from_config(config: &GeneratorConfig, frames: usize) -> Vec<PageNumber> {
    generate_reference(config.length, frames, config.seed)
}
