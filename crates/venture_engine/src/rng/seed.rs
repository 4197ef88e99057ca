//! Deterministic substream seeding.
//!
//! Every trial draws from its own generator whose seed is derived from the
//! engine's base seed, a stream identifier and the trial index:
//!
//! ```text
//! stream_seed = splitmix64(base_seed ^ splitmix64(stream_id))
//! trial_seed  = splitmix64(stream_seed + trial_index)
//! ```
//!
//! The derivation depends on nothing but those three integers, so trials can
//! run in any order or on any thread and still see the same draws.

/// Golden-ratio increment of the SplitMix64 generator.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finaliser (Steele, Lea & Flood, 2014).
///
/// A bijection on `u64` with strong avalanche behaviour; adjacent inputs map
/// to statistically unrelated outputs.
#[inline]
pub fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Seed of a whole stream (one `simulate` call).
#[inline]
pub fn stream_seed(base_seed: u64, stream_id: u64) -> u64 {
    splitmix64(base_seed ^ splitmix64(stream_id))
}

/// Seed of one trial within a stream.
#[inline]
pub fn trial_seed(stream_seed: u64, trial_index: u64) -> u64 {
    splitmix64(stream_seed.wrapping_add(trial_index))
}
