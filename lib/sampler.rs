//! Sampling of random bit vectors via independent Bernoulli trials.
//!
//! The core operation is [`sample`], which takes the generator as an explicit
//! argument; [`randbits`] wraps it over the process-wide, time-seeded
//! generator and reproduces the lenient log-and-return-nothing contract of
//! the C original it replaces.

use rand::Rng;
use thiserror::Error;
use crate::rng::{ self, DRAW_MAX };

/// Hard cap on the number of sampled bits, tied to the `u64` result width.
pub const MAX_BITS: i32 = 64;

/// An out-of-range input to [`sample`].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum SampleError {
    /// Probability outside `[0.0, 1.0]` (or NaN).
    #[error("probability must be between 0.0 and 1.0, got {0}")]
    ProbabilityOutOfRange(f32),
    /// Bit count outside `[0, 64]`.
    #[error("bit count must be between 0 and 64, got {0}")]
    BitCountOutOfRange(i32),
}

/// Sample a `u64` whose `num_bits` low-order bits are each 1 with probability
/// `p`, independently; all higher bits are 0.
///
/// Consumes exactly `num_bits` draws from `rng`. The comparison threshold is
/// computed in single precision and truncated, so the realized per-bit
/// probability is `floor(p * DRAW_MAX) / DRAW_MAX` rather than exactly `p`;
/// this reproduces the rounding behavior of the C implementation this crate
/// replaces. `p = 0.0` and `p = 1.0` are exact.
pub fn sample<R>(p: f32, num_bits: i32, rng: &mut R) -> Result<u64, SampleError>
where R: Rng + ?Sized
{
    if !(0.0..=1.0).contains(&p) {
        return Err(SampleError::ProbabilityOutOfRange(p));
    }
    if !(0..=MAX_BITS).contains(&num_bits) {
        return Err(SampleError::BitCountOutOfRange(num_bits));
    }
    let threshold = (p * DRAW_MAX as f32) as u32;
    let mut result: u64 = 0;
    for i in 0..num_bits as u32 {
        let bit = u64::from(rng.gen_range(0..DRAW_MAX) < threshold);
        result |= bit << i;
    }
    Ok(result)
}

/// Sample `num_bits` Bernoulli(`p`) bits from the process-wide generator.
///
/// Compatibility surface: on out-of-range input this prints one diagnostic
/// line to stderr and returns `None` instead of surfacing the error. Valid
/// input never yields `None`. Prefer [`sample`] with a caller-owned generator
/// where a machine-checkable failure signal or determinism is needed.
pub fn randbits(p: f32, num_bits: i32) -> Option<u64> {
    match rng::with_global(|rng| sample(p, num_bits, rng)) {
        Ok(result) => Some(result),
        Err(err) => {
            eprintln!("randbits: {}", err);
            None
        },
    }
}
