//! Process-wide entropy state backing the default sampling surface.
//!
//! A single [`StdRng`] is seeded once from wall-clock time on first use and
//! then only ever advanced, never reseeded. Callers wanting deterministic
//! sequences should bypass this module and pass their own seeded generator to
//! [`crate::sampler::sample`].

use std::{
    sync::{ Mutex, PoisonError },
    time::{ SystemTime, UNIX_EPOCH },
};
use once_cell::sync::Lazy;
use rand::{ rngs::StdRng, SeedableRng };

/// Exclusive upper bound on a single uniform draw.
///
/// Matches the `RAND_MAX` of common libc implementations. Each draw is
/// uniform over `[0, DRAW_MAX)`, so a threshold of `floor(p * DRAW_MAX)`
/// realizes a per-bit probability of exactly `floor(p * DRAW_MAX) / DRAW_MAX`.
pub const DRAW_MAX: u32 = i32::MAX as u32;

static GLOBAL: Lazy<Mutex<StdRng>>
    = Lazy::new(|| Mutex::new(StdRng::seed_from_u64(wall_clock_seed())));

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Run `f` with exclusive access to the process-wide generator, seeding it
/// first if this is the first use.
pub fn with_global<T, F>(f: F) -> T
where F: FnOnce(&mut StdRng) -> T
{
    // the guarded state is a PRNG; a panic elsewhere cannot leave it in a
    // logically inconsistent state, so poisoning is absorbed
    let mut rng = GLOBAL.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut rng)
}

/// Eagerly seed the process-wide generator. Idempotent; without this the
/// generator is seeded lazily on the first draw instead.
pub fn init() { Lazy::force(&GLOBAL); }
