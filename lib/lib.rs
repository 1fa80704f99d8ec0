//! Fast generation of random bit vectors for the Monte Carlo bit-flipping
//! step of a simulation.
//!
//! The randomness here is *not* cryptographically strong. Use it only to
//! speed up simulations; if an adversary can predict which bits are flipped,
//! any privacy property built on the flipping is compromised.

pub mod rng;
pub mod sampler;
pub mod ffi;

pub use sampler::{ SampleError, MAX_BITS, randbits, sample };
