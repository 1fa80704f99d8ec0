//! C-callable surface for host processes loading this crate as a shared
//! library.
//!
//! Mirrors the library API: `fastbits_init` eagerly seeds the process-wide
//! generator and `fastbits_randbits` samples from it, reporting the two
//! invalid-input conditions through an integer status code instead of a
//! sentinel value.

use std::os::raw::{ c_float, c_int };
use crate::{
    rng,
    sampler::{ self, SampleError },
};

/// Status code returned by [`fastbits_randbits`].
#[repr(i32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 0,
    ProbabilityOutOfRange = 1,
    BitCountOutOfRange = 2,
    NullOut = 3,
}

impl StatusCode {
    #[inline]
    pub const fn code(self) -> i32 { self as i32 }
}

impl From<SampleError> for StatusCode {
    fn from(err: SampleError) -> Self {
        match err {
            SampleError::ProbabilityOutOfRange(_) => Self::ProbabilityOutOfRange,
            SampleError::BitCountOutOfRange(_) => Self::BitCountOutOfRange,
        }
    }
}

pub const FASTBITS_OK: i32 = StatusCode::Ok.code();
pub const FASTBITS_ERR_PROBABILITY: i32 = StatusCode::ProbabilityOutOfRange.code();
pub const FASTBITS_ERR_BIT_COUNT: i32 = StatusCode::BitCountOutOfRange.code();
pub const FASTBITS_ERR_NULL_OUT: i32 = StatusCode::NullOut.code();

/// Eagerly seed the process-wide generator from wall-clock time.
///
/// Optional and idempotent; without it the generator is seeded on the first
/// sampling call instead.
#[no_mangle]
pub extern "C" fn fastbits_init() { rng::init(); }

/// Sample `num_bits` bits, each 1 with probability `p`, into `*out`.
///
/// Returns [`FASTBITS_OK`] and writes the result through `out` on success.
/// On invalid input, returns [`FASTBITS_ERR_PROBABILITY`] or
/// [`FASTBITS_ERR_BIT_COUNT`] and leaves `*out` untouched.
///
/// # Safety
///
/// `out` must be null or a pointer valid for writing a `u64`.
#[no_mangle]
pub unsafe extern "C" fn fastbits_randbits(
    p: c_float,
    num_bits: c_int,
    out: *mut u64,
) -> c_int {
    if out.is_null() { return FASTBITS_ERR_NULL_OUT; }
    match rng::with_global(|rng| sampler::sample(p, num_bits, rng)) {
        Ok(result) => {
            out.write(result);
            FASTBITS_OK
        },
        Err(err) => StatusCode::from(err).code(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_call_writes_result() {
        let mut out: u64 = u64::MAX;
        let code = unsafe { fastbits_randbits(0.0, 64, &mut out) };
        assert_eq!(code, FASTBITS_OK);
        assert_eq!(out, 0);

        let code = unsafe { fastbits_randbits(1.0, 8, &mut out) };
        assert_eq!(code, FASTBITS_OK);
        assert_eq!(out, 0xff);
    }

    #[test]
    fn invalid_input_reports_code_and_leaves_out_alone() {
        let mut out: u64 = 0xdead;
        let code = unsafe { fastbits_randbits(1.5, 10, &mut out) };
        assert_eq!(code, FASTBITS_ERR_PROBABILITY);
        assert_eq!(out, 0xdead);

        let code = unsafe { fastbits_randbits(0.5, 65, &mut out) };
        assert_eq!(code, FASTBITS_ERR_BIT_COUNT);
        assert_eq!(out, 0xdead);

        let code = unsafe { fastbits_randbits(0.5, -1, &mut out) };
        assert_eq!(code, FASTBITS_ERR_BIT_COUNT);
        assert_eq!(out, 0xdead);
    }

    #[test]
    fn null_out_is_rejected() {
        let code = unsafe { fastbits_randbits(0.5, 10, std::ptr::null_mut()) };
        assert_eq!(code, FASTBITS_ERR_NULL_OUT);
    }

    #[test]
    fn init_is_idempotent() {
        fastbits_init();
        fastbits_init();
        let mut out: u64 = 0;
        assert_eq!(unsafe { fastbits_randbits(1.0, 1, &mut out) }, FASTBITS_OK);
        assert_eq!(out, 1);
    }
}
