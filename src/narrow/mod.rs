//! Binary64 to binary32 narrowing.
//!
//! Every input bit pattern maps to a defined binary32 result. NaN becomes the
//! canonical quiet NaN, infinities keep their sign, magnitudes too small for a
//! normal binary32 clamp to the signed minimum subnormal and magnitudes past
//! `f32::MAX` clamp to the signed maximum finite value. Everything else goes
//! through the hardware round-to-nearest-even conversion.

mod classify;
mod convert;
mod exact;
pub mod limits;

pub use classify::{Category, classify, narrow_classified};
pub use convert::narrow_to_single_precision;
pub use exact::narrows_exactly;

use limits::{F32_SIGN_MASK, F64_SIGN_MASK};

// ========= bit helpers =========

#[inline(always)]
fn f64_to_bits(x: f64) -> u64 {
    x.to_bits()
}
#[inline(always)]
fn f32_from_bits(u: u32) -> f32 {
    f32::from_bits(u)
}

/// Clears the sign bit. The result orders like `|x|` for every non-NaN input.
#[inline(always)]
fn abs_bits(u: u64) -> u64 {
    u & !F64_SIGN_MASK
}

/// Sign of a binary64 pattern moved into binary32 position.
#[inline(always)]
fn sign32(u: u64) -> u32 {
    ((u >> 32) as u32) & F32_SIGN_MASK
}
