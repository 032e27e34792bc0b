//! Input classification for the narrowing rules.
//!
//! The categories are disjoint and checked in the same order as
//! [`narrow_to_single_precision`], so the category of an input names the rule
//! that produced its result.

use super::convert::narrow_to_single_precision;
use super::limits::{F32_MAX_AS_F64, F32_MIN_NORMAL_AS_F64, F64_EXP_MASK, F64_SIGN_MASK};
use super::{abs_bits, f64_to_bits};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Any NaN, quiet or signalling, either sign.
    Nan,
    PositiveInfinity,
    NegativeInfinity,
    /// Non-zero with magnitude below `f32::MIN_POSITIVE`.
    Tiny,
    /// Finite with magnitude above `f32::MAX`.
    Overflow,
    /// Finite and rounded by the plain conversion, `±0.0` included.
    InRange,
}

impl Category {
    /// True when the result is a clamped value rather than a rounded one.
    #[inline]
    pub fn is_clamped(self) -> bool {
        matches!(self, Category::Tiny | Category::Overflow)
    }
}

#[inline(always)]
pub fn classify(x: f64) -> Category {
    let ux = f64_to_bits(x);
    let ax = abs_bits(ux);

    if ax > F64_EXP_MASK {
        Category::Nan
    } else if ax == F64_EXP_MASK {
        if ux & F64_SIGN_MASK == 0 {
            Category::PositiveInfinity
        } else {
            Category::NegativeInfinity
        }
    } else if ax != 0 && ax < F32_MIN_NORMAL_AS_F64 {
        Category::Tiny
    } else if ax > F32_MAX_AS_F64 {
        Category::Overflow
    } else {
        Category::InRange
    }
}

/// Narrow `x` and report which rule decided the result.
#[inline(always)]
pub fn narrow_classified(x: f64) -> (f32, Category) {
    (narrow_to_single_precision(x), classify(x))
}
