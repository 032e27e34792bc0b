use super::limits::{
    F32_INF_BITS, F32_MAX_AS_F64, F32_MAX_BITS, F32_MIN_NORMAL_AS_F64, F32_MIN_SUBNORMAL_BITS,
    F64_EXP_MASK,
};
use super::{abs_bits, f32_from_bits, f64_to_bits, sign32};

/// Narrow `x` to the nearest binary32 value, clamping instead of overflowing
/// to infinity or flushing to zero.
///
/// Rules, first match wins:
/// - NaN returns `f32::NAN`; the input payload and sign are dropped.
/// - `±inf` returns `±inf`.
/// - `0 < |x| < 2^-126` returns `±2^-149`.
/// - `|x| > f32::MAX` returns `±f32::MAX`.
/// - anything else, `±0.0` included, is rounded to nearest, ties to even.
///
/// ```
/// use fastnarrow::narrow_to_single_precision;
///
/// assert_eq!(narrow_to_single_precision(f64::MAX), f32::MAX);
/// assert_eq!(narrow_to_single_precision(-1e-300), -f32::from_bits(1));
/// assert_eq!(narrow_to_single_precision(2.0), 2.0f32);
/// ```
#[inline(always)]
pub fn narrow_to_single_precision(x: f64) -> f32 {
    let ux = f64_to_bits(x);
    let ax = abs_bits(ux);

    if ax > F64_EXP_MASK {
        return f32::NAN;
    }
    if ax == F64_EXP_MASK {
        return f32_from_bits(sign32(ux) | F32_INF_BITS);
    }
    if ax != 0 && ax < F32_MIN_NORMAL_AS_F64 {
        return f32_from_bits(sign32(ux) | F32_MIN_SUBNORMAL_BITS);
    }
    if ax > F32_MAX_AS_F64 {
        return f32_from_bits(sign32(ux) | F32_MAX_BITS);
    }
    x as f32
}
