use super::convert::narrow_to_single_precision;

/// True when narrowing `x` loses nothing: the binary32 result widens back to
/// the same binary64 bit pattern. NaN never narrows exactly.
///
/// Clamping counts as loss, so binary32 subnormals other than `2^-149` are
/// not exact even though a plain cast would preserve some of them.
#[inline]
pub fn narrows_exactly(x: f64) -> bool {
    if x.is_nan() {
        return false;
    }
    (narrow_to_single_precision(x) as f64).to_bits() == x.to_bits()
}
