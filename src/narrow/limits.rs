//! Binary32 range limits, in the bit layouts the narrowing code compares against.
//!
//! Thresholds are binary64 magnitude patterns so a single unsigned compare on
//! `bits & !sign` decides the range. Results are binary32 patterns with the
//! sign bit clear; callers OR the input sign in.

pub const F64_SIGN_MASK: u64 = 0x8000_0000_0000_0000u64;
pub const F64_EXP_MASK: u64 = 0x7ff0_0000_0000_0000u64;
pub const F64_MANT_MASK: u64 = 0x000f_ffff_ffff_ffffu64;

/// `f32::MIN_POSITIVE` (2^-126) as binary64 bits.
pub const F32_MIN_NORMAL_AS_F64: u64 = 0x3810_0000_0000_0000u64;
/// `f32::MAX` ((2 - 2^-23) * 2^127) as binary64 bits.
pub const F32_MAX_AS_F64: u64 = 0x47ef_ffff_e000_0000u64;

pub const F32_SIGN_MASK: u32 = 0x8000_0000u32;
pub const F32_INF_BITS: u32 = 0x7f80_0000u32;
/// 2^-149, the smallest positive binary32 value.
pub const F32_MIN_SUBNORMAL_BITS: u32 = 0x0000_0001u32;
pub const F32_MAX_BITS: u32 = 0x7f7f_ffffu32;
