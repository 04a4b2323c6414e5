//! Notable binary64 values and bit patterns.

use super::WordPair;

/// High word of 1.0. Used to probe the host word order.
pub const UNIT_HI: u32 = 0x3ff0_0000;

/// 2^-1074, the smallest positive subnormal.
pub const SMALLEST_SUBNORMAL: f64 = f64::from_bits(0x0000_0000_0000_0001);
/// (1 - 2^-52) * 2^-1022.
pub const LARGEST_SUBNORMAL: f64 = f64::from_bits(0x000f_ffff_ffff_ffff);
/// 2^-1022.
pub const SMALLEST_NORMAL: f64 = f64::from_bits(0x0010_0000_0000_0000);
/// (2 - 2^-52) * 2^1023.
pub const LARGEST_FINITE: f64 = f64::from_bits(0x7fef_ffff_ffff_ffff);
/// 2^-52, the gap between 1.0 and the next float up.
pub const EPSILON: f64 = f64::from_bits(0x3cb0_0000_0000_0000);

/// NaN with the smallest non-zero payload (signalling, positive).
pub const NAN_MIN_BITS: WordPair = WordPair::new(0x7ff0_0000, 0x0000_0001);
/// NaN with every bit set.
pub const NAN_MAX_BITS: WordPair = WordPair::new(0xffff_ffff, 0xffff_ffff);
