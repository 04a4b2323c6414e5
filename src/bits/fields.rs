use super::consts::EPSILON;
use super::{
    EXP_BIAS, EXP_HI, EXP_LO, EXP_SHIFT, FRAC_HI_MASK, SIGN_SHIFT, WordPair, hi_word, lo_word,
    unpack, with_hi_lo,
};
use crate::error::{BitsError, Result};

/// The 52-bit fraction split like the words: 20 bits in `hi`, 32 in `lo`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub hi: u32,
    pub lo: u32,
}

impl Fraction {
    /// The fraction as a single 52-bit integer.
    #[inline(always)]
    pub const fn to_bits(self) -> u64 {
        (((self.hi & FRAC_HI_MASK) as u64) << 32) | (self.lo as u64)
    }
}

/// Sign, biased exponent and fraction of one `f64`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decomposed {
    pub sign: u32,
    pub exponent: u16,
    pub fraction: Fraction,
}

impl Decomposed {
    /// Reassemble the value. Fields are masked to their widths (1, 11 and
    /// 20 + 32 bits), so anything produced by [`decompose`] comes back
    /// bit-for-bit.
    #[inline]
    pub fn compose(self) -> f64 {
        let hi = ((self.sign & 1) << SIGN_SHIFT)
            | (((self.exponent & EXP_HI) as u32) << EXP_SHIFT)
            | (self.fraction.hi & FRAC_HI_MASK);
        with_hi_lo(hi, self.fraction.lo)
    }
}

#[inline]
pub fn decompose(x: f64) -> Decomposed {
    let w = unpack(x);
    Decomposed {
        sign: w.hi >> SIGN_SHIFT,
        exponent: ((w.hi << 1) >> 21) as u16,
        fraction: Fraction {
            hi: w.hi & FRAC_HI_MASK,
            lo: w.lo,
        },
    }
}

/// Sign bit: 0 or 1. Tells -0.0 from +0.0.
#[inline(always)]
pub fn sign(x: f64) -> u32 {
    hi_word(x) >> SIGN_SHIFT
}

/// Biased exponent in `0..=2047`.
#[inline(always)]
pub fn exponent(x: f64) -> u16 {
    ((hi_word(x) << 1) >> 21) as u16
}

#[inline(always)]
pub fn fraction(x: f64) -> Fraction {
    Fraction {
        hi: hi_word(x) & FRAC_HI_MASK,
        lo: lo_word(x),
    }
}

/// Implicit leading bit of the significand: 1 for normals, 0 for everything
/// else (zero, subnormals, infinities and NaN).
#[inline(always)]
pub fn integer_bit(x: f64) -> u32 {
    is_normal(x) as u32
}

#[inline(always)]
pub fn is_normal(x: f64) -> bool {
    let e = exponent(x);
    e > EXP_LO && e < EXP_HI
}

#[inline(always)]
pub fn is_subnormal_or_zero(x: f64) -> bool {
    exponent(x) == EXP_LO
}

/// `x == 0.0` cannot see the sign, so check the bit as well.
#[inline(always)]
pub fn is_negative_zero(x: f64) -> bool {
    x == 0.0 && sign(x) == 1
}

/// Exponent actually applied to the significand: `exponent - 1023` for
/// normals, -1022 for zero and subnormals. Infinities and NaN report 1024.
#[inline]
pub fn unbiased_exponent(x: f64) -> i16 {
    (exponent(x) as i16 - EXP_BIAS).max(1 - EXP_BIAS)
}

/// `integer_bit.fraction` as a number in `[0, 2)`. Exact: 53 bits fit.
#[inline]
pub fn significand(x: f64) -> f64 {
    integer_bit(x) as f64 + fraction(x).to_bits() as f64 * EPSILON
}

/// Bit `index` of the pattern, 0 being the lowest fraction bit and 63 the
/// sign.
pub fn bit(x: f64, index: u32) -> Result<bool> {
    check_index(index)?;
    Ok((unpack(x).to_bits() >> index) & 1 == 1)
}

/// `x` with bit `index` set or cleared.
pub fn with_bit(x: f64, index: u32, set: bool) -> Result<f64> {
    check_index(index)?;
    let mask = 1u64 << index;
    let u = unpack(x).to_bits();
    let u = if set { u | mask } else { u & !mask };
    Ok(WordPair::from_bits(u).to_f64())
}

#[inline(always)]
fn check_index(index: u32) -> Result<()> {
    if index < 64 {
        Ok(())
    } else {
        Err(BitsError::BitIndexOutOfRange(index))
    }
}
