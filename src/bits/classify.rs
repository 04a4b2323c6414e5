use super::{EXP_HI, EXP_LO, exponent, fraction, sign};

/// IEEE-754 class of a binary64 value, read off the exponent and fraction
/// fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatClass {
    Nan,
    Infinite,
    Zero,
    Subnormal,
    Normal,
}

#[inline(always)]
pub fn is_finite(x: f64) -> bool {
    exponent(x) != EXP_HI
}

#[inline(always)]
pub fn is_inf(x: f64) -> bool {
    exponent(x) == EXP_HI && fraction(x).to_bits() == 0
}

#[inline(always)]
pub fn is_nan(x: f64) -> bool {
    exponent(x) == EXP_HI && fraction(x).to_bits() != 0
}

#[inline(always)]
pub fn signbit(x: f64) -> bool {
    sign(x) != 0
}

#[inline(always)]
pub fn classify(x: f64) -> FloatClass {
    let e = exponent(x);
    let mant = fraction(x).to_bits();
    if e == EXP_HI {
        if mant == 0 {
            FloatClass::Infinite
        } else {
            FloatClass::Nan
        }
    } else if e == EXP_LO {
        if mant == 0 {
            FloatClass::Zero
        } else {
            FloatClass::Subnormal
        }
    } else {
        FloatClass::Normal
    }
}
