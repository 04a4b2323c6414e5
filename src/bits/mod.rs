//! Binary64 decomposition and neighbour stepping.
//!
//! Every operation here is a pure function of one (or two) `f64` values. All
//! word access goes through [`unpack`]/[`pack`], which present the sign and
//! exponent word as `hi` on every host, whatever order the two halves sit in
//! memory.
//!
//! ```text
//!                     HI WORD                                        LO WORD
//! |---|---------------|--------------------------|  |-----------------------------------------|
//! | s | eee eeee eeee | ffff ffff ffff ffff ffff |  | ffff ffff ffff ffff ffff ffff ffff ffff |
//! |---|---------------|--------------------------|  |-----------------------------------------|
//!  31   30 ....... 20   19 ..................... 0    31 .................................... 0
//! ```

#![allow(clippy::unusual_byte_groupings)]

mod classify;
pub mod consts;
mod endian;
mod fields;
mod nextafter;
mod words;

pub use classify::{FloatClass, classify, is_finite, is_inf, is_nan, signbit};
pub use endian::{WordOrder, host_word_order};
pub use fields::{
    Decomposed, Fraction, bit, decompose, exponent, fraction, integer_bit, is_negative_zero,
    is_normal, is_subnormal_or_zero, sign, significand, unbiased_exponent, with_bit,
};
pub use nextafter::{next_down, next_up, nextafter};
pub use words::{WordPair, pack, physical_words, try_pack, unpack};

// ========= field layout =========

const SIGN_SHIFT: u32 = 31;
const EXP_SHIFT: u32 = 20;
const FRAC_HI_MASK: u32 = 0x000f_ffff;

/// Biased exponent of zero and subnormals.
const EXP_LO: u16 = 0;
/// Biased exponent of infinities and NaN.
const EXP_HI: u16 = 0x7ff;
const EXP_BIAS: i16 = 1023;

// ========= bit helpers =========

#[inline(always)]
fn hi_word(x: f64) -> u32 {
    unpack(x).hi
}

#[inline(always)]
fn lo_word(x: f64) -> u32 {
    unpack(x).lo
}

#[inline(always)]
fn with_hi_lo(hi: u32, lo: u32) -> f64 {
    pack(lo, hi)
}
