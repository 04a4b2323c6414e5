use super::endian::{host_word_order, join_native, split_native};
use crate::error::{BitsError, Result, WordSlot};

/// One `f64` as two 32-bit words in logical order: `hi` carries the sign,
/// the biased exponent and the top 20 fraction bits, `lo` the low 32 fraction
/// bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WordPair {
    pub hi: u32,
    pub lo: u32,
}

impl WordPair {
    #[inline(always)]
    pub const fn new(hi: u32, lo: u32) -> Self {
        WordPair { hi, lo }
    }

    /// The 64-bit pattern `hi:lo`.
    #[inline(always)]
    pub const fn to_bits(self) -> u64 {
        ((self.hi as u64) << 32) | (self.lo as u64)
    }

    #[inline(always)]
    pub const fn from_bits(u: u64) -> Self {
        WordPair {
            hi: (u >> 32) as u32,
            lo: (u & 0xffff_ffffu64) as u32,
        }
    }

    #[inline(always)]
    pub fn to_f64(self) -> f64 {
        pack(self.lo, self.hi)
    }
}

impl From<f64> for WordPair {
    #[inline(always)]
    fn from(x: f64) -> Self {
        unpack(x)
    }
}

impl From<WordPair> for f64 {
    #[inline(always)]
    fn from(w: WordPair) -> Self {
        w.to_f64()
    }
}

/// Reinterpret the 64 bits of `x` as a [`WordPair`]. Total over every bit
/// pattern, NaN payloads and signed zeros included.
#[inline(always)]
pub fn unpack(x: f64) -> WordPair {
    let words = split_native(x);
    let (hi, lo) = host_word_order().slots();
    WordPair {
        hi: words[hi],
        lo: words[lo],
    }
}

/// Inverse of [`unpack`]: `pack(unpack(x).lo, unpack(x).hi)` has the same
/// bits as `x`.
#[inline(always)]
pub fn pack(lo: u32, hi: u32) -> f64 {
    let (h, l) = host_word_order().slots();
    let mut words = [0u32; 2];
    words[h] = hi;
    words[l] = lo;
    join_native(words)
}

/// [`pack`] for callers holding wider integers. A word above `u32::MAX` is
/// rejected rather than truncated.
pub fn try_pack(lo: u64, hi: u64) -> Result<f64> {
    let lo = narrow(lo, WordSlot::Lo)?;
    let hi = narrow(hi, WordSlot::Hi)?;
    Ok(pack(lo, hi))
}

fn narrow(value: u64, slot: WordSlot) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        tracing::debug!(%slot, value, "rejected word wider than 32 bits");
        BitsError::WordOutOfRange { slot, value }
    })
}

/// The two words of `x` in the order the host stores them in memory.
#[inline(always)]
pub fn physical_words(x: f64) -> [u32; 2] {
    split_native(x)
}
