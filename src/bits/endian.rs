use core::sync::atomic::{AtomicU8, Ordering};

use super::consts::UNIT_HI;

/// Physical order of the two 32-bit halves of an `f64` in host memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordOrder {
    /// The sign/exponent word is stored first (big-endian word order).
    HighFirst,
    /// The low fraction word is stored first (little-endian word order).
    LowFirst,
}

impl WordOrder {
    /// Physical slot indices as `(hi, lo)`.
    #[inline(always)]
    pub(crate) const fn slots(self) -> (usize, usize) {
        match self {
            WordOrder::HighFirst => (0, 1),
            WordOrder::LowFirst => (1, 0),
        }
    }
}

const UNPROBED: u8 = 0;
const HIGH_FIRST: u8 = 1;
const LOW_FIRST: u8 = 2;

// Written at most once with a deterministic value, so relaxed ordering is
// enough: a racing thread can only ever store the same classification.
static WORD_ORDER: AtomicU8 = AtomicU8::new(UNPROBED);

/// Word order of the running host, probed on first call and cached for the
/// life of the process.
#[inline]
pub fn host_word_order() -> WordOrder {
    match WORD_ORDER.load(Ordering::Relaxed) {
        HIGH_FIRST => WordOrder::HighFirst,
        LOW_FIRST => WordOrder::LowFirst,
        _ => init_word_order(),
    }
}

#[cold]
fn init_word_order() -> WordOrder {
    let order = probe();
    let tag = match order {
        WordOrder::HighFirst => HIGH_FIRST,
        WordOrder::LowFirst => LOW_FIRST,
    };
    if WORD_ORDER
        .compare_exchange(UNPROBED, tag, Ordering::Relaxed, Ordering::Relaxed)
        .is_ok()
    {
        tracing::debug!(?order, "classified host word order");
    }
    order
}

/// Store 1.0 and look at which physical word holds its known high word.
fn probe() -> WordOrder {
    if split_native(1.0)[0] == UNIT_HI {
        WordOrder::HighFirst
    } else {
        WordOrder::LowFirst
    }
}

/// The two 32-bit windows over the memory of `x`, in memory order.
#[inline(always)]
pub(crate) fn split_native(x: f64) -> [u32; 2] {
    let b = x.to_ne_bytes();
    [
        u32::from_ne_bytes([b[0], b[1], b[2], b[3]]),
        u32::from_ne_bytes([b[4], b[5], b[6], b[7]]),
    ]
}

/// Inverse of [`split_native`].
#[inline(always)]
pub(crate) fn join_native(words: [u32; 2]) -> f64 {
    let a = words[0].to_ne_bytes();
    let b = words[1].to_ne_bytes();
    f64::from_ne_bytes([a[0], a[1], a[2], a[3], b[0], b[1], b[2], b[3]])
}
