use core::fmt;

use thiserror::Error;

/// Which logical word of a [`WordPair`](crate::WordPair) a value was meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordSlot {
    Hi,
    Lo,
}

impl fmt::Display for WordSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSlot::Hi => f.write_str("hi"),
            WordSlot::Lo => f.write_str("lo"),
        }
    }
}

/// Boundary errors. The numeric core itself is total; these only fire when a
/// caller hands over something that is not a binary64 word or bit position.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    #[error("{slot} word does not fit in 32 bits: {value:#x}")]
    WordOutOfRange { slot: WordSlot, value: u64 },

    #[error("bit index {0} out of range (expected 0..=63)")]
    BitIndexOutOfRange(u32),
}

pub type Result<T> = core::result::Result<T, BitsError>;
