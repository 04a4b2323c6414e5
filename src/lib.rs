#![no_std]

#[cfg(test)]
extern crate std;

pub mod bits;
mod error;

pub use bits::*;
pub use error::{BitsError, Result, WordSlot};
