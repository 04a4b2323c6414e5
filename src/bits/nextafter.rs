use super::consts::SMALLEST_SUBNORMAL;
use super::{WordPair, is_nan, pack, unpack};

/// The representable `f64` next to `x` in the direction of `y`.
///
/// NaN in either argument gives NaN. Equal arguments give `x` back, so
/// `nextafter(0.0, -0.0)` is `+0.0`. Stepping off the largest finite
/// magnitude gives the matching infinity.
#[inline]
pub fn nextafter(x: f64, y: f64) -> f64 {
    if is_nan(x) || is_nan(y) {
        tracing::trace!(x, y, "nextafter: NaN argument");
        return f64::NAN;
    }
    if x == y {
        return x;
    }
    if x == 0.0 {
        return if y < 0.0 {
            -SMALLEST_SUBNORMAL
        } else {
            SMALLEST_SUBNORMAL
        };
    }

    // The pattern as one unsigned integer grows with |x|: one step up moves
    // away from zero, one step down moves toward it.
    let WordPair { mut hi, mut lo } = unpack(x);
    if (x > 0.0 && y > x) || (x <= 0.0 && y <= x) {
        if lo < u32::MAX {
            lo += 1;
        } else {
            lo = 0;
            hi = hi.wrapping_add(1);
            tracing::trace!(hi, "nextafter: carry into hi word");
        }
    } else if lo > 0 {
        lo -= 1;
    } else {
        lo = u32::MAX;
        hi = hi.wrapping_sub(1);
        tracing::trace!(hi, "nextafter: borrow from hi word");
    }
    pack(lo, hi)
}

/// Next float toward +inf.
#[inline(always)]
pub fn next_up(x: f64) -> f64 {
    nextafter(x, f64::INFINITY)
}

/// Next float toward -inf.
#[inline(always)]
pub fn next_down(x: f64) -> f64 {
    nextafter(x, f64::NEG_INFINITY)
}
