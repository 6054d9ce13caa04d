// src/fixed/rounding.rs

use core::cmp::Ordering;

/// Exact rational `num / den` with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    num: i128,
    den: i128,
}

impl Rational {
    /// Returns `None` for a zero denominator.
    pub fn new(num: i128, den: i128) -> Option<Self> {
        match den.cmp(&0) {
            Ordering::Equal => None,
            Ordering::Greater => Some(Self { num, den }),
            Ordering::Less => Some(Self { num: -num, den: -den }),
        }
    }

    /// `num / 2^shift`.
    #[inline]
    pub fn from_dyadic(num: i128, shift: u32) -> Self {
        debug_assert!(shift < 127);
        Self { num, den: 1i128 << shift }
    }

    #[inline]
    pub fn num(&self) -> i128 {
        self.num
    }

    #[inline]
    pub fn den(&self) -> i128 {
        self.den
    }

    /// Rounds to the nearest integer; exact halves go to the even neighbour.
    pub fn round_convergent(&self) -> i128 {
        let floor = self.num.div_euclid(self.den);
        let rem = self.num.rem_euclid(self.den);
        // rem vs den/2, compared without dividing
        match rem.cmp(&(self.den - rem)) {
            Ordering::Less => floor,
            Ordering::Greater => floor + 1,
            Ordering::Equal => floor + (floor & 1),
        }
    }
}

/// Divides `value` by `2^shift`, rounding half to even, on the two's-complement bits.
///
/// The bias is half of the retained LSB, less one when that LSB is 0, so an
/// exact half only carries into an odd quotient.
#[inline]
pub fn round_shift_convergent(value: i128, shift: u32) -> i128 {
    if shift == 0 {
        return value;
    }
    let kept_lsb = (value >> shift) & 1;
    let bias = (1i128 << (shift - 1)) - 1 + kept_lsb;
    (value + bias) >> shift
}

/// Re-rounds a `from`-bit sample to `to` bits under the same full-scale convention.
#[inline]
pub(crate) fn reround(sample: i64, from: u32, to: u32) -> i64 {
    debug_assert!(to <= from);
    round_shift_convergent(sample as i128, from - to) as i64
}

/// Clamps to the symmetric table range `±(2^(width-2) - 1)`.
#[inline]
pub(crate) fn saturate(value: i128, width: u32) -> i64 {
    let limit = (1i128 << (width - 2)) - 1;
    value.clamp(-limit, limit) as i64
}

#[cfg(test)]
#[path = "rounding_tests.rs"]
mod tests;
