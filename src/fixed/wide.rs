// src/fixed/wide.rs

use core::fmt;
use core::ops::{Add, Sub};

/// Fractional bits of the wide format. One integer bit and a guard bit remain.
pub const WIDE_FRAC: u32 = 124;

/// pi in Q124, truncated (hex digits 3.243F6A8885A308D313198A2E0370734...).
const PI_BITS: u128 = 0x3243_F6A8_885A_308D_3131_98A2_E037_0734;

const LOW_MASK: u128 = u64::MAX as u128;

/// Unsigned Q124 fixed-point magnitude used for high-precision trig.
///
/// Multiplication truncates, so every product is at most one ULP low.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Wide(u128);

impl Wide {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << WIDE_FRAC);
    /// Within one ULP below pi.
    pub const PI: Self = Self(PI_BITS);

    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u128 {
        self.0
    }

    /// `num / den` truncated to Q124. Requires `num < den`.
    pub fn from_ratio(num: u64, den: u64) -> Self {
        debug_assert!(num < den);
        let den = den as u128;
        let mut rem = num as u128;
        let mut bits = 0u128;
        // binary long division, one quotient bit per step
        for _ in 0..WIDE_FRAC {
            rem <<= 1;
            bits <<= 1;
            if rem >= den {
                rem -= den;
                bits |= 1;
            }
        }
        Self(bits)
    }

    /// Converts a float in `[0, 1]`, truncating below 2^-64.
    pub fn from_unit_f64(value: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&value));
        let scaled = value * 18_446_744_073_709_551_616.0; // 2^64
        Self((scaled as u128) << (WIDE_FRAC - 64))
    }

    /// Divides by a small integer, truncating.
    #[inline]
    pub fn div_int(self, divisor: u128) -> Self {
        Self(self.0 / divisor)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Wide {
    type Output = Wide;

    #[inline]
    fn add(self, rhs: Wide) -> Self::Output {
        Wide(self.0 + rhs.0)
    }
}

impl Sub for Wide {
    type Output = Wide;

    #[inline]
    fn sub(self, rhs: Wide) -> Self::Output {
        Wide(self.0 - rhs.0)
    }
}

impl core::ops::Mul for Wide {
    type Output = Wide;

    /// Full 256-bit product, shifted back down to Q124 and truncated.
    #[inline]
    fn mul(self, rhs: Wide) -> Self::Output {
        let (a1, a0) = (self.0 >> 64, self.0 & LOW_MASK);
        let (b1, b0) = (rhs.0 >> 64, rhs.0 & LOW_MASK);

        let low = a0 * b0;
        let (cross, cross_carry) = (a1 * b0).overflowing_add(a0 * b1);
        let (low, low_carry) = low.overflowing_add(cross << 64);
        let high = a1 * b1 + (cross >> 64) + ((cross_carry as u128) << 64) + low_carry as u128;

        debug_assert!(high >> WIDE_FRAC == 0, "Q124 product overflow");
        Wide((high << (128 - WIDE_FRAC)) | (low >> WIDE_FRAC))
    }
}

impl fmt::Debug for Wide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = (self.0 >> 64) as f64 / (1u64 << (WIDE_FRAC - 64)) as f64;
        write!(f, "{:.12} (raw: {:#x})", val, self.0)
    }
}
