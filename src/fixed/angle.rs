// src/fixed/angle.rs

use core::ops::Neg;

use super::rounding::Rational;
use super::wide::{WIDE_FRAC, Wide};

/// Error bound of the Q124 series evaluation, in Q124 ULPs (2^-112).
pub const WIDE_ERROR_ULPS: u128 = 1 << 12;

/// Error bound of the f64 evaluation, in Q124 ULPs (2^-50).
pub const FAST_ERROR_ULPS: u128 = 1 << 74;

/// Widest master table the f64 path is tried for before going wide.
pub const FAST_PATH_MAX_WIDTH: u32 = 40;

/// Exact fraction of a full turn, `num / den` in lowest terms, in `[0, 1)`.
///
/// Two requests with the same reduced fraction compare equal and evaluate
/// to bit-identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnFraction {
    num: u64,
    den: u64,
}

impl TurnFraction {
    /// `k / n` of a turn, wrapped into `[0, 1)`. Returns `None` for `n == 0`.
    pub fn new(k: u64, n: u64) -> Option<Self> {
        (n != 0).then(|| Self::reduce(k, n))
    }

    /// `new` for a denominator already known to be non-zero.
    pub(crate) fn reduce(k: u64, n: u64) -> Self {
        debug_assert!(n != 0);
        let k = k % n;
        let g = gcd(k, n);
        Self { num: k / g, den: n / g }
    }

    #[inline]
    pub fn num(&self) -> u64 {
        self.num
    }

    #[inline]
    pub fn den(&self) -> u64 {
        self.den
    }

    /// Splits into the quadrant index and the remainder within that quadrant,
    /// as a fraction of a full turn in `[0, 1/4)`.
    fn quadrant(&self) -> (u8, TurnFraction) {
        let scaled = 4 * self.num;
        let quadrant = (scaled / self.den) as u8;
        let rem = scaled % self.den;
        (quadrant, TurnFraction::reduce(rem, 4 * self.den))
    }

    /// `1/4 - self`, for `self` in `[0, 1/4]`.
    fn complement(&self) -> TurnFraction {
        TurnFraction::reduce(self.den - 4 * self.num, 4 * self.den)
    }

    /// True when `self > 1/8`.
    fn past_octant(&self) -> bool {
        8 * self.num > self.den
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// A real value known to lie in `[mid - err, mid + err]`, in signed Q124.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enclosure {
    pub mid: i128,
    pub err: u128,
}

impl Enclosure {
    pub const fn exact(mid: i128) -> Self {
        Self { mid, err: 0 }
    }

    fn from_magnitude(value: Wide, err: u128) -> Self {
        Self { mid: value.to_bits() as i128, err }
    }

    /// Rounds `value * 2^scale_bits` half to even.
    ///
    /// Returns `None` when the two ends of the enclosure round differently,
    /// i.e. the interval straddles a rounding boundary.
    pub fn round_convergent(&self, scale_bits: u32) -> Option<i128> {
        debug_assert!(scale_bits <= WIDE_FRAC);
        let shift = WIDE_FRAC - scale_bits;
        let err = self.err as i128;
        let lo = Rational::from_dyadic(self.mid - err, shift).round_convergent();
        if err == 0 {
            return Some(lo);
        }
        let hi = Rational::from_dyadic(self.mid + err, shift).round_convergent();
        // rounding is monotone: equal ends pin everything in between
        (lo == hi).then_some(lo)
    }
}

impl Neg for Enclosure {
    type Output = Enclosure;

    #[inline]
    fn neg(self) -> Self::Output {
        Enclosure { mid: -self.mid, err: self.err }
    }
}

/// How hard the evaluator works for each angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Double-precision `sin`/`cos`.
    Fast,
    /// Q124 Taylor series.
    Wide,
}

/// `(cos, sin)` of the angle `-2*pi*turn`, the forward-transform twiddle.
pub fn twiddle_enclosure(turn: TurnFraction, precision: Precision) -> (Enclosure, Enclosure) {
    let (cos, sin) = turn_cos_sin(turn, precision);
    (cos, -sin)
}

/// `(cos, sin)` of `+2*pi*turn`, via exact quadrant and octant reduction.
pub fn turn_cos_sin(turn: TurnFraction, precision: Precision) -> (Enclosure, Enclosure) {
    let (quadrant, rem) = turn.quadrant();

    let (c, s) = if rem.num == 0 {
        (Enclosure::exact(Wide::ONE.to_bits() as i128), Enclosure::exact(0))
    } else if rem.past_octant() {
        let (c, s) = octant_cos_sin(rem.complement(), precision);
        (s, c)
    } else {
        octant_cos_sin(rem, precision)
    };

    match quadrant {
        0 => (c, s),
        1 => (-s, c),
        2 => (-c, -s),
        _ => (s, -c),
    }
}

/// `(cos, sin)` of `2*pi*turn` for `turn` in `(0, 1/8]`; both are positive.
fn octant_cos_sin(turn: TurnFraction, precision: Precision) -> (Enclosure, Enclosure) {
    match precision {
        Precision::Fast => {
            let x = core::f64::consts::TAU * (turn.num as f64 / turn.den as f64);
            let (sin, cos) = sin_cos(x);
            let enclose = |v: f64| {
                Enclosure::from_magnitude(Wide::from_unit_f64(v.clamp(0.0, 1.0)), FAST_ERROR_ULPS)
            };
            (enclose(cos), enclose(sin))
        }
        Precision::Wide => {
            // x = pi * (2 * turn), with 2 * turn <= 1/4
            let x = Wide::PI * Wide::from_ratio(2 * turn.num, turn.den);
            let (sin, cos) = wide_sin_cos(x);
            (
                Enclosure::from_magnitude(cos, WIDE_ERROR_ULPS),
                Enclosure::from_magnitude(sin, WIDE_ERROR_ULPS),
            )
        }
    }
}

/// Taylor series for `x` in `(0, pi/4]`. Terms shrink monotonically, so the
/// alternating partial sums never leave `(0, 1]`.
fn wide_sin_cos(x: Wide) -> (Wide, Wide) {
    let x2 = x * x;

    let mut sin = x;
    let mut term = x;
    let mut n = 1u128;
    let mut subtract = true;
    loop {
        term = (term * x2).div_int((n + 1) * (n + 2));
        if term.is_zero() {
            break;
        }
        sin = if subtract { sin - term } else { sin + term };
        subtract = !subtract;
        n += 2;
    }

    let mut cos = Wide::ONE;
    let mut term = Wide::ONE;
    let mut n = 0u128;
    let mut subtract = true;
    loop {
        term = (term * x2).div_int((n + 1) * (n + 2));
        if term.is_zero() {
            break;
        }
        cos = if subtract { cos - term } else { cos + term };
        subtract = !subtract;
        n += 2;
    }

    (sin, cos)
}

/// Agnostic sin/cos helper
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

#[cfg(test)]
#[path = "angle_tests.rs"]
mod tests;
