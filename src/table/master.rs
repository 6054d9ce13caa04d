// src/table/master.rs

use alloc::vec::Vec;

use crate::common::TwiddleError;
use crate::config::GeneratorConfig;
use crate::fixed::angle::{FAST_PATH_MAX_WIDTH, Precision, TurnFraction, twiddle_enclosure};
use crate::fixed::rounding::saturate;

/// Maximal-precision quarter-cycle table at `max_len`, the source of every
/// smaller instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterTable {
    len: usize,
    width: u32,
    cos: Vec<i64>,
    sin: Vec<i64>,
}

impl MasterTable {
    /// Computes `max_len / 4` entries of `round(2^(width-2) * e^(-j*2*pi*k/max_len))`.
    pub fn build(config: &GeneratorConfig) -> Result<Self, TwiddleError> {
        Self::build_with(config, rounded_twiddle)
    }

    /// `build` with the per-entry evaluator swapped out. The evaluator returns
    /// `None` for an undecidable entry and flags entries that went wide.
    pub(crate) fn build_with<F>(
        config: &GeneratorConfig,
        mut evaluate: F,
    ) -> Result<Self, TwiddleError>
    where
        F: FnMut(TurnFraction, u32) -> Option<(i64, i64, bool)>,
    {
        let len = config.max_len();
        let width = config.master_width();
        let entries = len / 4;

        log::debug!("building master twiddle table: len={} width={}", len, width);

        let mut cos = Vec::with_capacity(entries);
        let mut sin = Vec::with_capacity(entries);
        let mut escalated = 0usize;

        for k in 0..entries {
            let turn = TurnFraction::reduce(k as u64, len as u64);
            let (c, s, wide) = evaluate(turn, width).ok_or_else(|| {
                log::warn!("twiddle {}/{} undecidable at {} bits", k, len, width);
                TwiddleError::ArithmeticPrecision { index: k }
            })?;
            escalated += wide as usize;
            cos.push(c);
            sin.push(s);
        }

        if width <= FAST_PATH_MAX_WIDTH {
            log::debug!("{} of {} entries needed the wide evaluator", escalated, entries);
        }

        Ok(Self { len, width, cos, sin })
    }

    /// Transform length the table was built for (`max_len`).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored entries, `len / 4`.
    #[inline]
    pub fn entries(&self) -> usize {
        self.cos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cos.is_empty()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn cos(&self) -> &[i64] {
        &self.cos
    }

    #[inline]
    pub fn sin(&self) -> &[i64] {
        &self.sin
    }
}

/// Rounds one twiddle pair, escalating from f64 to the wide evaluator when
/// the fast enclosure cannot decide. The flag reports whether it went wide.
pub(crate) fn rounded_twiddle(turn: TurnFraction, width: u32) -> Option<(i64, i64, bool)> {
    let scale = width - 2;
    if width <= FAST_PATH_MAX_WIDTH {
        let (cos, sin) = twiddle_enclosure(turn, Precision::Fast);
        if let (Some(c), Some(s)) = (cos.round_convergent(scale), sin.round_convergent(scale)) {
            return Some((saturate(c, width), saturate(s, width), false));
        }
        log::trace!("fast path undecided for {}/{}", turn.num(), turn.den());
    }

    let (cos, sin) = twiddle_enclosure(turn, Precision::Wide);
    let c = cos.round_convergent(scale)?;
    let s = sin.round_convergent(scale)?;
    Some((saturate(c, width), saturate(s, width), true))
}

#[cfg(test)]
#[path = "master_tests.rs"]
mod tests;
