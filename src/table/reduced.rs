// src/table/reduced.rs

use alloc::vec::Vec;
use num_complex::Complex;

use super::master::MasterTable;
use crate::common::{Direction, TwiddleError};
use crate::config::GeneratorConfig;
use crate::fixed::rounding::{reround, saturate};

/// Quarter-cycle twiddle table for one `(len, width, direction)` instantiation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedTable {
    len: usize,
    width: u32,
    direction: Direction,
    cos: Vec<i64>,
    sin: Vec<i64>,
}

impl ReducedTable {
    /// Subsamples the master at stride `master.len() / len` and re-rounds
    /// each sample to `width` bits.
    ///
    /// For [`Direction::Inverse`] the sine column is negated first; cosine
    /// does not depend on direction.
    pub fn from_master(
        master: &MasterTable,
        len: usize,
        width: u32,
        direction: Direction,
    ) -> Result<Self, TwiddleError> {
        GeneratorConfig::new(master.len(), master.width())?.validate_request(len, width)?;

        let stride = master.len() / len;
        let from = master.width();

        let cos = master
            .cos()
            .iter()
            .step_by(stride)
            .map(|&c| narrow(c, from, width))
            .collect();
        let sin = master
            .sin()
            .iter()
            .step_by(stride)
            .map(|&s| {
                let s = if direction.is_inverse() { -s } else { s };
                narrow(s, from, width)
            })
            .collect();

        log::debug!(
            "reduced twiddle table: len={} width={} stride={} {:?}",
            len,
            width,
            stride,
            direction
        );

        Ok(Self { len, width, direction, cos, sin })
    }

    /// Transform length.
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
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn cos(&self) -> &[i64] {
        &self.cos
    }

    #[inline]
    pub fn sin(&self) -> &[i64] {
        &self.sin
    }

    /// Entry `index` as `cos + j*sin`.
    #[inline]
    pub fn twiddle(&self, index: usize) -> Complex<i64> {
        Complex::new(self.cos[index], self.sin[index])
    }
}

#[inline]
fn narrow(sample: i64, from: u32, to: u32) -> i64 {
    saturate(reround(sample, from, to) as i128, to)
}

#[cfg(test)]
#[path = "reduced_tests.rs"]
mod tests;
