// src/rom/translator.rs

use num_complex::Complex;

use super::TwiddleRom;

/// Registered outputs of the lookup pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwiddleOutput {
    pub cos: i64,
    pub sin: i64,
    /// `cos + sin`, one bit wider; feeds three-multiply complex multipliers.
    pub sum: i64,
}

impl TwiddleOutput {
    #[inline]
    fn new(cos: i64, sin: i64) -> Self {
        Self { cos, sin, sum: cos + sin }
    }

    #[inline]
    pub fn as_complex(&self) -> Complex<i64> {
        Complex::new(self.cos, self.sin)
    }
}

/// Stage-1 registers: the decoded half-cycle address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Decoded {
    sign: bool,
    magnitude: usize,
}

/// Cycle model of the two-register lookup pipeline.
///
/// Stage 1 splits the address into the quadrant sign and a quarter-table
/// index, reflecting the index when the sign is set. Stage 2 reads the table,
/// negates cosine for reflected addresses, and substitutes the quarter-point
/// constants when the reflected index is 0. Results land in the output
/// registers two clock edges after their address.
#[derive(Debug, Clone)]
pub struct AddressTranslator<'a> {
    rom: &'a TwiddleRom,
    quarter: usize,
    decoded: Option<Decoded>,
    output: Option<TwiddleOutput>,
}

impl<'a> AddressTranslator<'a> {
    pub fn new(rom: &'a TwiddleRom) -> Self {
        Self {
            rom,
            quarter: rom.table().len() / 4,
            decoded: None,
            output: None,
        }
    }

    /// Fixed number of clock edges from address to output.
    #[inline]
    pub fn latency(&self) -> usize {
        self.rom.ports().latency
    }

    /// One rising clock edge with `addr` on the address input.
    ///
    /// Returns the output registers after the edge; `None` until the first
    /// address has made it through both stages.
    pub fn clock(&mut self, addr: usize) -> Option<TwiddleOutput> {
        let next_output = self.decoded.map(|d| self.select(d));
        self.decoded = Some(self.decode(addr));
        self.output = next_output;
        self.output
    }

    /// Current output registers, without clocking.
    #[inline]
    pub fn output(&self) -> Option<TwiddleOutput> {
        self.output
    }

    /// Combinational equivalent of presenting `addr` and waiting out the latency.
    pub fn lookup(&self, addr: usize) -> TwiddleOutput {
        self.select(self.decode(addr))
    }

    fn decode(&self, addr: usize) -> Decoded {
        // the address port is log2(len) - 1 bits wide
        let addr = addr & (2 * self.quarter - 1);
        let sign = (addr & self.quarter) != 0;
        let low = addr & (self.quarter - 1);
        let magnitude = if sign { low.wrapping_neg() & (self.quarter - 1) } else { low };
        Decoded { sign, magnitude }
    }

    fn select(&self, d: Decoded) -> TwiddleOutput {
        if d.sign && d.magnitude == 0 {
            return TwiddleOutput::new(self.rom.cos_quarter(), self.rom.sin_quarter());
        }
        let table = self.rom.table();
        let cos = table.cos()[d.magnitude];
        let cos = if d.sign { -cos } else { cos };
        TwiddleOutput::new(cos, table.sin()[d.magnitude])
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
