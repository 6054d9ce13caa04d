// src/rom/mod.rs

pub mod emit;
pub mod translator;

pub use emit::{MemImage, MemInitEmitter};
pub use translator::{AddressTranslator, TwiddleOutput};

use crate::common::{Direction, RomEmitter, TwiddleError};
use crate::config::{GeneratorConfig, negative_full_scale, positive_full_scale};
use crate::table::{MasterTable, ReducedTable};

/// Clock edges from address input to registered outputs.
pub const PIPELINE_LATENCY: usize = 2;

/// Port widths of the lookup pipeline for one instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortLayout {
    /// `log2(len) - 1` bits, addressing half a cycle.
    pub address_width: u32,
    /// Signed width of the cosine and sine outputs.
    pub output_width: u32,
    /// Signed width of the cosine + sine output.
    pub sum_width: u32,
    pub latency: usize,
}

/// Everything an emitter needs for one instantiation: the quarter-cycle
/// table, the quarter-point constants and the pipeline ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwiddleRom {
    table: ReducedTable,
    cos_quarter: i64,
    sin_quarter: i64,
    ports: PortLayout,
}

impl TwiddleRom {
    pub fn new(table: ReducedTable) -> Self {
        let width = table.width();
        // e^(-j*pi/2) = -j; the inverse transform sees +j
        let sin_quarter = match table.direction() {
            Direction::Forward => negative_full_scale(width),
            Direction::Inverse => positive_full_scale(width),
        };
        let ports = PortLayout {
            address_width: table.len().trailing_zeros() - 1,
            output_width: width,
            sum_width: width + 1,
            latency: PIPELINE_LATENCY,
        };
        Self { table, cos_quarter: 0, sin_quarter, ports }
    }

    #[inline]
    pub fn table(&self) -> &ReducedTable {
        &self.table
    }

    /// Cosine output at the quarter-cycle address.
    #[inline]
    pub fn cos_quarter(&self) -> i64 {
        self.cos_quarter
    }

    /// Sine output at the quarter-cycle address.
    #[inline]
    pub fn sin_quarter(&self) -> i64 {
        self.sin_quarter
    }

    #[inline]
    pub fn ports(&self) -> PortLayout {
        self.ports
    }

    /// A fresh pipeline reading this ROM.
    pub fn translator(&self) -> AddressTranslator<'_> {
        AddressTranslator::new(self)
    }

    pub fn emit<E: RomEmitter>(&self, emitter: &E) -> E::Output {
        emitter.emit(self)
    }
}

/// Owns the master table and derives per-instantiation ROMs from it.
#[derive(Debug, Clone)]
pub struct TwiddleGenerator {
    config: GeneratorConfig,
    master: MasterTable,
}

impl TwiddleGenerator {
    /// Builds the master table. This is the only expensive step.
    pub fn new(config: GeneratorConfig) -> Result<Self, TwiddleError> {
        let master = MasterTable::build(&config)?;
        Ok(Self { config, master })
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[inline]
    pub fn master(&self) -> &MasterTable {
        &self.master
    }

    /// ROM for an `len`-point transform at `width` bits.
    pub fn instantiate(
        &self,
        len: usize,
        width: u32,
        direction: Direction,
    ) -> Result<TwiddleRom, TwiddleError> {
        self.config.validate_request(len, width)?;
        let table = ReducedTable::from_master(&self.master, len, width, direction)?;
        Ok(TwiddleRom::new(table))
    }
}
