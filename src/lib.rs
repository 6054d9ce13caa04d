#![cfg_attr(not(feature = "std"), no_std)]

//! Fixed-point twiddle-factor ROM generation for hardware FFT pipelines.
//!
//! A [`TwiddleGenerator`] builds one maximal-precision quarter-cycle master
//! table from exact angle fractions, rounding half to even. Each
//! instantiation subsamples and re-rounds it into a [`TwiddleRom`], whose
//! [`AddressTranslator`] models the two-cycle lookup that folds a half-cycle
//! address onto the quarter table.
//!
//! ```
//! use twiddle_rom::{Direction, GeneratorConfig, TwiddleGenerator};
//!
//! let generator = TwiddleGenerator::new(GeneratorConfig::default()).unwrap();
//! let rom = generator.instantiate(8, 16, Direction::Forward).unwrap();
//! assert_eq!(rom.table().cos(), &[16383, 11585]);
//!
//! let out = rom.translator().lookup(2);
//! assert_eq!((out.cos, out.sin), (0, -16384));
//! ```

extern crate alloc;

pub mod common;
pub mod config;
pub mod fixed;
pub mod rom;
pub mod table;

pub use common::{Direction, RomEmitter, TwiddleError};
pub use config::GeneratorConfig;
pub use rom::{AddressTranslator, MemInitEmitter, TwiddleGenerator, TwiddleOutput, TwiddleRom};
pub use table::{MasterTable, ReducedTable};
