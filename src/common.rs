// src/common.rs

use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TwiddleError {
    NotPowerOfTwo { len: usize },
    LengthTooSmall { len: usize, min: usize },
    LengthExceedsMax { len: usize, max: usize },
    WidthTooSmall { width: u32, min: u32 },
    WidthExceedsMaster { width: u32, master: u32 },
    MasterWidthTooLarge { width: u32, max: u32 },
    /// The trig enclosure for table entry `index` straddles a rounding boundary.
    ArithmeticPrecision { index: usize },
}

impl TwiddleError {
    /// True for errors caused by the requested parameters rather than by evaluation.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, TwiddleError::ArithmeticPrecision { .. })
    }
}

impl fmt::Display for TwiddleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwiddleError::NotPowerOfTwo { len } => {
                write!(f, "Transform length {} is not a power of 2", len)
            }
            TwiddleError::LengthTooSmall { len, min } => {
                write!(f, "Transform length {} is below the minimum of {}", len, min)
            }
            TwiddleError::LengthExceedsMax { len, max } => {
                write!(f, "Transform length {} exceeds the maximum of {}", len, max)
            }
            TwiddleError::WidthTooSmall { width, min } => {
                write!(f, "Width of {} bits is below the minimum of {}", width, min)
            }
            TwiddleError::WidthExceedsMaster { width, master } => {
                write!(f, "Output width {} exceeds the master width {}", width, master)
            }
            TwiddleError::MasterWidthTooLarge { width, max } => {
                write!(f, "Master width {} exceeds the supported maximum of {}", width, max)
            }
            TwiddleError::ArithmeticPrecision { index } => write!(
                f,
                "Insufficient precision to round table entry {} reliably",
                index
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TwiddleError {}

/// Transform direction. The inverse transform uses the conjugate twiddles.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

impl Direction {
    #[inline]
    pub fn is_inverse(self) -> bool {
        self == Direction::Inverse
    }
}

/// Serializes a generated ROM into some output format.
///
/// The numeric core never depends on an implementation of this trait.
pub trait RomEmitter {
    type Output;

    fn emit(&self, rom: &crate::rom::TwiddleRom) -> Self::Output;
}
