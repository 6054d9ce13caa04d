// src/config.rs

use crate::common::TwiddleError;

/// Smallest transform length: one quarter-cycle entry plus the boundary point.
pub const MIN_LEN: usize = 4;

/// Largest supported `max_len`. Keeps every turn fraction well inside `u64`.
pub const MAX_LEN_LIMIT: usize = 1 << 24;

/// Smallest usable sample width. Full scale at 4 bits is 3.
pub const MIN_WIDTH: u32 = 4;

/// Samples are held in `i64`.
pub const MAX_MASTER_WIDTH: u32 = 64;

/// Generation-time parameters shared by every table derived from one master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    max_len: usize,
    master_width: u32,
}

impl GeneratorConfig {
    pub fn new(max_len: usize, master_width: u32) -> Result<Self, TwiddleError> {
        check_len(max_len, MAX_LEN_LIMIT)?;
        if master_width < MIN_WIDTH {
            return Err(TwiddleError::WidthTooSmall { width: master_width, min: MIN_WIDTH });
        }
        if master_width > MAX_MASTER_WIDTH {
            return Err(TwiddleError::MasterWidthTooLarge {
                width: master_width,
                max: MAX_MASTER_WIDTH,
            });
        }
        Ok(Self { max_len, master_width })
    }

    #[inline]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    #[inline]
    pub fn master_width(&self) -> u32 {
        self.master_width
    }

    /// Checks a per-instantiation `(len, width)` request against this configuration.
    pub fn validate_request(&self, len: usize, width: u32) -> Result<(), TwiddleError> {
        check_len(len, self.max_len)?;
        if width < MIN_WIDTH {
            return Err(TwiddleError::WidthTooSmall { width, min: MIN_WIDTH });
        }
        if width > self.master_width {
            return Err(TwiddleError::WidthExceedsMaster { width, master: self.master_width });
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    /// 4096-point transforms at 64 bits.
    fn default() -> Self {
        Self { max_len: 4096, master_width: 64 }
    }
}

fn check_len(len: usize, max: usize) -> Result<(), TwiddleError> {
    if !len.is_power_of_two() {
        return Err(TwiddleError::NotPowerOfTwo { len });
    }
    if len < MIN_LEN {
        return Err(TwiddleError::LengthTooSmall { len, min: MIN_LEN });
    }
    if len > max {
        return Err(TwiddleError::LengthExceedsMax { len, max });
    }
    Ok(())
}

/// Largest positive sample at `width` bits: `2^(width-2) - 1`.
#[inline]
pub fn positive_full_scale(width: u32) -> i64 {
    (1i64 << (width - 2)) - 1
}

/// Most negative sample at `width` bits: `-2^(width-2)`.
#[inline]
pub fn negative_full_scale(width: u32) -> i64 {
    -(1i64 << (width - 2))
}
