// src/rom/emit.rs

use alloc::string::String;
use core::fmt::{self, Write};

use super::TwiddleRom;
use crate::common::RomEmitter;

/// Memory-initialisation images: one hex word per line, cosine and sine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemImage {
    pub cos: String,
    pub sin: String,
}

/// Writes each table column as two's-complement hex words of the output
/// width, the layout `$readmemh`-style loaders expect.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemInitEmitter;

impl RomEmitter for MemInitEmitter {
    type Output = Result<MemImage, fmt::Error>;

    fn emit(&self, rom: &TwiddleRom) -> Self::Output {
        let width = rom.table().width();
        Ok(MemImage {
            cos: hex_column(rom.table().cos(), width)?,
            sin: hex_column(rom.table().sin(), width)?,
        })
    }
}

fn hex_column(samples: &[i64], width: u32) -> Result<String, fmt::Error> {
    let digits = width.div_ceil(4) as usize;
    let mut out = String::with_capacity(samples.len() * (digits + 1));
    for &sample in samples {
        writeln!(out, "{:0digits$x}", to_word(sample, width))?;
    }
    Ok(out)
}

/// Low `width` bits of `value`, two's complement.
#[inline]
pub fn to_word(value: i64, width: u32) -> u64 {
    if width >= 64 {
        value as u64
    } else {
        (value as u64) & ((1u64 << width) - 1)
    }
}

/// Reads a `width`-bit two's-complement word back as a signed sample.
#[inline]
pub fn sign_extend(word: u64, width: u32) -> i64 {
    let unused = 64 - width;
    ((word << unused) as i64) >> unused
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Direction;
    use crate::config::GeneratorConfig;
    use crate::rom::TwiddleGenerator;

    #[test]
    fn test_word_round_trip_edges() {
        for width in [4u32, 13, 64] {
            let max = (1i64 << (width - 2)) - 1;
            for v in [0, 1, -1, max, -max, -(1i64 << (width - 2))] {
                assert_eq!(sign_extend(to_word(v, width), width), v, "width {} value {}", width, v);
            }
        }
        assert_eq!(to_word(-1, 12), 0xfff);
        assert_eq!(sign_extend(0x800, 12), -2048);
    }

    #[test]
    fn test_eight_point_image() {
        let generator = TwiddleGenerator::new(GeneratorConfig::default()).unwrap();
        let rom = generator.instantiate(8, 16, Direction::Forward).unwrap();
        let image = rom.emit(&MemInitEmitter).unwrap();
        // 16383, 11585 / 0, -11585
        assert_eq!(image.cos, "3fff\n2d41\n");
        assert_eq!(image.sin, "0000\nd2bf\n");
    }

    #[test]
    fn test_odd_width_pads_to_whole_digits() {
        let generator = TwiddleGenerator::new(GeneratorConfig::new(16, 10).unwrap()).unwrap();
        let rom = generator.instantiate(16, 10, Direction::Inverse).unwrap();
        let image = rom.emit(&MemInitEmitter).unwrap();
        assert_eq!(image.cos.lines().count(), 4);
        assert!(image.sin.lines().all(|l| l.len() == 3));
        let decoded: Vec<i64> = image
            .sin
            .lines()
            .map(|l| sign_extend(u64::from_str_radix(l, 16).unwrap(), 10))
            .collect();
        assert_eq!(decoded.as_slice(), rom.table().sin());
    }
}
