use super::*;
use crate::common::Direction;
use crate::config::{GeneratorConfig, negative_full_scale, positive_full_scale};
use crate::fixed::angle::{Precision, TurnFraction, twiddle_enclosure};
use crate::fixed::rounding::{reround, saturate};
use crate::rom::TwiddleGenerator;
use std::sync::OnceLock;

const MASTER_WIDTH: u32 = 40;

fn generator() -> &'static TwiddleGenerator {
    static GENERATOR: OnceLock<TwiddleGenerator> = OnceLock::new();
    GENERATOR.get_or_init(|| {
        TwiddleGenerator::new(GeneratorConfig::new(1024, MASTER_WIDTH).unwrap()).unwrap()
    })
}

fn lengths() -> impl Iterator<Item = usize> {
    (2..=10).map(|bits| 1usize << bits)
}

/// Independently rounded twiddle for `addr` of a `len`-point transform.
fn reference(addr: usize, len: usize, width: u32, direction: Direction) -> (i64, i64) {
    let turn = TurnFraction::reduce(addr as u64, len as u64);
    let (cos, sin) = twiddle_enclosure(turn, Precision::Wide);
    let scale = MASTER_WIDTH - 2;
    let c = saturate(cos.round_convergent(scale).unwrap(), MASTER_WIDTH);
    let s = saturate(sin.round_convergent(scale).unwrap(), MASTER_WIDTH);
    let s = if direction.is_inverse() { -s } else { s };
    let narrow = |v: i64| saturate(reround(v, MASTER_WIDTH, width) as i128, width);
    (narrow(c), narrow(s))
}

#[test]
fn test_eight_point_sequence() {
    let rom = generator().instantiate(8, 16, Direction::Forward).unwrap();
    let t = rom.translator();
    assert_eq!(t.lookup(0), TwiddleOutput { cos: 16383, sin: 0, sum: 16383 });
    assert_eq!(t.lookup(1), TwiddleOutput { cos: 11585, sin: -11585, sum: 0 });
    assert_eq!(t.lookup(2), TwiddleOutput { cos: 0, sin: -16384, sum: -16384 });
    assert_eq!(t.lookup(3), TwiddleOutput { cos: -11585, sin: -11585, sum: -23170 });
}

#[test]
fn test_two_cycle_latency() {
    let rom = generator().instantiate(32, 12, Direction::Forward).unwrap();
    let mut t = rom.translator();
    assert_eq!(t.latency(), 2);

    let addrs = [3usize, 9, 8, 15, 0, 12];
    assert_eq!(t.clock(addrs[0]), None);
    assert_eq!(t.output(), None);
    for i in 1..addrs.len() {
        let out = t.clock(addrs[i]);
        assert_eq!(out, Some(t.lookup(addrs[i - 1])), "cycle {}", i);
        assert_eq!(t.output(), out);
    }
}

#[test]
fn test_boundary_every_length() {
    for len in lengths() {
        for direction in [Direction::Forward, Direction::Inverse] {
            let width = 18;
            let rom = generator().instantiate(len, width, direction).unwrap();
            let out = rom.translator().lookup(len / 4);
            let expected_sin = match direction {
                Direction::Forward => negative_full_scale(width),
                Direction::Inverse => positive_full_scale(width),
            };
            assert_eq!(out.cos, 0, "len {}", len);
            assert_eq!(out.sin, expected_sin, "len {} {:?}", len, direction);
        }
    }
}

#[test]
fn test_fold_negates_cosine_and_keeps_sine() {
    for len in lengths() {
        let rom = generator().instantiate(len, 24, Direction::Forward).unwrap();
        let t = rom.translator();
        let quarter = len / 4;
        for j in 1..quarter {
            let unfolded = t.lookup(quarter - j);
            let folded = t.lookup(quarter + j);
            assert_eq!(folded.cos, -unfolded.cos, "len {} j {}", len, j);
            assert_eq!(folded.sin, unfolded.sin, "len {} j {}", len, j);
        }
    }
}

#[test]
fn test_half_cycle_matches_direct_rounding() {
    for len in [4usize, 16, 128, 1024] {
        for direction in [Direction::Forward, Direction::Inverse] {
            for width in [6u32, 17, 40] {
                let rom = generator().instantiate(len, width, direction).unwrap();
                let t = rom.translator();
                for addr in (0..len / 2).filter(|&a| a != len / 4) {
                    let out = t.lookup(addr);
                    let (c, s) = reference(addr, len, width, direction);
                    let context = (len, width, addr);
                    assert_eq!((out.cos, out.sin), (c, s), "(len, width, addr) = {:?}", context);
                    assert_eq!(out.sum, c + s);
                }
            }
        }
    }
}

#[test]
fn test_address_is_masked_to_port_width() {
    let rom = generator().instantiate(16, 10, Direction::Forward).unwrap();
    let t = rom.translator();
    assert_eq!(rom.ports().address_width, 3);
    assert_eq!(t.lookup(8 + 5), t.lookup(5));
    assert_eq!(t.lookup(64 + 4), t.lookup(4));
}

#[test]
fn test_four_point_transform() {
    let rom = generator().instantiate(4, 8, Direction::Inverse).unwrap();
    let t = rom.translator();
    assert_eq!(t.lookup(0).as_complex(), Complex::new(63, 0));
    assert_eq!(t.lookup(1).as_complex(), Complex::new(0, 63));
}
