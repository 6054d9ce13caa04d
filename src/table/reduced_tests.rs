use super::*;
use crate::config::positive_full_scale;
use std::sync::OnceLock;

fn default_master() -> &'static MasterTable {
    static MASTER: OnceLock<MasterTable> = OnceLock::new();
    MASTER.get_or_init(|| MasterTable::build(&GeneratorConfig::default()).unwrap())
}

fn reduce(len: usize, width: u32, direction: Direction) -> ReducedTable {
    ReducedTable::from_master(default_master(), len, width, direction).unwrap()
}

#[test]
fn test_eight_point_table() {
    let table = reduce(8, 16, Direction::Forward);
    assert_eq!(table.len(), 8);
    assert_eq!(table.entries(), 2);
    assert_eq!(table.cos(), &[16383, 11585]);
    assert_eq!(table.sin(), &[0, -11585]);
    assert_eq!(table.twiddle(1), Complex::new(11585, -11585));
}

#[test]
fn test_eight_point_table_full_width() {
    let table = reduce(8, 64, Direction::Forward);
    assert_eq!(table.cos(), &[positive_full_scale(64), 3260954456333195553]);
    assert_eq!(table.sin(), &[0, -3260954456333195553]);

    let table = reduce(8, 32, Direction::Forward);
    assert_eq!(table.cos(), &[positive_full_scale(32), 759250125]);
}

#[test]
fn test_inverse_negates_sine_only() {
    let fwd = reduce(64, 20, Direction::Forward);
    let inv = reduce(64, 20, Direction::Inverse);
    assert_eq!(inv.direction(), Direction::Inverse);
    assert_eq!(fwd.cos(), inv.cos());
    for (f, i) in fwd.sin().iter().zip(inv.sin()) {
        assert_eq!(*f, -*i);
    }
}

#[test]
fn test_subsampling_stride() {
    let table = reduce(256, 64, Direction::Forward);
    let master = default_master();
    assert_eq!(table.entries(), 64);
    for i in 0..64 {
        assert_eq!(table.cos()[i], master.cos()[i * 16]);
        assert_eq!(table.sin()[i], master.sin()[i * 16]);
    }
}

#[test]
fn test_shared_angle_equality() {
    // 1/8 of a turn from three different lengths
    let a = reduce(8, 18, Direction::Forward);
    let b = reduce(16, 18, Direction::Forward);
    let c = reduce(4096, 18, Direction::Forward);
    assert_eq!(a.cos()[1], b.cos()[2]);
    assert_eq!(a.cos()[1], c.cos()[512]);
    assert_eq!(a.sin()[1], c.sin()[512]);
}

#[test]
fn test_first_entry_for_all_lengths() {
    let mut len = 4;
    while len <= 4096 {
        for width in [4u32, 16, 37, 64] {
            let table = reduce(len, width, Direction::Forward);
            assert_eq!(table.cos()[0], positive_full_scale(width));
            assert_eq!(table.sin()[0], 0);
        }
        len <<= 1;
    }
}

#[test]
fn test_range_bound() {
    for width in [4u32, 5, 9, 16, 31, 64] {
        let table = reduce(4096, width, Direction::Inverse);
        let limit = positive_full_scale(width);
        assert!(table.cos().iter().chain(table.sin()).all(|v| v.abs() <= limit));
    }
}

#[test]
fn test_rejects_invalid_requests() {
    let master = default_master();
    assert_eq!(
        ReducedTable::from_master(master, 12, 16, Direction::Forward),
        Err(TwiddleError::NotPowerOfTwo { len: 12 })
    );
    assert_eq!(
        ReducedTable::from_master(master, 8192, 16, Direction::Forward),
        Err(TwiddleError::LengthExceedsMax { len: 8192, max: 4096 })
    );
    assert_eq!(
        ReducedTable::from_master(master, 8, 65, Direction::Forward),
        Err(TwiddleError::WidthExceedsMaster { width: 65, master: 64 })
    );
    assert_eq!(
        ReducedTable::from_master(master, 8, 2, Direction::Forward),
        Err(TwiddleError::WidthTooSmall { width: 2, min: 4 })
    );
}
