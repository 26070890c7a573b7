//! Leading-one/zero counter tests.

use mipsim_core::core::units::cloz::{count_leading_ones, count_leading_zeros};
use pretty_assertions::assert_eq;

#[test]
fn clz_vectors() {
    assert_eq!(count_leading_zeros(0x0000_0000), 32);
    assert_eq!(count_leading_zeros(0x0000_0001), 31);
    assert_eq!(count_leading_zeros(0xFFFF_FFFF), 0);
}

#[test]
fn clo_vectors() {
    assert_eq!(count_leading_ones(0xFFFF_FFFF), 32);
    assert_eq!(count_leading_ones(0xFFFF_FFFE), 31);
    assert_eq!(count_leading_ones(0x0000_0000), 0);
}

/// A word with exactly `n` leading zeros for every position of the first
/// one bit.
#[test]
fn clz_every_bit_position() {
    for n in 0..32 {
        let word = 1_u32 << (31 - n);
        assert_eq!(count_leading_zeros(word), n, "first one at bit {}", 31 - n);
    }
}

/// The complement symmetry the two scans share.
#[test]
fn clo_is_clz_of_complement() {
    for word in [0_u32, 1, 0x8000_0000, 0xFFFF_0000, 0x7FFF_FFFF, 0xDEAD_BEEF] {
        assert_eq!(count_leading_ones(word), count_leading_zeros(!word));
    }
}
