//! Barrel shifter tests.

use mipsim_core::core::units::shifter::{ShiftDirection, Shifter};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn shift_by_zero_is_identity() {
    for data in [0_u32, 1, 0x8000_0000, 0xDEAD_BEEF] {
        assert_eq!(Shifter::shift(data, 0, ShiftDirection::Left, false), data);
        assert_eq!(Shifter::shift(data, 0, ShiftDirection::Right, false), data);
        assert_eq!(Shifter::shift(data, 0, ShiftDirection::Right, true), data);
    }
}

#[test]
fn boundary_amounts() {
    assert_eq!(Shifter::shift(1, 31, ShiftDirection::Left, false), 0x8000_0000);
    assert_eq!(Shifter::shift(0x8000_0000, 31, ShiftDirection::Right, false), 1);
    assert_eq!(
        Shifter::shift(0x8000_0000, 31, ShiftDirection::Right, true),
        0xFFFF_FFFF
    );
}

proptest! {
    #[test]
    fn left_matches_the_shift_operator(data: u32, amount in 0_u32..32) {
        prop_assert_eq!(
            Shifter::shift(data, amount, ShiftDirection::Left, false),
            data << amount
        );
        // Sign extension is a right-shift concept; left ignores it.
        prop_assert_eq!(
            Shifter::shift(data, amount, ShiftDirection::Left, true),
            data << amount
        );
    }

    #[test]
    fn right_logical_matches_the_shift_operator(data: u32, amount in 0_u32..32) {
        prop_assert_eq!(
            Shifter::shift(data, amount, ShiftDirection::Right, false),
            data >> amount
        );
    }

    #[test]
    fn right_arithmetic_matches_signed_shift(data: u32, amount in 0_u32..32) {
        prop_assert_eq!(
            Shifter::shift(data, amount, ShiftDirection::Right, true),
            ((data as i32) >> amount) as u32
        );
    }
}
