//! Functional unit tests.


/// Leading-one/zero counter tests.
pub mod cloz;



/// Barrel shifter tests.
pub mod shifter;
