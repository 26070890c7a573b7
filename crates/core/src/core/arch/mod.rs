//! Architectural register state.
//!
//! 1. **GPR:** The 32-entry general-purpose register file.
//! 2. **HILO:** The 64-bit multiply/divide accumulator pair.

/// General-purpose register file.
pub mod gpr;
/// HI/LO accumulator register pair.
pub mod hilo;

pub use gpr::Gpr;
pub use hilo::HiLo;
