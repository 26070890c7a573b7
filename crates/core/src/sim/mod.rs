//! Micro-op replay driver.
//!
//! The execution core is driven one cycle at a time by the surrounding
//! pipeline; this module provides a minimal stand-in for that pipeline so
//! the core can be exercised (and measured) without a fetch/decode front
//! end. Streams of pre-decoded micro-ops are replayed against an
//! [`crate::ExecuteUnit`] and a register file, honoring the stall contract.

/// The replay driver and its micro-op type.
pub mod simulator;

pub use simulator::{MicroOp, Simulator};
