//! Functional units of the execute stage.
//!
//! One submodule per hardware unit:
//! - [`alu`]:        single-cycle opcode dispatch and result multiplexer
//! - [`cloz`]:       leading-one/zero counter
//! - [`shifter`]:    combinational barrel shifter
//! - [`divider`]:    32-cycle restoring-division state machine
//! - [`multiplier`]: 4-stage pipelined 32×32→64 multiplier

/// Single-cycle ALU dispatch and overflow detection.
pub mod alu;
/// Leading-one/zero counter.
pub mod cloz;
/// Multi-cycle restoring divider.
pub mod divider;
/// Pipelined hardware multiplier.
pub mod multiplier;
/// Combinational barrel shifter.
pub mod shifter;
