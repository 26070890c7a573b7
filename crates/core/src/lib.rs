//! MIPS32 execution-core simulator library.
//!
//! This crate implements a cycle-accurate model of the integer execution core
//! of a pipelined MIPS32 processor with the following:
//! 1. **Execute unit:** ALU dispatch, hazard arbitration, and the shared HILO accumulator.
//! 2. **Functional units:** Multi-cycle divider, pipelined multiplier, leading-one/zero counter, barrel shifter.
//! 3. **Architectural state:** General-purpose register file and the HI/LO register pair.
//! 4. **Simulation:** Micro-op replay driver, configuration, and statistics collection.

/// Common types and helpers (32-bit word manipulation, error types).
pub mod common;
/// Simulator configuration (hardware-unit enables, defaults, JSON parsing).
pub mod config;
/// Execution core (execute unit, hazard logic, architectural registers, functional units).
pub mod core;
/// Micro-op replay driver for exercising the core cycle by cycle.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The execute stage; owns the divider, multiplier, and HILO accumulator.
pub use crate::core::execute::ExecuteUnit;
/// Micro-op replay driver; clocks an [`ExecuteUnit`] against a register file.
pub use crate::sim::Simulator;
