//! # Unit Tests
//!
//! Per-module tests for the execution core:
//! - configuration parsing and defaults,
//! - architectural registers,
//! - the functional units,
//! - cycle-accurate execute-stage scenarios,
//! - the micro-op replay driver and statistics.


/// Core component tests (arch, units, execute stage).
pub mod core;
