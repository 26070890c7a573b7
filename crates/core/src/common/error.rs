//! Error types for configuration and simulation.
//!
//! The execution core itself never fails: every anomaly (divide by zero,
//! signed-add overflow) is encoded as an output signal for the surrounding
//! pipeline to act on. Errors exist only at the crate's outer surfaces: the
//! configuration loader and the micro-op replay driver.

use thiserror::Error;

/// Errors produced while loading or validating a [`crate::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors produced by the micro-op replay driver.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// A stall request failed to clear within the watchdog limit.
    ///
    /// The longest legal stall is bounded by the divider (32 active cycles
    /// plus the commit cycle), so hitting the watchdog means the driven
    /// sequence violated a caller contract, such as re-pulsing a launch.
    #[error("stall did not clear within {limit} cycles at micro-op {step}")]
    StallTimeout {
        /// Index of the micro-op that was stalled.
        step: usize,
        /// Watchdog limit in cycles.
        limit: u32,
    },
}
