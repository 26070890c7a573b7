//! Configuration system for the execution-core simulator.
//!
//! This module defines the configuration structure used to parameterize the
//! core. It provides:
//! 1. **Defaults:** The full hardware configuration (all units present).
//! 2. **Generation switches:** Each optional functional unit can be omitted,
//!    matching the synthesis-time parameters of the modeled hardware.
//!
//! Configuration is supplied via JSON with [`Config::from_json`], or use
//! `Config::default()` for the full core.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants.
mod defaults {
    /// The hardware multiplier is generated by default.
    pub const ENABLE_HW_MULT: bool = true;

    /// The hardware divider is generated by default.
    pub const ENABLE_HW_DIV: bool = true;

    /// The leading-one/zero counter is generated by default.
    pub const ENABLE_HW_CLOZ: bool = true;
}

/// Execution-core configuration.
///
/// Each switch corresponds to a synthesis-time parameter of the modeled
/// hardware: a disabled unit is simply absent from the datapath. Opcodes
/// targeting an absent unit fall through the result multiplexer to 0,
/// never launch, and never request a stall.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Generate the 4-stage pipelined hardware multiplier.
    #[serde(default = "Config::default_enable_hw_mult")]
    pub enable_hw_mult: bool,
    /// Generate the multi-cycle hardware divider.
    #[serde(default = "Config::default_enable_hw_div")]
    pub enable_hw_div: bool,
    /// Generate the leading-one/zero counter.
    #[serde(default = "Config::default_enable_hw_cloz")]
    pub enable_hw_cloz: bool,
}

impl Config {
    fn default_enable_hw_mult() -> bool {
        defaults::ENABLE_HW_MULT
    }

    fn default_enable_hw_div() -> bool {
        defaults::ENABLE_HW_DIV
    }

    fn default_enable_hw_cloz() -> bool {
        defaults::ENABLE_HW_CLOZ
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults, so `{}` yields the full core.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_hw_mult: defaults::ENABLE_HW_MULT,
            enable_hw_div: defaults::ENABLE_HW_DIV,
            enable_hw_cloz: defaults::ENABLE_HW_CLOZ,
        }
    }
}
