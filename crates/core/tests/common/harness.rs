//! Clocked harness around the execute unit.
//!
//! Drives the unit the way the surrounding pipeline does: the micro-op's
//! operands are presented every cycle, and the hazard unit's combinational
//! echo of the stall request is modeled by probing `stall_request` before
//! each tick. Raw ticks are available for tests that need to drive the
//! stall/flush/reset inputs directly.

use mipsim_core::Config;
use mipsim_core::core::execute::{AluOp, ExInputs, ExOutputs, ExecuteUnit};

/// Upper bound on presentation loops; generous multiple of the divider's
/// 33-cycle occupancy.
pub const MAX_OCCUPANCY: u32 = 64;

/// Execute-unit harness with pipeline-accurate stall echo.
pub struct ExHarness {
    /// The unit under test.
    pub unit: ExecuteUnit,
}

impl Default for ExHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl ExHarness {
    /// Harness around a full-featured core.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Harness around a core with the given hardware configuration.
    pub fn with_config(config: Config) -> Self {
        super::init_tracing();
        Self {
            unit: ExecuteUnit::new(config),
        }
    }

    /// One cycle with the stall request echoed into the stall input.
    pub fn drive(&mut self, op: AluOp, a: u32, b: u32) -> ExOutputs {
        let stall = self.unit.stall_request(op, b);
        self.unit.tick(&ExInputs {
            port_a: a,
            port_b: b,
            op,
            stall,
            flush: false,
            reset: false,
        })
    }

    /// Presents the operation every cycle until the stall request clears.
    ///
    /// Returns the completing cycle's outputs and the total number of
    /// cycles the operation occupied the stage.
    ///
    /// # Panics
    ///
    /// Panics if the stall fails to clear within [`MAX_OCCUPANCY`] cycles.
    pub fn drive_until_clear(&mut self, op: AluOp, a: u32, b: u32) -> (ExOutputs, u32) {
        for cycle in 1..=MAX_OCCUPANCY {
            let outputs = self.drive(op, a, b);
            if !outputs.request_stall {
                return (outputs, cycle);
            }
        }
        panic!("{op:?} still stalled after {MAX_OCCUPANCY} cycles");
    }

    /// One idle cycle (ADDU $0, $0).
    pub fn idle(&mut self) -> ExOutputs {
        self.drive(AluOp::Addu, 0, 0)
    }

    /// One cycle with fully caller-controlled inputs.
    pub fn tick_raw(&mut self, inputs: &ExInputs) -> ExOutputs {
        self.unit.tick(inputs)
    }
}
