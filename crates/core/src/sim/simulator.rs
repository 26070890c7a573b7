//! Simulator: owns the execute unit and the register file side-by-side.
//!
//! Models the surrounding pipeline's contract with the execute stage: the
//! operands for the current micro-op are presented every cycle until the
//! stall request clears, then the result is written back and the stream
//! advances. Divides therefore occupy the stage for 33 cycles and multiplies
//! for 4, exactly as the hardware would back-pressure dependents.

use tracing::trace;

use crate::common::SimError;
use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::execute::{AluOp, ExInputs, ExecuteUnit};

/// Cycles a single micro-op may stall before the driver gives up.
///
/// The divider bounds every legal stall at 33 cycles (32 active plus the
/// commit window), so the watchdog only fires on contract violations.
const STALL_WATCHDOG: u32 = 64;

/// One pre-decoded micro-op.
///
/// Fetch and decode are out of scope; a micro-op carries exactly what the
/// decoded instruction would deliver to the execute stage.
#[derive(Clone, Copy, Debug)]
pub struct MicroOp {
    /// Execute-stage operation.
    pub op: AluOp,
    /// Source register for operand port A.
    pub rs: usize,
    /// Source register for operand port B.
    pub rt: usize,
    /// Destination register for the ALU result.
    pub rd: usize,
    /// Write the ALU result back to `rd` when the op completes.
    pub write_result: bool,
}

impl MicroOp {
    /// A micro-op that writes its result to `rd`.
    pub const fn writing(op: AluOp, rs: usize, rt: usize, rd: usize) -> Self {
        Self {
            op,
            rs,
            rt,
            rd,
            write_result: true,
        }
    }

    /// A micro-op with no register writeback (HILO-only effects).
    pub const fn silent(op: AluOp, rs: usize, rt: usize) -> Self {
        Self {
            op,
            rs,
            rt,
            rd: 0,
            write_result: false,
        }
    }
}

/// Top-level driver: execute unit plus architectural registers.
#[derive(Debug, Default)]
pub struct Simulator {
    /// The execute stage under test.
    pub unit: ExecuteUnit,
    /// General-purpose registers feeding the operand ports.
    pub gpr: Gpr,
}

impl Simulator {
    /// Creates a simulator around a fresh execute unit.
    pub fn new(config: Config) -> Self {
        Self {
            unit: ExecuteUnit::new(config),
            gpr: Gpr::new(),
        }
    }

    /// Runs one micro-op to completion.
    ///
    /// Presents the micro-op every cycle until the stall request clears,
    /// then performs the writeback.
    ///
    /// # Errors
    ///
    /// [`SimError::StallTimeout`] if the stall request fails to clear within
    /// the watchdog limit (a caller-contract violation, not a legal state).
    pub fn step(&mut self, step: usize, uop: MicroOp) -> Result<(), SimError> {
        let port_a = self.gpr.read(uop.rs);
        let port_b = self.gpr.read(uop.rt);

        for _ in 0..STALL_WATCHDOG {
            // The hazard unit echoes the stage's own stall request back
            // combinationally, so the external stall state is always
            // consistent with what the stage asked for.
            let stall = self.unit.stall_request(uop.op, port_b);
            let inputs = ExInputs {
                port_a,
                port_b,
                op: uop.op,
                stall,
                flush: false,
                reset: false,
            };
            let outputs = self.unit.tick(&inputs);
            if !outputs.request_stall {
                if uop.write_result {
                    self.gpr.write(uop.rd, outputs.result);
                }
                self.record(uop.op);
                trace!(step, op = ?uop.op, result = outputs.result, "micro-op retired");
                return Ok(());
            }
        }
        Err(SimError::StallTimeout {
            step,
            limit: STALL_WATCHDOG,
        })
    }

    /// Replays a micro-op stream to completion.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SimError`] raised by [`step`](Self::step).
    pub fn run(&mut self, program: &[MicroOp]) -> Result<(), SimError> {
        for (step, uop) in program.iter().enumerate() {
            self.step(step, *uop)?;
        }
        Ok(())
    }

    fn record(&mut self, op: AluOp) {
        let stats = &mut self.unit.stats;
        stats.retired += 1;
        match op {
            AluOp::Sll | AluOp::Sra | AluOp::Srl => stats.ops_shift += 1,
            AluOp::Clo | AluOp::Clz => stats.ops_count += 1,
            AluOp::Muls | AluOp::Mulu | AluOp::Madd | AluOp::Maddu | AluOp::Msub | AluOp::Msubu => {
                stats.ops_mult += 1;
            }
            AluOp::Div | AluOp::Divu => stats.ops_div += 1,
            AluOp::Mfhi | AluOp::Mflo | AluOp::Mthi | AluOp::Mtlo => stats.ops_hilo_move += 1,
            _ => stats.ops_alu += 1,
        }
    }
}
