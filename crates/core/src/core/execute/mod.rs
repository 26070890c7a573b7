//! Execute unit: ALU dispatch, hazard arbitration, and the HILO accumulator.
//!
//! This module implements the execute stage around one explicit state
//! object. It performs the following:
//! 1. **Combinational phase:** ALU dispatch, launch candidates, issue gate,
//!    and the stall request, all from previous-edge register state and the
//!    current inputs.
//! 2. **Commit phase:** HILO update (one writer per edge, fixed priority),
//!    divider activity mirror, and the clock edges of the divider and
//!    multiplier pipelines.

/// Launch gating and stall-request derivation.
pub mod hazards;
/// Operation encoding and port signal types.
pub mod signals;

use tracing::{debug, trace};

use crate::config::Config;
use crate::core::arch::HiLo;
use crate::core::units::alu::Alu;
use crate::core::units::divider::{DivLaunch, Divider};
use crate::core::units::multiplier::{MultIssue, Multiplier};
use crate::stats::SimStats;

pub use signals::{AluOp, ExInputs, ExOutputs};

/// The execute stage of the pipeline.
///
/// Owns all clocked state of the stage: the HILO accumulator, the divider
/// and multiplier, and the registered mirror of the divider's activity.
/// One call to [`tick`](Self::tick) models one clock cycle: the outputs are
/// the combinational values visible during the cycle, and the internal
/// registers advance to their post-edge values.
#[derive(Debug)]
pub struct ExecuteUnit {
    config: Config,
    hilo: HiLo,
    divider: Divider,
    multiplier: Multiplier,
    /// Registered mirror of the divider FSM. It trails the divider's busy
    /// deassert by one cycle; that trailing cycle is the HILO commit window
    /// for the finished quotient/remainder.
    div_active: bool,
    /// Activity statistics, updated as the unit runs.
    pub stats: SimStats,
}

impl Default for ExecuteUnit {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl ExecuteUnit {
    /// Creates an execute unit with the given hardware configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            hilo: HiLo::default(),
            divider: Divider::new(),
            multiplier: Multiplier::new(),
            div_active: false,
            stats: SimStats::default(),
        }
    }

    /// The current HILO accumulator value.
    pub const fn hilo(&self) -> HiLo {
        self.hilo
    }

    /// Clears all clocked state: HILO, divider, multiplier, and the
    /// activity mirror. Equivalent to asserting the reset input.
    pub fn reset(&mut self) {
        self.hilo = HiLo::default();
        self.divider.reset();
        self.multiplier.reset();
        self.div_active = false;
    }

    /// The stall request the hazard unit would observe this cycle for the
    /// given opcode and operand B, without advancing any state.
    ///
    /// The surrounding pipeline reads this combinationally and feeds the
    /// resulting stage stall straight back into the same cycle's `stall`
    /// input; drivers use this probe to close that loop.
    pub fn stall_request(&self, op: AluOp, b: u32) -> bool {
        let (_, request_stall) = self.hazard_signals(op, b == 0);
        request_stall
    }

    /// Launch candidates and stall request for this cycle, from register
    /// state and the current opcode/zero-divisor flag only.
    fn hazard_signals(&self, op: AluOp, b_is_zero: bool) -> (hazards::LaunchCandidates, bool) {
        let candidates = hazards::launch_candidates(
            op,
            b_is_zero,
            self.div_active,
            self.multiplier.is_active(),
            self.config.enable_hw_div,
            self.config.enable_hw_mult,
        );
        let request_stall = hazards::request_stall(
            candidates,
            self.divider.busy(),
            self.multiplier.is_active(),
            self.multiplier.ready(),
            op,
        );
        (candidates, request_stall)
    }

    /// Advances the execute stage by one clock cycle.
    ///
    /// # Arguments
    ///
    /// * `inputs` - The operand/opcode/control values driven this cycle.
    ///
    /// # Returns
    ///
    /// The combinational outputs visible during this cycle: the ALU result,
    /// the zero-divisor and overflow flags, and the stall request.
    pub fn tick(&mut self, inputs: &ExInputs) -> ExOutputs {
        let ExInputs {
            port_a: a,
            port_b: b,
            op,
            stall,
            flush,
            reset,
        } = *inputs;

        // Combinational phase. Everything here reads only previous-edge
        // register state and the current inputs.
        let mut alu = Alu::execute(op, a, b, self.hilo.hi(), self.hilo.lo());
        if !self.config.enable_hw_cloz && matches!(op, AluOp::Clo | AluOp::Clz) {
            alu.result = 0;
        }

        let (candidates, request_stall) = self.hazard_signals(op, alu.b_is_zero);
        let div_busy = self.divider.busy();
        let mult_ready = self.multiplier.ready();
        let allowed = hazards::issue_allowed(stall, request_stall, flush);
        let mult_stall = stall ^ request_stall;

        let launch_div = if candidates.div_signed && allowed {
            Some(DivLaunch::Signed)
        } else if candidates.div_unsigned && allowed {
            Some(DivLaunch::Unsigned)
        } else {
            None
        };
        let mult_issue = MultIssue {
            a,
            b,
            signed: op == AluOp::Muls,
            enable: (candidates.mul_signed || candidates.mul_unsigned) && allowed,
        };

        // Snapshot the unit outputs consumed by the HILO commit before any
        // register advances.
        let div_done = self.div_active && !div_busy;
        let quotient = self.divider.quotient();
        let remainder = self.divider.remainder();
        let product = self.multiplier.result();

        self.stats.cycles += 1;
        if request_stall {
            self.stats.stall_cycles += 1;
        }
        if alu.overflow {
            self.stats.overflows += 1;
        }

        // Commit phase: every register updates from the values above.
        if reset {
            self.reset();
        } else {
            // HILO commit, strict priority: divider completion, then
            // multiplier output, then explicit moves. At most one write.
            if div_done {
                self.hilo = HiLo::from_parts(remainder, quotient);
                self.stats.hilo_commits += 1;
                debug!(hi = remainder, lo = quotient, "HILO commit from divider");
            } else if mult_ready {
                let committed = match op {
                    AluOp::Muls | AluOp::Mulu => {
                        self.hilo.set(product);
                        true
                    }
                    AluOp::Madd | AluOp::Maddu => {
                        self.hilo.accumulate_add(product);
                        true
                    }
                    AluOp::Msub | AluOp::Msubu => {
                        self.hilo.accumulate_sub(product);
                        true
                    }
                    _ => false,
                };
                if committed {
                    self.stats.hilo_commits += 1;
                    debug!(hilo = self.hilo.raw(), "HILO commit from multiplier");
                }
            } else if allowed {
                let committed = match op {
                    AluOp::Mthi => {
                        self.hilo = HiLo::from_parts(a, self.hilo.lo());
                        true
                    }
                    AluOp::Mtlo => {
                        self.hilo = HiLo::from_parts(self.hilo.hi(), a);
                        true
                    }
                    _ => false,
                };
                if committed {
                    self.stats.hilo_commits += 1;
                    trace!(hilo = self.hilo.raw(), "HILO commit from move");
                }
            }

            self.div_active = if self.div_active {
                div_busy
            } else {
                launch_div.is_some()
            };

            if launch_div.is_some() {
                self.stats.div_launches += 1;
            }
            if mult_issue.enable {
                self.stats.mult_launches += 1;
            }
            self.divider.tick(launch_div, a, b);
            self.multiplier.tick(mult_issue, mult_stall, flush);
        }

        ExOutputs {
            result: alu.result,
            b_is_zero: alu.b_is_zero,
            overflow: alu.overflow,
            request_stall,
        }
    }
}
