//! Launch gating and stall-request derivation.
//!
//! This module implements the hazard logic that ties the multi-cycle units
//! to the surrounding pipeline. It provides:
//! 1. **Launch candidates:** Stall-independent eligibility for starting a
//!    divide or multiply this cycle.
//! 2. **Issue gate:** Whether a candidate may actually launch.
//! 3. **Stall request:** The back-pressure output fed to the pipeline.
//!
//! The candidates are computed from register state and current inputs only —
//! never from the stall-request output. Deriving them from the gated launch
//! signals instead would close a combinational loop: the stall request is
//! itself a function of the candidates.

use crate::core::execute::signals::AluOp;

/// Stall-independent launch eligibility for the multi-cycle units.
///
/// At most one candidate can be set per cycle (the opcode selects it).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LaunchCandidates {
    /// A signed divide may start this cycle.
    pub div_signed: bool,
    /// An unsigned divide may start this cycle.
    pub div_unsigned: bool,
    /// A signed multiply may start this cycle.
    pub mul_signed: bool,
    /// An unsigned multiply may start this cycle.
    pub mul_unsigned: bool,
}

impl LaunchCandidates {
    /// Whether any unit is eligible to launch.
    pub const fn any(self) -> bool {
        self.div_signed || self.div_unsigned || self.mul_signed || self.mul_unsigned
    }
}

/// Computes the launch candidates for this cycle.
///
/// A divide is eligible when the divisor is nonzero (a zero divisor falls
/// through silently — the architectural result of dividing by zero is
/// unspecified) and the divider's activity mirror is clear. A multiply is
/// eligible when no stage of the multiplier is active. Units absent from
/// the configured hardware are never eligible.
pub const fn launch_candidates(
    op: AluOp,
    b_is_zero: bool,
    div_active: bool,
    mult_active: bool,
    div_enabled: bool,
    mult_enabled: bool,
) -> LaunchCandidates {
    let div_ready = !b_is_zero && !div_active && div_enabled;
    let mul_ready = !mult_active && mult_enabled;
    LaunchCandidates {
        div_signed: div_ready && matches!(op, AluOp::Div),
        div_unsigned: div_ready && matches!(op, AluOp::Divu),
        mul_signed: mul_ready && matches!(op, AluOp::Muls),
        mul_unsigned: mul_ready && matches!(op, AluOp::Mulu),
    }
}

/// Whether a new multi-cycle operation may be issued this cycle.
///
/// Issue is allowed when the external stall state is consistent with the
/// stall requested last cycle, or unconditionally during a flush.
pub const fn issue_allowed(stall: bool, request_stall: bool, flush: bool) -> bool {
    !(stall ^ request_stall) || flush
}

/// Derives the stall-request output.
///
/// The request is raised for the launch cycle itself, for every cycle the
/// divider is busy, and for every cycle the multiplier holds an operation
/// that has not yet reached the output stage — but only when the presented
/// opcode actually touches HILO. Candidates are used here, not the gated
/// launch signals (see the module docs).
pub const fn request_stall(
    candidates: LaunchCandidates,
    div_busy: bool,
    mult_active: bool,
    mult_ready: bool,
    op: AluOp,
) -> bool {
    (candidates.any() || div_busy || (mult_active ^ mult_ready)) && op.accesses_hilo()
}
