//! Single-cycle ALU: opcode dispatch, overflow detection, result multiplexer.
//!
//! This unit is pure and total over all 32-bit inputs: every opcode produces
//! a result in the same cycle (multiply/divide opcodes resolve through the
//! HILO accumulator instead and multiplex to 0 here). It also reports the
//! two flags the surrounding logic consumes: the zero-divisor flag that
//! gates divider launches, and the signed-add overflow flag.

use crate::common::word::sign_bit;
use crate::core::execute::signals::AluOp;
use crate::core::units::cloz;
use crate::core::units::shifter::{ShiftDirection, Shifter};

/// Combinational outputs of the ALU for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluResult {
    /// Multiplexed result.
    pub result: u32,
    /// Signed-add overflow flag.
    pub overflow: bool,
    /// Operand B is zero.
    pub b_is_zero: bool,
}

/// Arithmetic Logic Unit for the execute stage.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes one ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - Operand port A.
    /// * `b`  - Operand port B. The shift datapath takes both its input data
    ///   and its shift amount (low 5 bits) from this port.
    /// * `hi` - Current HI half of the accumulator (for `Mfhi`).
    /// * `lo` - Current LO half of the accumulator (for `Mflo`).
    ///
    /// # Returns
    ///
    /// The multiplexed result plus the overflow and zero-divisor flags.
    /// Opcodes with no single-cycle datapath (multiply, divide, moves to
    /// HILO) produce 0.
    ///
    /// Overflow is defined for `Add` only: it is asserted when the operand
    /// signs match and the result sign differs. `Sub` overflow is not
    /// computed by the modeled hardware and is reported as false.
    pub fn execute(op: AluOp, a: u32, b: u32, hi: u32, lo: u32) -> AluResult {
        // One shared adder: add for the ADD forms, subtract for everything
        // else that reaches it.
        let add_sub = match op {
            AluOp::Add | AluOp::Addu => a.wrapping_add(b),
            _ => a.wrapping_sub(b),
        };

        let result = match op {
            AluOp::Add | AluOp::Addu | AluOp::Sub | AluOp::Subu => add_sub,
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Xor => a ^ b,
            AluOp::Nor => !(a | b),
            AluOp::Sll => Shifter::shift(b, b & 0x1f, ShiftDirection::Left, false),
            AluOp::Srl => Shifter::shift(b, b & 0x1f, ShiftDirection::Right, false),
            AluOp::Sra => Shifter::shift(b, b & 0x1f, ShiftDirection::Right, true),
            AluOp::Clo => cloz::count_leading_ones(a),
            AluOp::Clz => cloz::count_leading_zeros(a),
            AluOp::Slt => u32::from((a as i32) < (b as i32)),
            AluOp::Sltu => u32::from(a < b),
            AluOp::Mfhi => hi,
            AluOp::Mflo => lo,
            AluOp::PassA => a,
            AluOp::PassB => b,
            // Multi-cycle and HILO-write opcodes have no result here.
            AluOp::Muls
            | AluOp::Mulu
            | AluOp::Div
            | AluOp::Divu
            | AluOp::Madd
            | AluOp::Maddu
            | AluOp::Msub
            | AluOp::Msubu
            | AluOp::Mthi
            | AluOp::Mtlo => 0,
        };

        let overflow =
            op == AluOp::Add && !(sign_bit(a) ^ sign_bit(b)) && (sign_bit(a) ^ sign_bit(add_sub));

        AluResult {
            result,
            overflow,
            b_is_zero: b == 0,
        }
    }
}
