use crate::error::Fault;
use crate::opcode::Opcode;
use crate::operations::*;
use crate::state::State;

/// An operation handler; runs with the pc already past the opcode
pub type Operation = fn(op: &dyn Opcode, state: &mut State) -> Result<(), Fault>;

/// Selects the correct Instruction for a given Opcode
///
/// Words that encode nothing map to `null`, which faults when executed.
pub fn from_op(op: &dyn Opcode) -> Operation {
    match op.nibbles() {
        (0x0, 0x0, 0xC, _) => scrd,
        (0x0, 0x0, 0xD, _) => scru,
        (0x0, 0x0, 0xE, 0x0) => clr,
        (0x0, 0x0, 0xE, 0xE) => rts,
        (0x0, 0x0, 0xF, 0xB) => scrr,
        (0x0, 0x0, 0xF, 0xC) => scrl,
        (0x0, 0x0, 0xF, 0xD) => exit,
        (0x0, 0x0, 0xF, 0xE) => lores,
        (0x0, 0x0, 0xF, 0xF) => hires,
        (0x1, ..) => jump,
        (0x2, ..) => call,
        (0x3, ..) => ske,
        (0x4, ..) => skne,
        (0x5, .., 0x0) => skre,
        (0x5, .., 0x2) => savesub,
        (0x5, .., 0x3) => loadsub,
        (0x6, ..) => load,
        (0x7, ..) => add,
        (0x8, .., 0x0) => mv,
        (0x8, .., 0x1) => or,
        (0x8, .., 0x2) => and,
        (0x8, .., 0x3) => xor,
        (0x8, .., 0x4) => addr,
        (0x8, .., 0x5) => sub,
        (0x8, .., 0x6) => shr,
        (0x8, .., 0x7) => subn,
        (0x8, .., 0xE) => shl,
        (0x9, .., 0x0) => skrne,
        (0xA, ..) => loadi,
        (0xB, ..) => jumpi,
        (0xC, ..) => rand,
        (0xD, ..) => draw,
        (0xE, .., 0x9, 0xE) => skpr,
        (0xE, .., 0xA, 0x1) => skup,
        (0xF, 0x0, 0x0, 0x0) => loadl,
        (0xF, _, 0x0, 0x1) => plane,
        (0xF, 0x0, 0x0, 0x2) => audio,
        (0xF, .., 0x0, 0x7) => moved,
        (0xF, .., 0x0, 0xA) => keyd,
        (0xF, .., 0x1, 0x5) => loads,
        (0xF, .., 0x1, 0x8) => ld,
        (0xF, .., 0x1, 0xE) => addi,
        (0xF, .., 0x2, 0x9) => ldspr,
        (0xF, .., 0x3, 0x0) => ldbig,
        (0xF, .., 0x3, 0x3) => bcd,
        (0xF, .., 0x3, 0xA) => pitch,
        (0xF, .., 0x5, 0x5) => stor,
        (0xF, .., 0x6, 0x5) => read,
        (0xF, .., 0x7, 0x5) => srpl,
        (0xF, .., 0x8, 0x5) => lrpl,
        _ => null,
    }
}
