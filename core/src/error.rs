use thiserror::Error;

use crate::target::Target;

/// Why a single instruction could not be executed.
///
/// Operations only know about the state they touch, so they report a `Fault` and the
/// [`Chip8`](crate::Chip8) attaches the opcode and its address before handing it to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("tried to push a full call stack")]
    StackOverflow,

    #[error("tried to pop an empty call stack")]
    StackUnderflow,

    #[error("instruction is not supported by {0}")]
    Unsupported(Target),

    #[error("instruction is not implemented")]
    Unimplemented,

    #[error("bitplane {0} can't be selected")]
    InvalidBitplane(u8),

    #[error("memory access out of bounds at address {0:#06X}")]
    MemoryOutOfBounds(usize),
}

#[derive(Debug, Error)]
pub enum Chip8Error {
    #[error("{fault}: opcode {opcode:#06X} at PC {pc:#06X}")]
    Execution { opcode: u16, pc: u16, fault: Fault },

    #[error("program counter {pc:#06X} is outside of memory")]
    ProgramCounterOutOfBounds { pc: u16 },

    #[error("program is too large ({size} bytes), at most {max_size} bytes fit in memory")]
    ProgramTooLarge { size: usize, max_size: usize },

    #[error("failed to read program")]
    Io(#[from] std::io::Error),

    #[error("key {0:#04X} is not on the keypad")]
    InvalidKey(u8),

    #[error("unknown target '{0}', expected one of: chip-8, super-chip, xo-chip")]
    UnknownTarget(String),
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
