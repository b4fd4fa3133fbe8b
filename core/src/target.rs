use std::fmt;
use std::str::FromStr;

use crate::constants::{CHIP8_MEMORY_SIZE, XOCHIP_MEMORY_SIZE};
use crate::error::Chip8Error;

/// # Target
/// The member of the Chip-8 family a program was written for.
///
/// The target is fixed for the lifetime of a [`Chip8`](crate::Chip8). It gates which
/// instructions are available and picks the default [`Quirks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Chip8,
    SuperChip,
    XoChip,
}

impl Target {
    pub fn memory_size(self) -> usize {
        match self {
            Target::Chip8 | Target::SuperChip => CHIP8_MEMORY_SIZE,
            Target::XoChip => XOCHIP_MEMORY_SIZE,
        }
    }

    pub fn quirks(self) -> Quirks {
        Quirks::from(self)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Target::Chip8 => "CHIP-8",
            Target::SuperChip => "SUPER-CHIP",
            Target::XoChip => "XO-CHIP",
        };
        f.write_str(name)
    }
}

impl FromStr for Target {
    type Err = Chip8Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chip-8" | "chip8" => Ok(Target::Chip8),
            "super-chip" | "superchip" | "schip" => Ok(Target::SuperChip),
            "xo-chip" | "xochip" => Ok(Target::XoChip),
            _ => Err(Chip8Error::UnknownTarget(s.to_string())),
        }
    }
}

/// # Quirks
/// Behavioural differences between targets for the same nominal opcode.
///
/// Historical interpreters disagree on several of these, so each one is a separate switch
/// that a host may flip to match a particular reference implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// 8XY1, 8XY2 and 8XY3 zero VF
    pub logic_resets_vf: bool,
    /// 8XY6 and 8XYE shift Vy into Vx rather than shifting Vx in place
    pub shift_reads_vy: bool,
    /// BNNN jumps to NNN + Vx (x being the top nibble of NNN) rather than NNN + V0
    pub jump_uses_vx: bool,
    /// FX55 and FX65 leave I pointing just past the last register transferred
    pub load_store_increments_i: bool,
    /// DXYN wraps sprites around the screen edges rather than clipping them
    pub wrap_sprites: bool,
    /// Skips step over the whole of a following 4-byte `F000 NNNN`
    pub skip_long_load: bool,
}

impl From<Target> for Quirks {
    fn from(target: Target) -> Self {
        match target {
            Target::Chip8 => Quirks {
                logic_resets_vf: true,
                shift_reads_vy: true,
                jump_uses_vx: false,
                load_store_increments_i: true,
                wrap_sprites: false,
                skip_long_load: false,
            },
            Target::SuperChip => Quirks {
                logic_resets_vf: false,
                shift_reads_vy: false,
                jump_uses_vx: true,
                load_store_increments_i: false,
                wrap_sprites: false,
                skip_long_load: false,
            },
            Target::XoChip => Quirks {
                logic_resets_vf: false,
                shift_reads_vy: true,
                jump_uses_vx: true,
                load_store_increments_i: false,
                wrap_sprites: true,
                skip_long_load: true,
            },
        }
    }
}
