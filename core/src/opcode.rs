/// # Opcodes
///
/// Instructions are 16-bit big-endian words. Which operation a word encodes is decided by:
/// - `(n, _, _, _)` the family; every word has one
/// - `(_, _, _, n)` a member of the 5XY_ and 8XY_ families
/// - `(_, _, n, n)` a member of the EX__ and FX__ families
/// - `(_, n, n, n)` a fixed operation with no operands (e.g. 00E0; clear screen)
///
/// The nibbles not used to pick the operation usually carry its operands.
/// - `(_, n, n, n)` an address
/// - `(_, _, n, n)` an immediate byte
/// - `(_, n, _, _)` the register Vx, the last of V0..Vx, or a bitplane mask
/// - `(_, _, n, _)` the register Vy
/// - `(_, _, _, n)` a sprite height or scroll distance
pub trait Opcode {
    /// The whole instruction word.
    fn word(&self) -> u16;

    /// The word's four nibbles, most significant first.
    fn nibbles(&self) -> (u8, u8, u8, u8) {
        let word = self.word();
        (
            ((word & 0xF000) >> 12) as u8,
            ((word & 0x0F00) >> 8) as u8,
            ((word & 0x00F0) >> 4) as u8,
            (word & 0x000F) as u8,
        )
    }

    /// Register index in the second nibble.
    /// `[_x__]`
    fn x(&self) -> usize {
        usize::from((self.word() & 0x0F00) >> 8)
    }

    /// Register index in the third nibble.
    /// `[__y_]`
    fn y(&self) -> usize {
        usize::from((self.word() & 0x00F0) >> 4)
    }

    /// `[___n]`
    fn n(&self) -> u8 {
        (self.word() & 0x000F) as u8
    }

    /// `[__nn]`
    fn nn(&self) -> u8 {
        (self.word() & 0x00FF) as u8
    }

    /// `[_nnn]`
    fn nnn(&self) -> u16 {
        self.word() & 0x0FFF
    }
}

impl Opcode for u16 {
    fn word(&self) -> u16 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields() {
        let op: u16 = 0xD12F;
        assert_eq!(op.nibbles(), (0xD, 0x1, 0x2, 0xF));
        assert_eq!(op.x(), 0x1);
        assert_eq!(op.y(), 0x2);
        assert_eq!(op.n(), 0xF);
        assert_eq!(op.nn(), 0x2F);
        assert_eq!(op.nnn(), 0x12F);
    }

    #[test]
    fn test_register_fields_never_exceed_vf() {
        let op: u16 = 0xFFFF;
        assert_eq!(op.x(), 0xF);
        assert_eq!(op.y(), 0xF);
    }
}
