use std::io::Read;

use crate::constants::{BIG_FONT_ADDRESS, PROGRAM_START, SMALL_FONT_ADDRESS};
use crate::error::{Chip8Error, Fault};

// NB. addresses are usize here; registers hold u16 and callers widen them before indexing

/// # Memory
/// Flat byte-addressable RAM.
///
/// The region below `PROGRAM_START` belongs to the interpreter and holds both font sheets.
/// Every access is bounds checked against the size chosen at construction.
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Memory {
    pub fn new(size: usize) -> Self {
        let mut memory = Memory {
            bytes: vec![0; size].into_boxed_slice(),
        };
        memory.load_fonts();
        memory
    }

    /// Zeroes everything, then restores the font sheets.
    pub fn reset(&mut self) {
        self.bytes.fill(0);
        self.load_fonts();
    }

    fn load_fonts(&mut self) {
        let small = SMALL_FONT_ADDRESS as usize;
        let big = BIG_FONT_ADDRESS as usize;
        self.bytes[small..small + SMALL_FONT.len()].copy_from_slice(&SMALL_FONT);
        self.bytes[big..big + BIG_FONT.len()].copy_from_slice(&BIG_FONT);
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Largest program that fits between `PROGRAM_START` and the end of memory.
    pub fn program_capacity(&self) -> usize {
        self.len() - PROGRAM_START as usize
    }

    /// Copy a whole program image into memory at `PROGRAM_START`.
    ///
    /// # Arguments
    /// * `reader` the raw program image; read to EOF, or one byte past what fits
    ///
    /// Returns the number of bytes loaded.
    pub fn load_program(&mut self, reader: &mut dyn Read) -> Result<usize, Chip8Error> {
        let max_size = self.program_capacity();
        let mut program = Vec::with_capacity(max_size);
        let size = reader.take(max_size as u64 + 1).read_to_end(&mut program)?;
        if size > max_size {
            return Err(Chip8Error::ProgramTooLarge { size, max_size });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + size].copy_from_slice(&program);
        Ok(size)
    }

    pub fn read_byte(&self, address: usize) -> Result<u8, Fault> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(Fault::MemoryOutOfBounds(address))
    }

    pub fn write_byte(&mut self, address: usize, value: u8) -> Result<(), Fault> {
        let byte = self
            .bytes
            .get_mut(address)
            .ok_or(Fault::MemoryOutOfBounds(address))?;
        *byte = value;
        Ok(())
    }

    /// Big-endian word at `address..address + 2`
    pub fn read_word(&self, address: usize) -> Result<u16, Fault> {
        let word = self.slice(address, 2)?;
        Ok(u16::from(word[0]) << 8 | u16::from(word[1]))
    }

    pub fn slice(&self, address: usize, len: usize) -> Result<&[u8], Fault> {
        let end = self.checked_end(address, len)?;
        Ok(&self.bytes[address..end])
    }

    pub fn slice_mut(&mut self, address: usize, len: usize) -> Result<&mut [u8], Fault> {
        let end = self.checked_end(address, len)?;
        Ok(&mut self.bytes[address..end])
    }

    /// Reports the first address that falls outside of memory
    fn checked_end(&self, address: usize, len: usize) -> Result<usize, Fault> {
        let end = address + len;
        if end > self.len() {
            Err(Fault::MemoryOutOfBounds(address.max(self.len())))
        } else {
            Ok(end)
        }
    }
}

/// 4x5 glyphs for 0..F
#[rustfmt::skip]
const SMALL_FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// 8x10 glyphs for 0..F
#[rustfmt::skip]
const BIG_FONT: [u8; 160] = [
    0x3C, 0x7E, 0xE7, 0xC3, 0xC3, 0xC3, 0xC3, 0xE7, 0x7E, 0x3C, // 0
    0x18, 0x38, 0x58, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, // 1
    0x3E, 0x7F, 0xC3, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xFF, 0xFF, // 2
    0x3C, 0x7E, 0xC3, 0x03, 0x0E, 0x0E, 0x03, 0xC3, 0x7E, 0x3C, // 3
    0x06, 0x0E, 0x1E, 0x36, 0x66, 0xC6, 0xFF, 0xFF, 0x06, 0x06, // 4
    0xFF, 0xFF, 0xC0, 0xC0, 0xFC, 0xFE, 0x03, 0xC3, 0x7E, 0x3C, // 5
    0x3E, 0x7C, 0xE0, 0xC0, 0xFC, 0xFE, 0xC3, 0xC3, 0x7E, 0x3C, // 6
    0xFF, 0xFF, 0x03, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x60, 0x60, // 7
    0x3C, 0x7E, 0xC3, 0xC3, 0x7E, 0x7E, 0xC3, 0xC3, 0x7E, 0x3C, // 8
    0x3C, 0x7E, 0xC3, 0xC3, 0x7F, 0x3F, 0x03, 0x03, 0x3E, 0x7C, // 9
    0x7E, 0xFF, 0xC3, 0xC3, 0xC3, 0xFF, 0xFF, 0xC3, 0xC3, 0xC3, // A
    0xFC, 0xFC, 0xC3, 0xC3, 0xFC, 0xFC, 0xC3, 0xC3, 0xFC, 0xFC, // B
    0x3C, 0xFF, 0xC3, 0xC0, 0xC0, 0xC0, 0xC0, 0xC3, 0xFF, 0x3C, // C
    0xFC, 0xFE, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xFE, 0xFC, // D
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, // E
    0xFF, 0xFF, 0xC0, 0xC0, 0xFF, 0xFF, 0xC0, 0xC0, 0xC0, 0xC0, // F
];
