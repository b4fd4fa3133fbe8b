/// Bytes of addressable memory for CHIP-8 and SUPER-CHIP programs.
pub const CHIP8_MEMORY_SIZE: usize = 0x1000;

/// XO-CHIP extends the index register to a full 16-bit address space.
pub const XOCHIP_MEMORY_SIZE: usize = 0x10000;

/// Programs are loaded (and begin execution) here; everything below belongs to the interpreter.
pub const PROGRAM_START: u16 = 0x200;

/// 5-row hexadecimal glyphs, 0x050..0x0A0
pub const SMALL_FONT_ADDRESS: u16 = 0x050;
pub const SMALL_FONT_HEIGHT: u16 = 5;

/// 10-row hexadecimal glyphs, 0x0A0..0x140
pub const BIG_FONT_ADDRESS: u16 = 0x0A0;
pub const BIG_FONT_HEIGHT: u16 = 10;

/// Slots in the call stack. One is held in reserve so only `STACK_SIZE - 1` calls can nest.
pub const STACK_SIZE: usize = 16;

/// Physical size of each bit-plane. Low resolution mode draws 2x2 blocks onto it.
pub const DISPLAY_WIDTH: usize = 128;
pub const DISPLAY_HEIGHT: usize = 64;

pub const KEY_COUNT: usize = 16;

/// The flag register
pub const VF: usize = 0xF;

/// The first half of the 4-byte XO-CHIP long index load.
pub const LONG_LOAD: u16 = 0xF000;

/// The host is expected to run this many cycles and tick the timers once per frame.
pub const CYCLES_PER_FRAME: u32 = 12;
pub const FRAMES_PER_SECOND: u32 = 60;
