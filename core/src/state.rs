use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::constants::{KEY_COUNT, PROGRAM_START};
use crate::frame_buffer::FrameBuffer;
use crate::memory::Memory;
use crate::stack::CallStack;
use crate::target::{Quirks, Target};
use crate::timers::Timers;

/// The complete Chip-8 machine state, mutated in place by each operation.
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry/borrow/collision flag
/// - (i) a 16-bit memory address register
///
/// Counter
/// - (pc) a 16-bit program counter; already advanced past the current instruction while
///   it executes
///
/// ## Memory
/// - 4096 (or 65536 for XO-CHIP) bytes of addressable memory
/// - a call stack of return addresses
/// - two 128x64 bit-planes behind the display
///
/// ## Input
/// - the pressed status of keys 0..F, written by the host
/// - `pressed_key` latches the key FX0A saw go down until it comes back up
///
/// ## Timing
/// - delay and sound timers, ticked once per frame by the host
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub stack: CallStack,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub timers: Timers,
    pub keys: [bool; KEY_COUNT],
    pub pressed_key: Option<u8>,
    pub target: Target,
    pub quirks: Quirks,
    pub exited: bool,
    rng: StdRng,
}

impl State {
    pub fn new(target: Target) -> Self {
        Self::with_rng(target, StdRng::from_entropy())
    }

    /// A state whose random opcode produces a reproducible sequence
    pub fn with_seed(target: Target, seed: u64) -> Self {
        Self::with_rng(target, StdRng::seed_from_u64(seed))
    }

    fn with_rng(target: Target, rng: StdRng) -> Self {
        State {
            v: [0; 16],
            i: 0,
            pc: PROGRAM_START,
            stack: CallStack::new(),
            memory: Memory::new(target.memory_size()),
            frame_buffer: FrameBuffer::new(),
            timers: Timers::default(),
            keys: [false; KEY_COUNT],
            pressed_key: None,
            target,
            quirks: target.quirks(),
            exited: false,
            rng,
        }
    }

    /// Back to power-on, keeping the target, quirks, random source and host-owned key state
    pub fn reset(&mut self) {
        self.v = [0; 16];
        self.i = 0;
        self.pc = PROGRAM_START;
        self.stack.clear();
        self.memory.reset();
        self.frame_buffer.reset();
        self.timers.reset();
        self.pressed_key = None;
        self.exited = false;
    }

    pub fn random_byte(&mut self) -> u8 {
        (self.rng.next_u32() & 0xFF) as u8
    }

    /// Address the executing instruction was fetched from
    pub fn instruction_address(&self) -> u16 {
        self.pc.wrapping_sub(2)
    }
}
