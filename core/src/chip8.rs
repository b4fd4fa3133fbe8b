use std::io::Read;

use crate::error::{Chip8Error, Result};
use crate::frame_buffer::FrameBuffer;
use crate::instruction::from_op;
use crate::state::State;
use crate::target::{Quirks, Target};

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks the current `state` of one of the three machine variants.
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - advancing the CPU a number of cycles
/// - advancing its timers once per frame
/// - inspecting its frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
}

impl Chip8 {
    pub fn new(target: Target) -> Self {
        Chip8 {
            state: State::new(target),
        }
    }

    /// A machine whose random numbers are reproducible across runs
    pub fn with_seed(target: Target, seed: u64) -> Self {
        Chip8 {
            state: State::with_seed(target, seed),
        }
    }

    /// Replace the quirks the target would have picked
    pub fn with_quirks(mut self, quirks: Quirks) -> Self {
        self.state.quirks = quirks;
        self
    }

    pub fn target(&self) -> Target {
        self.state.target
    }

    pub fn quirks(&self) -> Quirks {
        self.state.quirks
    }

    /// Back to power-on; any loaded program is gone
    pub fn reset(&mut self) {
        log::info!("resetting {} interpreter", self.state.target);
        self.state.reset();
    }

    /// Load a program from a source file
    ///
    /// # Arguments
    /// * `reader` a reader over the raw program image
    pub fn load_program(&mut self, reader: &mut dyn Read) -> Result<usize> {
        let size = self.state.memory.load_program(reader)?;
        log::info!("loaded {} byte program", size);
        Ok(size)
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the keypad index, 0x0..=0xF
    /// * `pressed` whether it is now held down
    pub fn set_key(&mut self, key: u8, pressed: bool) -> Result<()> {
        let slot = self
            .state
            .keys
            .get_mut(usize::from(key))
            .ok_or(Chip8Error::InvalidKey(key))?;
        *slot = pressed;
        Ok(())
    }

    /// Advances the CPU by a single cycle
    /// - gets the opcode at the pc and moves the pc past it
    /// - executes the opcode
    ///
    /// Does nothing once the program has asked to exit.
    pub fn step(&mut self) -> Result<()> {
        if self.state.exited {
            return Ok(());
        }

        let pc = self.state.pc;
        let op = self
            .state
            .memory
            .read_word(usize::from(pc))
            .map_err(|_| Chip8Error::ProgramCounterOutOfBounds { pc })?;
        log::trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.state.v,
            self.state.i,
            pc
        );

        self.state.pc = pc.wrapping_add(2);
        from_op(&op)(&op, &mut self.state).map_err(|fault| Chip8Error::Execution {
            opcode: op,
            pc,
            fault,
        })
    }

    /// Executes `cycles` instructions, stopping early on an exit request
    pub fn run_cycles(&mut self, cycles: u32) -> Result<()> {
        for _ in 0..cycles {
            if self.state.exited {
                break;
            }
            self.step()?;
        }
        Ok(())
    }

    /// Decrements both timers; call once per frame
    ///
    /// Returns true while the sound timer is running.
    pub fn tick_timers(&mut self) -> bool {
        self.state.timers.tick()
    }

    /// Returns the FrameBuffer if the display should be redrawn, marking it as drawn
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.frame_buffer.is_dirty() {
            self.state.frame_buffer.mark_clean();
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Whether the program executed 00FD
    pub fn has_exited(&self) -> bool {
        self.state.exited
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}
