pub use chip8::Chip8;
pub use error::{Chip8Error, Fault, Result};
pub use frame_buffer::{DisplayMode, FrameBuffer, Plane};
pub use target::{Quirks, Target};

mod chip8;
pub mod constants;
mod error;
pub mod frame_buffer;
mod instruction;
pub mod memory;
mod opcode;
mod operations;
pub mod stack;
pub mod state;
mod target;
pub mod timers;
