/// # Timers
/// Delay and sound counters, decremented at the host's frame rate rather than per instruction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    pub delay: u8,
    pub sound: u8,
}

impl Timers {
    /// Advances both timers by one frame.
    ///
    /// Returns whether the sound timer was running, i.e. whether a tone should play this frame.
    pub fn tick(&mut self) -> bool {
        if self.delay > 0 {
            self.delay -= 1;
        }

        if self.sound > 0 {
            self.sound -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Timers::default();
    }
}
