use crate::constants::STACK_SIZE;
use crate::error::Fault;

/// # Call Stack
/// Return addresses for nested subroutine calls, strictly LIFO.
///
/// The last slot is never filled, so at most `STACK_SIZE - 1` calls may be outstanding.
#[derive(Debug, Clone)]
pub struct CallStack {
    entries: [u16; STACK_SIZE],
    len: usize,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            entries: [0; STACK_SIZE],
            len: 0,
        }
    }

    pub fn push(&mut self, address: u16) -> Result<(), Fault> {
        if self.len >= STACK_SIZE - 1 {
            return Err(Fault::StackOverflow);
        }
        self.entries[self.len] = address;
        self.len += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16, Fault> {
        if self.len == 0 {
            return Err(Fault::StackUnderflow);
        }
        self.len -= 1;
        Ok(self.entries[self.len])
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.entries = [0; STACK_SIZE];
        self.len = 0;
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}
