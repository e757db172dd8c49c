//! Machine state: the bounded operand stack.

use crate::error::Trap;
use virm_common::Word;

/// Default maximum stack depth.
pub const STACK_CAPACITY: usize = 1024;

/// The Virm virtual machine.
///
/// Holds an operand stack (index 0 = bottom) that never grows past the
/// capacity fixed at construction.
#[derive(Debug, PartialEq, Eq)]
pub struct Machine {
    /// Operand stack.
    pub(crate) stack: Vec<Word>,
    /// Maximum number of entries.
    pub(crate) capacity: usize,
}

impl Machine {
    /// Create an empty machine with [`STACK_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(STACK_CAPACITY)
    }

    /// Create an empty machine with a stack ceiling of `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity.min(STACK_CAPACITY)),
            capacity,
        }
    }

    /// The live stack entries, bottom first.
    pub fn stack(&self) -> &[Word] {
        &self.stack
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Maximum number of values the stack can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if another PUSH would overflow.
    pub fn is_full(&self) -> bool {
        self.stack.len() >= self.capacity
    }

    /// The top of the stack, if any.
    pub fn top(&self) -> Option<Word> {
        self.stack.last().copied()
    }

    /// Push a value onto the stack, checking for overflow.
    pub(crate) fn push(&mut self, value: Word) -> Result<(), Trap> {
        if self.is_full() {
            return Err(Trap::StackOverflow);
        }
        self.stack.push(value);
        Ok(())
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
