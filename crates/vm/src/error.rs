//! Traps and faults raised by the Virm machine.
//!
//! A [`Trap`] is the reason a single step failed. A [`Fault`] is a trap
//! tagged with the index of the instruction that raised it, produced when
//! running a whole program.

use thiserror::Error;
use virm_common::DecodeError;

/// Errors that a single execution step can report.
///
/// The set is closed. A trap never leaves the stack partially modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Trap {
    /// PUSH with the stack already at capacity.
    #[error("stack overflow")]
    StackOverflow,

    /// ADD with fewer than two values on the stack.
    #[error("stack underflow")]
    StackUnderflow,

    /// Instruction tag outside the instruction set.
    #[error("illegal instruction tag {tag:#04x}")]
    IllegalInstruction { tag: u8 },
}

impl Trap {
    /// The kind name reported to users, e.g. `StackOverflow`.
    pub fn name(&self) -> &'static str {
        match self {
            Trap::StackOverflow => "StackOverflow",
            Trap::StackUnderflow => "StackUnderflow",
            Trap::IllegalInstruction { .. } => "IllegalInstruction",
        }
    }
}

impl From<DecodeError> for Trap {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::UnknownTag(tag) => Trap::IllegalInstruction { tag },
        }
    }
}

/// A trap raised while running a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{trap} at instruction {at}")]
pub struct Fault {
    /// Index of the failing instruction within the program.
    pub at: usize,
    /// Why it failed.
    #[source]
    pub trap: Trap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn trap_display_formats() {
        assert_eq!(Trap::StackOverflow.to_string(), "stack overflow");
        assert_eq!(Trap::StackUnderflow.to_string(), "stack underflow");
        assert_eq!(
            Trap::IllegalInstruction { tag: 0x2a }.to_string(),
            "illegal instruction tag 0x2a"
        );
    }

    #[test]
    fn trap_kind_names() {
        assert_eq!(Trap::StackOverflow.name(), "StackOverflow");
        assert_eq!(Trap::StackUnderflow.name(), "StackUnderflow");
        assert_eq!(
            Trap::IllegalInstruction { tag: 9 }.name(),
            "IllegalInstruction"
        );
    }

    #[test]
    fn decode_error_maps_to_illegal_instruction() {
        assert_eq!(
            Trap::from(DecodeError::UnknownTag(0x10)),
            Trap::IllegalInstruction { tag: 0x10 }
        );
    }

    #[test]
    fn fault_display_and_source() {
        let fault = Fault {
            at: 1024,
            trap: Trap::StackOverflow,
        };
        assert_eq!(fault.to_string(), "stack overflow at instruction 1024");
        assert_eq!(
            fault.source().map(|s| s.to_string()),
            Some("stack overflow".to_string())
        );
    }
}
