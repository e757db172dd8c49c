//! Virm common types.
//!
//! This crate provides the data side of the Virm instruction set:
//!
//! - [`Word`] — the 64-bit signed stack value
//! - [`Instruction`] — the closed PUSH/ADD instruction enum
//! - [`InstKind`] — the opcode tag of an instruction
//! - [`RawInstruction`] — an unchecked `{ tag, operand }` pair
//! - [`Program`] — a sequence of instructions
//! - [`DecodeError`] — errors from checking raw instructions
//!
//! Nothing here has behavior beyond construction and conversion.

pub mod error;
pub mod instruction;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::{InstKind, Instruction, RawInstruction, Word, ALL_KINDS};
pub use program::Program;
