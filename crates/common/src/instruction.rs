//! Instruction model for the Virm machine.
//!
//! [`Instruction`] is the closed, typed form every well-formed program uses.
//! [`RawInstruction`] is the loose `{ tag, operand }` pair an embedder may
//! assemble by hand; it only becomes executable after its tag is checked.

use std::fmt;

use crate::error::DecodeError;

/// The unit of value storage on the operand stack.
pub type Word = i64;

/// A single Virm instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Place the operand on top of the stack.
    Push(Word),
    /// Replace the top two values with their sum.
    Add,
}

impl Instruction {
    /// Build a PUSH instruction.
    pub fn push(operand: Word) -> Self {
        Instruction::Push(operand)
    }

    /// Build an ADD instruction.
    pub fn add() -> Self {
        Instruction::Add
    }

    /// The opcode tag of this instruction.
    pub fn kind(&self) -> InstKind {
        match self {
            Instruction::Push(_) => InstKind::Push,
            Instruction::Add => InstKind::Add,
        }
    }

    /// The operand carried by this instruction, if it takes one.
    pub fn operand(&self) -> Option<Word> {
        match self {
            Instruction::Push(value) => Some(*value),
            Instruction::Add => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(value) => write!(f, "push {value}"),
            Instruction::Add => f.write_str("add"),
        }
    }
}

/// Identifies the operation an instruction performs.
///
/// The `#[repr(u8)]` attribute gives each kind a stable tag byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstKind {
    /// Push the operand onto the stack.
    Push = 0x00,
    /// Add the top two values.
    Add = 0x01,
}

/// Every instruction kind, in tag order.
pub const ALL_KINDS: [InstKind; 2] = [InstKind::Push, InstKind::Add];

impl TryFrom<u8> for InstKind {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(InstKind::Push),
            0x01 => Ok(InstKind::Add),
            other => Err(DecodeError::UnknownTag(other)),
        }
    }
}

/// An instruction whose tag has not been checked yet.
///
/// The operand of an ADD is meaningless and ignored on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawInstruction {
    /// Opcode tag byte. See [`InstKind`] for the recognized values.
    pub tag: u8,
    /// Operand for PUSH.
    pub operand: Word,
}

impl RawInstruction {
    /// Create a raw instruction from its parts.
    pub fn new(tag: u8, operand: Word) -> Self {
        Self { tag, operand }
    }
}

impl From<Instruction> for RawInstruction {
    fn from(instr: Instruction) -> Self {
        Self {
            tag: instr.kind() as u8,
            operand: instr.operand().unwrap_or(0),
        }
    }
}

impl TryFrom<RawInstruction> for Instruction {
    type Error = DecodeError;

    fn try_from(raw: RawInstruction) -> Result<Self, Self::Error> {
        Ok(match InstKind::try_from(raw.tag)? {
            InstKind::Push => Instruction::Push(raw.operand),
            InstKind::Add => Instruction::Add,
        })
    }
}
