//! Program representation: an ordered, in-memory instruction sequence.

use crate::instruction::Instruction;

/// A Virm program: a sequence of instructions executed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The instruction stream.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over the instructions in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        let program = Program::new(vec![]);
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert_eq!(program, Program::default());
    }

    #[test]
    fn len_and_is_empty() {
        let program = Program::new(vec![
            Instruction::push(1),
            Instruction::push(2),
            Instruction::add(),
        ]);
        assert_eq!(program.len(), 3);
        assert!(!program.is_empty());
    }

    #[test]
    fn collect_preserves_order() {
        let program: Program = (0..4).map(Instruction::push).collect();
        let operands: Vec<_> = program.iter().filter_map(|i| i.operand()).collect();
        assert_eq!(operands, vec![0, 1, 2, 3]);
    }
}
