//! Instruction dispatch and the program loop for the Virm machine.

use crate::error::{Fault, Trap};
use crate::machine::Machine;
use tracing::{debug, trace};
use virm_common::{Instruction, Program, RawInstruction};

impl Machine {
    /// Apply one instruction to the stack.
    ///
    /// The step is atomic: on `Err` the stack is exactly as it was before.
    pub fn execute(&mut self, instr: Instruction) -> Result<(), Trap> {
        let result = match instr {
            Instruction::Push(value) => self.push(value),
            Instruction::Add => self.exec_add(),
        };

        if let Err(trap) = result {
            debug!(%instr, trap = trap.name(), depth = self.stack.len(), "trap");
        }
        result
    }

    /// Check the tag of an unchecked instruction, then execute it.
    ///
    /// Unknown tags fail with [`Trap::IllegalInstruction`] and touch nothing.
    pub fn execute_raw(&mut self, raw: RawInstruction) -> Result<(), Trap> {
        let instr = Instruction::try_from(raw).map_err(|err| {
            debug!(tag = raw.tag, depth = self.stack.len(), "illegal instruction");
            Trap::from(err)
        })?;
        self.execute(instr)
    }

    /// Execute every instruction of `program` in order, stopping at the
    /// first trap.
    ///
    /// # Errors
    ///
    /// Returns a [`Fault`] carrying the index of the failing instruction.
    /// Instructions after it are not executed.
    pub fn run(&mut self, program: &Program) -> Result<(), Fault> {
        for (at, &instr) in program.iter().enumerate() {
            trace!(at, %instr, depth = self.stack.len(), "execute");
            self.execute(instr).map_err(|trap| Fault { at, trap })?;
        }
        Ok(())
    }

    /// ADD: replace the top two values with their wrapping sum.
    fn exec_add(&mut self) -> Result<(), Trap> {
        let [.., a, b] = self.stack.as_mut_slice() else {
            return Err(Trap::StackUnderflow);
        };
        *a = a.wrapping_add(*b);
        self.stack.pop();
        Ok(())
    }
}
