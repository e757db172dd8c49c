//! Virm virtual machine — executes PUSH/ADD instruction streams.
//!
//! The VM is a stack machine with a single bounded operand stack of
//! 64-bit signed words. Every step either applies fully or reports a
//! [`Trap`] and leaves the stack untouched.
//!
//! # Usage
//!
//! ```
//! use virm_common::{Instruction, Program};
//! use virm_vm::{run, Machine};
//!
//! let program = Program::new(vec![
//!     Instruction::push(18),
//!     Instruction::push(18),
//!     Instruction::push(18),
//!     Instruction::add(),
//! ]);
//!
//! let mut vm = Machine::new();
//! run(&mut vm, &program).unwrap();
//! assert_eq!(vm.stack(), &[18, 36]);
//! ```

pub mod dump;
pub mod error;
pub mod execute;
pub mod machine;

pub use error::{Fault, Trap};
pub use machine::{Machine, STACK_CAPACITY};

use virm_common::{Instruction, Program};

/// Apply a single instruction to `machine`.
///
/// # Errors
///
/// Returns [`Trap::StackOverflow`] or [`Trap::StackUnderflow`]; the stack
/// is unchanged in either case.
pub fn execute(machine: &mut Machine, instr: Instruction) -> Result<(), Trap> {
    machine.execute(instr)
}

/// Execute a program against `machine`, halting on the first trap.
///
/// # Errors
///
/// Returns a [`Fault`] naming the failing instruction index.
pub fn run(machine: &mut Machine, program: &Program) -> Result<(), Fault> {
    machine.run(program)
}
