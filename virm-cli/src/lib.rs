//! Virm driver — runs a program once and reports on stdout/stderr.
//!
//! Exit codes:
//! - 0: Every instruction executed
//! - 1: A trap halted the program, or a report could not be written

use std::io::{self, Write};

use tracing::error;
use virm_common::{Instruction, Program};
use virm_vm::Machine;

/// The program the `virm` binary executes.
pub fn reference_program() -> Program {
    Program::new(vec![
        Instruction::push(18),
        Instruction::push(18),
        Instruction::push(18),
        Instruction::add(),
    ])
}

/// Execute `program` on a fresh machine.
///
/// The initial and final stack dumps go to `out`. On a trap, the kind name
/// and the stack at the point of failure go to `err` and the remaining
/// instructions are skipped.
pub fn run<O, E>(program: &Program, out: &mut O, err: &mut E) -> Result<(), i32>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let mut vm = Machine::new();
    vm.dump(out).map_err(report_failure)?;

    if let Err(fault) = vm.run(program) {
        writeln!(err, "ERROR: {}", fault.trap.name()).map_err(report_failure)?;
        vm.dump(err).map_err(report_failure)?;
        return Err(1);
    }

    vm.dump(out).map_err(report_failure)?;
    Ok(())
}

fn report_failure(e: io::Error) -> i32 {
    error!(error = %e, "cannot write stack report");
    1
}
