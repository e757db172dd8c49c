//! Diagnostic rendering of the operand stack.
//!
//! ```text
//! Stack:
//!  18
//!  36
//! ```
//!
//! Values are listed bottom first. An empty stack renders as ` [Empty]`.

use std::fmt;
use std::io;

use crate::machine::Machine;

impl Machine {
    /// Write the stack dump to `out`.
    pub fn dump<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stack:")?;
        if self.stack.is_empty() {
            return writeln!(f, " [Empty]");
        }
        for value in &self.stack {
            writeln!(f, " {value}")?;
        }
        Ok(())
    }
}
