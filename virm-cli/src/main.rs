//! Virm CLI — executes the built-in program and dumps the stack.
//!
//! Takes no arguments. Exits 0 on success and 1 on a trap.

use std::io;
use std::process;

use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let program = virm_cli::reference_program();
    let result = virm_cli::run(&program, &mut io::stdout().lock(), &mut io::stderr().lock());

    if let Err(code) = result {
        process::exit(code);
    }
}
