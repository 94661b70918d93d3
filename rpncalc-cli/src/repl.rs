// Interactive session: banner, then the core line-editing REPL

use std::io;

use rpncalc_core::{Interpreter, Output, Summary, run_repl};

use crate::stdout_output::StdoutOutput;

fn banner(output: &mut dyn Output) -> io::Result<()> {
    output.write_line(&format!("rpncalc v{}", env!("CARGO_PKG_VERSION")))?;
    output.write_line("")?;
    output.write_line("Enter a postfix expression, one token per space: 3 4 + =x")?;
    output.write_line("Numbers: 0 or digits without a leading zero")?;
    output.write_line("Operators: + - * and ? (reference count)")?;
    output.write_line("Variables: a..z, assign with =x, kept only when the line succeeds")?;
    output.write_line("Press Ctrl-D to exit")?;
    output.write_line("")?;
    output.flush()
}

pub fn run(interp: &mut Interpreter, output: &mut StdoutOutput, quiet: bool) -> io::Result<Summary> {
    if !quiet {
        banner(output)?;
    }
    let summary = run_repl(interp, output)?;
    output.write_line("Goodbye!")?;
    output.flush()?;
    Ok(summary)
}
