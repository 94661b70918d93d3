//! rpncalc CLI - interactive REPL and batch evaluator
//!
//! This is a thin wrapper around rpncalc-core that builds the executable.
//! Lines come from the terminal when stdin is interactive, otherwise every
//! line of stdin is evaluated in order.

mod stdout_output;
#[cfg(feature = "repl")]
mod repl;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use rpncalc_core::{Interpreter, Limits, run_batch};

use crate::stdout_output::StdoutOutput;

#[derive(Parser)]
#[command(
    name = "rpncalc",
    version,
    about = "Postfix calculator over arbitrary-precision integers"
)]
struct Cli {
    /// Largest number of digits any single number may have
    #[arg(long, value_name = "N")]
    max_digits: Option<usize>,

    /// Largest number of values on the evaluation stack
    #[arg(long = "max-stack", value_name = "N")]
    max_stack_depth: Option<usize>,

    /// Read lines from stdin without line editing, even on a terminal
    #[arg(long)]
    batch: bool,

    /// Do not print the banner in interactive mode
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn limits(&self) -> Limits {
        let mut limits = Limits::default();
        if let Some(max_digits) = self.max_digits {
            limits = limits.with_max_digits(max_digits);
        }
        if let Some(max_stack_depth) = self.max_stack_depth {
            limits = limits.with_max_stack_depth(max_stack_depth);
        }
        limits
    }

    fn interactive(&self) -> bool {
        cfg!(feature = "repl") && !self.batch && io::stdin().is_terminal()
    }
}

/// Install a stderr subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
            .with(filter)
            .init();
    }
}

fn run(cli: &Cli) -> io::Result<()> {
    let mut interp = Interpreter::with_limits(cli.limits());
    let mut output = StdoutOutput::new();

    let summary = if cli.interactive() {
        run_interactive(&mut interp, &mut output, cli.quiet)?
    } else {
        run_batch(io::stdin().lock(), &mut interp, &mut output)?
    };

    // end of input: the store goes away with the process
    let destroyed = interp.teardown();
    tracing::debug!(
        lines = summary.lines,
        failed = summary.failed,
        destroyed,
        "session finished"
    );
    Ok(())
}

#[cfg(feature = "repl")]
fn run_interactive(
    interp: &mut Interpreter,
    output: &mut StdoutOutput,
    quiet: bool,
) -> io::Result<rpncalc_core::Summary> {
    repl::run(interp, output, quiet)
}

#[cfg(not(feature = "repl"))]
fn run_interactive(
    interp: &mut Interpreter,
    output: &mut StdoutOutput,
    _quiet: bool,
) -> io::Result<rpncalc_core::Summary> {
    run_batch(io::stdin().lock(), interp, output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
