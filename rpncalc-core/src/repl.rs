//! Line runners
//!
//! [`run_batch`] evaluates every line of a reader, one result or error line
//! per input line, and is what the CLI uses when stdin is not a terminal.
//! [`run_repl`] (feature `repl`) drives the same evaluation from the
//! `editline` line editor.

use std::io::{self, BufRead};

use tracing::info;

use crate::error::EvalError;
use crate::interpreter::Interpreter;
use crate::output::Output;
use crate::value::Value;

/// Outcome counts of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, result: &Result<Value, EvalError>) {
        self.lines += 1;
        match result {
            Ok(_) => self.succeeded += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// The text shown for a line result: the value, or the error message.
pub fn render(result: &Result<Value, EvalError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(err) => err.to_string(),
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Evaluate `text` and write its rendering to `output`.
pub fn evaluate_and_report(
    interpreter: &mut Interpreter,
    text: &str,
    output: &mut dyn Output,
) -> io::Result<Result<Value, EvalError>> {
    let result = interpreter.execute_line(text);
    output.write_line(&render(&result))?;
    output.flush()?;
    Ok(result)
}

/// Evaluate every line of `reader` in order.
///
/// Spaces are significant, so only the line terminator is removed before
/// evaluation. An empty line is evaluated like any other and reports a
/// syntax error.
pub fn run_batch<R: BufRead>(
    mut reader: R,
    interpreter: &mut Interpreter,
    output: &mut dyn Output,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    let mut bytes = Vec::new();

    loop {
        bytes.clear();
        if reader.read_until(b'\n', &mut bytes)? == 0 {
            break;
        }
        // invalid UTF-8 becomes U+FFFD, which no token accepts, so the line
        // fails on its own and the run goes on
        let line = String::from_utf8_lossy(&bytes);
        let result = evaluate_and_report(interpreter, strip_line_ending(&line), output)?;
        summary.record(&result);
    }

    info!(lines = summary.lines, failed = summary.failed, "batch finished");
    Ok(summary)
}

/// Run an interactive REPL on the process terminal until Ctrl-D.
///
/// Ctrl-C abandons the line being edited.
#[cfg(feature = "repl")]
pub fn run_repl(interpreter: &mut Interpreter, output: &mut dyn Output) -> io::Result<Summary> {
    use editline::{LineEditor, terminals::StdioTerminal};

    let mut editor = LineEditor::new(1024, 50);
    let mut terminal = StdioTerminal::new();
    let mut summary = Summary::default();

    loop {
        output.write(b"> ")?;
        output.flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let text: &str = &line;
                let result = evaluate_and_report(interpreter, strip_line_ending(text), output)?;
                summary.record(&result);
            }
            Err(editline::Error::Eof) => {
                output.write(b"\n")?;
                break;
            }
            Err(editline::Error::Interrupted) => {
                output.write_line("^C")?;
                continue;
            }
            Err(e) => {
                tracing::debug!(error = %e, "line editor failed");
                return Err(io::Error::other(e.to_string()));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn batch(input: &str) -> (String, Summary) {
        let mut interp = Interpreter::new();
        let mut output: Vec<u8> = Vec::new();
        let summary = run_batch(input.as_bytes(), &mut interp, &mut output).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_batch_results_in_order() {
        let (out, summary) = batch("3 =x\nx ?\nx x *\n");
        assert_eq!(out, "3\n1\n9\n");
        assert_eq!(
            summary,
            Summary {
                lines: 3,
                succeeded: 3,
                failed: 0
            }
        );
    }

    #[test]
    fn test_batch_reports_errors_and_continues() {
        let (out, summary) = batch("3 4\n z\n7\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Syntax error: "));
        assert!(lines[1].starts_with("Syntax error: "));
        assert_eq!(lines[2], "7");
        assert_eq!(summary.failed, 2);
    }

    #[test]
    fn test_batch_crlf_and_missing_final_newline() {
        let (out, summary) = batch("1 2 +\r\n5 5 *");
        assert_eq!(out, "3\n25\n");
        assert_eq!(summary.lines, 2);
    }

    #[test]
    fn test_batch_invalid_utf8_fails_only_that_line() {
        let mut interp = Interpreter::new();
        let mut output: Vec<u8> = Vec::new();
        let input: &[u8] = b"1 2 +\n\xff\n3 4 +\n";
        let summary = run_batch(input, &mut interp, &mut output).unwrap();

        let out = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "3");
        assert!(lines[1].starts_with("Syntax error: "));
        assert_eq!(lines[2], "7");
        assert_eq!(
            summary,
            Summary {
                lines: 3,
                succeeded: 2,
                failed: 1
            }
        );
    }

    #[test]
    fn test_batch_empty_line_is_error() {
        let (out, summary) = batch("\n");
        assert!(out.starts_with("Syntax error: "));
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_render() {
        let mut interp = Interpreter::new();
        assert_eq!(render(&interp.execute_line("0 8 -")), "-8");
        assert_eq!(
            render(&interp.execute_line("q")),
            "Syntax error: variable 'q' must be assigned before it is used"
        );
    }
}
