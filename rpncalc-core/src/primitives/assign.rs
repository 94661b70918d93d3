// Assignment: ( a -- a ), binding `x` to a for the rest of the line
//
// The binding goes into the line's buffer and only reaches the committed
// store when the whole line succeeds.

use crate::bindings::Var;
use crate::error::EvalError;
use crate::interpreter::{Interpreter, LineState};

pub fn assign_impl(interp: &mut Interpreter, line: &mut LineState, var: Var) -> Result<(), EvalError> {
    let operator = format!("={}", var);
    let value = interp.pop(line, &operator)?;
    line.buffer.assign(&mut interp.heap, var, &value)?;
    interp.push(line, value)?;
    Ok(())
}
