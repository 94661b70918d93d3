// Reference count query: ( a -- owners )
//
// The operand is popped first, so the count reported excludes the stack slot
// the operand was just taken from.

use crate::bigint::BigInt;
use crate::error::EvalError;
use crate::interpreter::{Interpreter, LineState};

pub fn refcount_impl(interp: &mut Interpreter, line: &mut LineState) -> Result<(), EvalError> {
    let operand = interp.pop(line, "?")?;
    let count = BigInt::from_count(operand.refcount(), &interp.limits)?;
    interp.push_interned(line, count)?;
    Ok(())
}
