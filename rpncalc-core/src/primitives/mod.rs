// Primitives module - one file per operator
//
// Every primitive takes the interpreter (heap, store, limits) and the state
// of the line being evaluated. Values popped by a primitive stay registered
// in the heap until the token is finished, so a result equal to one of its
// operands is interned to that operand instead of allocating a copy.

use crate::bigint::BigInt;
use crate::config::Limits;
use crate::error::{EvalError, OutOfMemory, SyntaxError};
use crate::interpreter::{Interpreter, LineState};
use crate::tokenizer::BinaryOp;

// Operands
pub mod literal;
pub mod variable;

// Arithmetic
pub mod plus;
pub mod minus;
pub mod multiply;

// Unary operators
pub mod refcount;
pub mod assign;

pub(crate) type ArithFn = fn(&BigInt, &BigInt, &Limits) -> Result<BigInt, OutOfMemory>;

// RUST CONCEPT: Function pointers for shared operator plumbing
// ( left right -- left OP right ): the value pushed last is the right operand
pub(crate) fn binary_op(
    interp: &mut Interpreter,
    line: &mut LineState,
    op: BinaryOp,
    compute: ArithFn,
) -> Result<(), EvalError> {
    if line.depth() < 2 {
        return Err(SyntaxError::MissingOperand {
            operator: op.symbol().to_string(),
        }
        .into());
    }
    let right = interp.pop(line, op.symbol())?;
    let left = interp.pop(line, op.symbol())?;

    let result = compute(&left, &right, &interp.limits)?;
    interp.push_interned(line, result)?;
    Ok(())
}
