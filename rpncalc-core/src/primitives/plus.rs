// Addition primitive

use crate::arith;
use crate::error::EvalError;
use crate::interpreter::{Interpreter, LineState};
use crate::primitives::binary_op;
use crate::tokenizer::BinaryOp;

// Addition: ( a b -- a+b )
pub fn add_impl(interp: &mut Interpreter, line: &mut LineState) -> Result<(), EvalError> {
    binary_op(interp, line, BinaryOp::Add, arith::add)
}
