// Error types for the evaluation core
//
// Only two kinds of failure exist and both are scoped to a single input line:
// running out of memory, and malformed input. Neither terminates the process.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::bindings::Var;

/// An allocation could not be satisfied, or a configured limit was exceeded.
///
/// Every component destroys whatever it exclusively owns before returning
/// this, so the failure never leaks values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough memory to complete the expression")]
pub struct OutOfMemory;

// RUST CONCEPT: Converting std allocation failures into our error type
// Every growth of a Vec/HashMap goes through try_reserve, so `?` turns a
// failed reservation straight into OutOfMemory
impl From<TryReserveError> for OutOfMemory {
    fn from(_: TryReserveError) -> Self {
        OutOfMemory
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error(
        "expressions must not start or end with a space, and tokens are separated by exactly one space"
    )]
    MisplacedSpace,
    #[error("'{0}' is not a number, a variable or an operator")]
    InvalidToken(String),
    #[error("'{operator}' needs more values on the stack")]
    MissingOperand { operator: String },
    #[error("variable '{0}' must be assigned before it is used")]
    UnboundVariable(Var),
    #[error("the expression must leave exactly one value on the stack, found {depth}")]
    UnbalancedStack { depth: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Out of memory: {0}")]
    OutOfMemory(#[from] OutOfMemory),
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl EvalError {
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, EvalError::OutOfMemory(_))
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, EvalError::Syntax(_))
    }
}
