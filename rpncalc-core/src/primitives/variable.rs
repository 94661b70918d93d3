// Variable reference: push the bound value

use crate::bindings::Var;
use crate::error::{EvalError, SyntaxError};
use crate::interpreter::{Interpreter, LineState};

pub fn variable_impl(interp: &mut Interpreter, line: &mut LineState, var: Var) -> Result<(), EvalError> {
    let value = interp
        .resolve(line, var)
        .ok_or(SyntaxError::UnboundVariable(var))?;
    interp.push(line, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::test_support::{line_with, top};

    #[test]
    fn test_unbound_variable() {
        let mut interp = Interpreter::new();
        let mut line = interp.begin_line();
        let z = Var::new('z').unwrap();
        assert_eq!(
            variable_impl(&mut interp, &mut line, z),
            Err(SyntaxError::UnboundVariable(z).into())
        );
        interp.abort_line(line);
    }

    #[test]
    fn test_pending_binding_is_visible() {
        let mut interp = Interpreter::new();
        let mut line = line_with(&mut interp, &["8", "=q"]);
        variable_impl(&mut interp, &mut line, Var::new('q').unwrap()).unwrap();

        // buffer binding plus two stack slots
        assert_eq!(top(&line).refcount(), 3);
        interp.abort_line(line);
        assert_eq!(interp.live_values(), 0);
    }
}
