// Subtraction primitive

use crate::arith;
use crate::error::EvalError;
use crate::interpreter::{Interpreter, LineState};
use crate::primitives::binary_op;
use crate::tokenizer::BinaryOp;

// Subtraction: ( a b -- a-b )
pub fn sub_impl(interp: &mut Interpreter, line: &mut LineState) -> Result<(), EvalError> {
    binary_op(interp, line, BinaryOp::Subtract, arith::subtract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::test_support::{line_with, rendered, top};
    use crate::value::Value;

    #[test]
    fn test_sub_impl() {
        let mut interp = Interpreter::new();
        let mut line = line_with(&mut interp, &["0", "5"]);
        sub_impl(&mut interp, &mut line).unwrap();
        assert_eq!(rendered(&line), vec!["-5"]);

        interp.execute_token(&mut line, "1300").unwrap();
        interp.execute_token(&mut line, "1299").unwrap();
        sub_impl(&mut interp, &mut line).unwrap();
        assert_eq!(rendered(&line), vec!["-5", "1"]);
        interp.abort_line(line);
    }

    #[test]
    fn test_sub_result_equal_to_left_operand() {
        let mut interp = Interpreter::new();
        let mut line = line_with(&mut interp, &["5", "0"]);
        let left = line.stack().next().cloned().unwrap();
        interp.execute_token(&mut line, "-").unwrap();

        assert!(Value::ptr_eq(&top(&line), &left));
        // the right operand 0 is gone, only 5 survives the token
        assert_eq!(interp.live_values(), 1);
        interp.abort_line(line);
        assert_eq!(interp.live_values(), 0);
    }

    #[test]
    fn test_sub_to_zero_is_canonical() {
        let mut interp = Interpreter::new();
        let mut line = line_with(&mut interp, &["12", "12"]);
        sub_impl(&mut interp, &mut line).unwrap();
        let result = top(&line);
        assert!(result.is_zero());
        assert!(!result.is_negative());
        assert_eq!(result.to_string(), "0");
        interp.abort_line(line);
    }
}
