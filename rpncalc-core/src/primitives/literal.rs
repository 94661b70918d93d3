// Literal operand: `0` or `[1-9][0-9]*`

use crate::bigint::BigInt;
use crate::error::EvalError;
use crate::interpreter::{Interpreter, LineState};

pub fn literal_impl(interp: &mut Interpreter, line: &mut LineState, text: &str) -> Result<(), EvalError> {
    let candidate = BigInt::parse_literal(text, &interp.limits)?;
    interp.push_interned(line, candidate)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::error::{OutOfMemory, SyntaxError};
    use crate::value::Value;

    #[test]
    fn test_literal_impl() {
        let mut interp = Interpreter::new();
        let mut line = interp.begin_line();
        literal_impl(&mut interp, &mut line, "31415926535897932384626").unwrap();
        literal_impl(&mut interp, &mut line, "31415926535897932384626").unwrap();

        let values: Vec<Value> = line.stack().cloned().collect();
        assert_eq!(values[0].to_string(), "31415926535897932384626");
        assert!(Value::ptr_eq(&values[0], &values[1]));
        interp.abort_line(line);
    }

    #[test]
    fn test_literal_rejects_leading_zero() {
        let mut interp = Interpreter::new();
        let mut line = interp.begin_line();
        assert_eq!(
            literal_impl(&mut interp, &mut line, "05"),
            Err(SyntaxError::InvalidToken("05".to_string()).into())
        );
        interp.abort_line(line);
    }

    #[test]
    fn test_literal_too_long() {
        let mut interp = Interpreter::with_limits(Limits::default().with_max_digits(3));
        let mut line = interp.begin_line();
        assert_eq!(literal_impl(&mut interp, &mut line, "1234"), Err(OutOfMemory.into()));
        assert_eq!(line.depth(), 0);
        interp.abort_line(line);
        assert_eq!(interp.live_values(), 0);
    }
}
