// Tokenizer for postfix expressions
//
// A line is split on single spaces. An empty piece means a leading space, a
// trailing space, a run of spaces, or an empty line, and is a syntax error.
// Splitting is lazy so the evaluator sees errors in the order they occur on
// the line.

use core::fmt;
use core::str::Split;

use crate::bigint::is_literal;
use crate::bindings::Var;
use crate::error::SyntaxError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `0` or `[1-9][0-9]*`
    Literal(&'a str),
    /// `a`..`z`
    Variable(Var),
    /// `+`, `-` or `*`
    Binary(BinaryOp),
    /// `?`: push the owner count of the popped operand
    RefCount,
    /// `=x`: bind the top value to `x` for the rest of the line
    Assign(Var),
}

impl<'a> Token<'a> {
    pub fn classify(word: &'a str) -> Result<Token<'a>, SyntaxError> {
        if is_literal(word) {
            return Ok(Token::Literal(word));
        }
        if let Some(var) = Var::parse(word) {
            return Ok(Token::Variable(var));
        }
        match word {
            "+" => Ok(Token::Binary(BinaryOp::Add)),
            "-" => Ok(Token::Binary(BinaryOp::Subtract)),
            "*" => Ok(Token::Binary(BinaryOp::Multiply)),
            "?" => Ok(Token::RefCount),
            _ => match word.strip_prefix('=').and_then(Var::parse) {
                Some(var) => Ok(Token::Assign(var)),
                None => Err(SyntaxError::InvalidToken(word.to_string())),
            },
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => write!(f, "{}", text),
            Token::Variable(var) => write!(f, "{}", var),
            Token::Binary(op) => write!(f, "{}", op.symbol()),
            Token::RefCount => write!(f, "?"),
            Token::Assign(var) => write!(f, "={}", var),
        }
    }
}

/// Lazy iterator over the words of one line.
///
/// Yields `Err(MisplacedSpace)` for the first empty word and then stops.
pub struct Words<'a> {
    pieces: Split<'a, char>,
    failed: bool,
}

impl<'a> Iterator for Words<'a> {
    type Item = Result<&'a str, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let piece = self.pieces.next()?;
        if piece.is_empty() {
            self.failed = true;
            return Some(Err(SyntaxError::MisplacedSpace));
        }
        Some(Ok(piece))
    }
}

pub fn tokenize(line: &str) -> Words<'_> {
    Words {
        pieces: line.split(' '),
        failed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<Result<&str, SyntaxError>> {
        tokenize(line).collect()
    }

    #[test]
    fn test_split_on_single_spaces() {
        assert_eq!(words("3 4 +"), vec![Ok("3"), Ok("4"), Ok("+")]);
        assert_eq!(words("x"), vec![Ok("x")]);
    }

    #[test]
    fn test_misplaced_spaces() {
        assert_eq!(words(" 3"), vec![Err(SyntaxError::MisplacedSpace)]);
        assert_eq!(words("3 "), vec![Ok("3"), Err(SyntaxError::MisplacedSpace)]);
        assert_eq!(words("3  4"), vec![Ok("3"), Err(SyntaxError::MisplacedSpace)]);
        assert_eq!(words(""), vec![Err(SyntaxError::MisplacedSpace)]);
    }

    #[test]
    fn test_classify() {
        let x = Var::new('x').unwrap();
        assert_eq!(Token::classify("0"), Ok(Token::Literal("0")));
        assert_eq!(Token::classify("120"), Ok(Token::Literal("120")));
        assert_eq!(Token::classify("x"), Ok(Token::Variable(x)));
        assert_eq!(Token::classify("+"), Ok(Token::Binary(BinaryOp::Add)));
        assert_eq!(Token::classify("-"), Ok(Token::Binary(BinaryOp::Subtract)));
        assert_eq!(Token::classify("*"), Ok(Token::Binary(BinaryOp::Multiply)));
        assert_eq!(Token::classify("?"), Ok(Token::RefCount));
        assert_eq!(Token::classify("=x"), Ok(Token::Assign(x)));
    }

    #[test]
    fn test_classify_rejects() {
        for word in ["007", "-5", "=", "=X", "=xy", "xy", "X", "/", "3\t", "++", "?x"] {
            assert_eq!(
                Token::classify(word),
                Err(SyntaxError::InvalidToken(word.to_string())),
                "{word:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_token_display() {
        let y = Var::new('y').unwrap();
        assert_eq!(Token::Assign(y).to_string(), "=y");
        assert_eq!(Token::Binary(BinaryOp::Multiply).to_string(), "*");
        assert_eq!(Token::Literal("42").to_string(), "42");
    }
}
