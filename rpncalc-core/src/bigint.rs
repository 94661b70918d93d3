//! Arbitrary-precision signed decimal integers.
//!
//! A [`BigInt`] is a sign plus a [`Digits`] sequence. Values are always kept in
//! canonical form:
//!
//! - zero is `negative = false` with no digits, and nothing else is zero;
//! - the most-significant digit is never `0`.
//!
//! Because of this, derived structural equality is numeric equality and the
//! derived hash can key the intern table.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::config::Limits;
use crate::digits::Digits;
use crate::error::{EvalError, OutOfMemory, SyntaxError};

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    digits: Digits,
}

impl BigInt {
    pub const fn zero() -> Self {
        BigInt {
            negative: false,
            digits: Digits::new(),
        }
    }

    /// Build a value from a sign and digits, restoring canonical form
    /// (trimmed leading zeros, non-negative zero).
    pub fn from_parts(negative: bool, mut digits: Digits) -> Self {
        digits.trim();
        let negative = negative && !digits.is_empty();
        BigInt { negative, digits }
    }

    /// Construct a value from a literal token: `0` or `[1-9][0-9]*`.
    pub fn parse_literal(text: &str, limits: &Limits) -> Result<Self, EvalError> {
        if !is_literal(text) {
            return Err(SyntaxError::InvalidToken(text.to_string()).into());
        }
        Ok(BigInt::from_literal_digits(text, limits)?)
    }

    /// The decimal value of an owner count, built through the literal path.
    pub fn from_count(count: usize, limits: &Limits) -> Result<Self, OutOfMemory> {
        BigInt::from_literal_digits(&count.to_string(), limits)
    }

    // `text` must already match the literal grammar
    fn from_literal_digits(text: &str, limits: &Limits) -> Result<Self, OutOfMemory> {
        if text == "0" {
            return Ok(BigInt::zero());
        }
        let mut digits = Digits::with_capacity(text.len(), limits)?;
        for byte in text.bytes().rev() {
            digits.push_most_significant(byte - b'0', limits)?;
        }
        Ok(BigInt {
            negative: false,
            digits,
        })
    }

    /// The additive inverse. Zero stays non-negative.
    pub fn negated(self) -> Self {
        let negative = !self.negative;
        BigInt::from_parts(negative, self.digits)
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Magnitude digits, least-significant first.
    pub fn magnitude(&self) -> &[u8] {
        self.digits.as_slice()
    }
}

/// True for tokens of the literal grammar `0 | [1-9][0-9]*`.
pub fn is_literal(text: &str) -> bool {
    match text.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        crate::arith::compare(self, other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// RUST CONCEPT: Display prints most-significant digit first
// Digits are stored in the opposite order, so we walk them in reverse
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.negative {
            write!(f, "-")?;
        }
        for digit in self.digits.as_slice().iter().rev() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("cannot parse an integer from an empty string")]
    Empty,
    #[error("invalid digit found in string")]
    InvalidDigit,
}

// Lenient parser for signed decimal text such as "-0042". Unlike
// parse_literal this accepts a sign and leading zeros, and is not limited.
impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if body.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit);
        }
        let digits: Vec<u8> = body.bytes().rev().map(|b| b - b'0').collect();
        let digits = Digits::from_slice(&digits, &Limits::UNLIMITED)
            .map_err(|_| ParseBigIntError::InvalidDigit)?;
        Ok(BigInt::from_parts(negative, digits))
    }
}
