//! Arithmetic engine over [`BigInt`].
//!
//! Every operation is a pure function: operands are borrowed and never
//! mutated, and each sign case is reduced to another case on a borrowed
//! signed-magnitude view rather than by flipping an operand's sign in place.
//! Intermediate sequences are owned locals, so an `OutOfMemory` raised
//! halfway through drops all of them before the error reaches the caller.

use core::cmp::Ordering;

use crate::bigint::BigInt;
use crate::config::Limits;
use crate::digits::Digits;
use crate::error::OutOfMemory;

// RUST CONCEPT: A borrowed view lets us negate without touching the operand
// `negated()` returns a new view; the BigInt behind it is shared and immutable
#[derive(Debug, Clone, Copy)]
struct Signed<'a> {
    negative: bool,
    magnitude: &'a [u8],
}

impl<'a> Signed<'a> {
    fn of(value: &'a BigInt) -> Self {
        Signed {
            negative: value.is_negative(),
            magnitude: value.magnitude(),
        }
    }

    fn is_zero(self) -> bool {
        self.magnitude.is_empty()
    }

    fn negated(self) -> Self {
        Signed {
            negative: !self.negative && !self.is_zero(),
            magnitude: self.magnitude,
        }
    }

    fn to_big_int(self, limits: &Limits) -> Result<BigInt, OutOfMemory> {
        let digits = Digits::from_slice(self.magnitude, limits)?;
        Ok(BigInt::from_parts(self.negative, digits))
    }
}

/// Total order on integers.
///
/// Zero compares as 0 whatever path built it; differing signs decide
/// immediately; with equal signs the longer magnitude is larger, and equal
/// lengths compare digit by digit from the most significant. All magnitude
/// comparisons flip for negative operands.
pub fn compare(a: &BigInt, b: &BigInt) -> Ordering {
    match (a.is_zero(), b.is_zero()) {
        (true, true) => Ordering::Equal,
        (false, true) => {
            if a.is_negative() {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (true, false) => {
            if b.is_negative() {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (false, false) => match (a.is_negative(), b.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (negative, _) => {
                let by_magnitude = compare_magnitudes(a.magnitude(), b.magnitude());
                if negative {
                    by_magnitude.reverse()
                } else {
                    by_magnitude
                }
            }
        },
    }
}

/// Numeric equality: same sign and identical digit sequences.
pub fn equal(a: &BigInt, b: &BigInt) -> bool {
    a.is_negative() == b.is_negative() && a.magnitude() == b.magnitude()
}

pub fn add(a: &BigInt, b: &BigInt, limits: &Limits) -> Result<BigInt, OutOfMemory> {
    add_signed(Signed::of(a), Signed::of(b), limits)
}

pub fn subtract(a: &BigInt, b: &BigInt, limits: &Limits) -> Result<BigInt, OutOfMemory> {
    subtract_signed(Signed::of(a), Signed::of(b), limits)
}

pub fn multiply(a: &BigInt, b: &BigInt, limits: &Limits) -> Result<BigInt, OutOfMemory> {
    multiply_signed(Signed::of(a), Signed::of(b), limits)
}

/// Compare magnitudes given least-significant first: longer is larger, then
/// the first differing digit from the most-significant end decides.
fn compare_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitudes(a: &[u8], b: &[u8], limits: &Limits) -> Result<Digits, OutOfMemory> {
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = Digits::with_capacity(longer.len(), limits)?;
    let mut carry = 0;
    for (position, &digit) in longer.iter().enumerate() {
        let total = digit + shorter.get(position).copied().unwrap_or(0) + carry;
        sum.push_most_significant(total % 10, limits)?;
        carry = total / 10;
    }
    // a trailing carry becomes one more most-significant digit
    if carry > 0 {
        sum.push_most_significant(carry, limits)?;
    }
    Ok(sum)
}

/// `a - b` for magnitudes with `a >= b`. Leading zeros left by the borrow
/// chain (1300 - 1299 = 0001) are trimmed.
fn subtract_magnitudes(a: &[u8], b: &[u8], limits: &Limits) -> Result<Digits, OutOfMemory> {
    debug_assert!(compare_magnitudes(a, b) != Ordering::Less);

    let mut difference = Digits::with_capacity(a.len(), limits)?;
    let mut borrow = 0;
    for (position, &digit) in a.iter().enumerate() {
        let subtrahend = b.get(position).copied().unwrap_or(0) + borrow;
        let result = if digit >= subtrahend {
            borrow = 0;
            digit - subtrahend
        } else {
            borrow = 1;
            digit + 10 - subtrahend
        };
        difference.push_most_significant(result, limits)?;
    }
    difference.trim();
    Ok(difference)
}

fn add_signed(a: Signed<'_>, b: Signed<'_>, limits: &Limits) -> Result<BigInt, OutOfMemory> {
    if a.is_zero() {
        return b.to_big_int(limits);
    }
    if b.is_zero() {
        return a.to_big_int(limits);
    }

    match (a.negative, b.negative) {
        // a + (-b) = a - b
        (false, true) => subtract_signed(a, b.negated(), limits),
        // (-a) + b = b - a
        (true, false) => subtract_signed(b, a.negated(), limits),
        (negative, _) => {
            let sum = add_magnitudes(a.magnitude, b.magnitude, limits)?;
            Ok(BigInt::from_parts(negative, sum))
        }
    }
}

fn subtract_signed(a: Signed<'_>, b: Signed<'_>, limits: &Limits) -> Result<BigInt, OutOfMemory> {
    if a.is_zero() {
        return b.negated().to_big_int(limits);
    }
    if b.is_zero() {
        return a.to_big_int(limits);
    }

    match (a.negative, b.negative) {
        // (-a) - (-b) = b - a
        (true, true) => subtract_signed(b.negated(), a.negated(), limits),
        // (-a) - b = -(a + b)
        (true, false) => {
            let sum = add_magnitudes(a.magnitude, b.magnitude, limits)?;
            Ok(BigInt::from_parts(true, sum))
        }
        // a - (-b) = a + b
        (false, true) => {
            let sum = add_magnitudes(a.magnitude, b.magnitude, limits)?;
            Ok(BigInt::from_parts(false, sum))
        }
        (false, false) => {
            if compare_magnitudes(a.magnitude, b.magnitude) == Ordering::Less {
                // a < b: a - b = -(b - a)
                let reversed = subtract_signed(b, a, limits)?;
                Ok(reversed.negated())
            } else {
                let difference = subtract_magnitudes(a.magnitude, b.magnitude, limits)?;
                Ok(BigInt::from_parts(false, difference))
            }
        }
    }
}

/// Schoolbook long multiplication using addition as the only primitive: each
/// multiplier digit `d` contributes the multiplicand added to itself `d` times,
/// scaled by one more power of ten per decimal position.
fn multiply_signed(a: Signed<'_>, b: Signed<'_>, limits: &Limits) -> Result<BigInt, OutOfMemory> {
    if a.is_zero() || b.is_zero() {
        return Ok(BigInt::zero());
    }
    // the operand with more digits is the multiplicand
    if b.magnitude.len() > a.magnitude.len() {
        return multiply_signed(b, a, limits);
    }

    let mut product = Digits::new();
    for (position, &digit) in b.magnitude.iter().enumerate() {
        let mut partial = Digits::new();
        for _ in 0..digit {
            partial = add_magnitudes(partial.as_slice(), a.magnitude, limits)?;
        }
        partial.shift_left(position, limits)?;
        product = add_magnitudes(product.as_slice(), partial.as_slice(), limits)?;
    }
    Ok(BigInt::from_parts(a.negative != b.negative, product))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    fn sum(a: &str, b: &str) -> String {
        add(&big(a), &big(b), &Limits::UNLIMITED).unwrap().to_string()
    }

    fn difference(a: &str, b: &str) -> String {
        subtract(&big(a), &big(b), &Limits::UNLIMITED).unwrap().to_string()
    }

    fn product(a: &str, b: &str) -> String {
        multiply(&big(a), &big(b), &Limits::UNLIMITED).unwrap().to_string()
    }

    #[test]
    fn test_addition_sign_cases() {
        assert_eq!(sum("0", "-1234"), "-1234");
        assert_eq!(sum("1234", "0"), "1234");
        assert_eq!(sum("0", "0"), "0");
        assert_eq!(sum("-1234", "-1234"), "-2468");
        assert_eq!(sum("1234", "-1234"), "0");
        assert_eq!(sum("-1234", "33"), "-1201");
        assert_eq!(sum("33", "-1234"), "-1201");
        assert_eq!(sum("999", "1"), "1000");
    }

    #[test]
    fn test_subtraction_sign_cases() {
        assert_eq!(difference("0", "1234"), "-1234");
        assert_eq!(difference("0", "-1234"), "1234");
        assert_eq!(difference("1234", "0"), "1234");
        assert_eq!(difference("-1234", "0"), "-1234");
        assert_eq!(difference("0", "0"), "0");
        assert_eq!(difference("-12", "-11"), "-1");
        assert_eq!(difference("-11", "-12"), "1");
        assert_eq!(difference("-12", "11"), "-23");
        assert_eq!(difference("12", "-11"), "23");
        assert_eq!(difference("11", "12"), "-1");
        assert_eq!(difference("1300", "1299"), "1");
        assert_eq!(difference("12", "12"), "0");
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(product("0", "987"), "0");
        assert_eq!(product("-987", "0"), "0");
        assert_eq!(product("12", "12"), "144");
        assert_eq!(product("7", "123456789"), "864197523");
        assert_eq!(product("-25", "4"), "-100");
        assert_eq!(product("-25", "-4"), "100");
        assert_eq!(
            product("99999999999999999999", "99999999999999999999"),
            "9999999999999999999800000000000000000001"
        );
    }

    #[test]
    fn test_operands_are_untouched() {
        let limits = Limits::UNLIMITED;
        let a = big("-12");
        let b = big("30");
        add(&a, &b, &limits).unwrap();
        subtract(&a, &b, &limits).unwrap();
        subtract(&b, &a, &limits).unwrap();
        assert_eq!(a.to_string(), "-12");
        assert_eq!(b.to_string(), "30");
    }

    #[test]
    fn test_compare_and_equal() {
        assert_eq!(compare(&big("-0"), &big("0")), Ordering::Equal);
        assert_eq!(compare(&big("-13"), &big("0")), Ordering::Less);
        assert_eq!(compare(&big("0"), &big("-13")), Ordering::Greater);
        assert_eq!(compare(&big("-1344"), &big("-35")), Ordering::Less);
        assert_eq!(compare(&big("-34"), &big("-1344")), Ordering::Greater);
        assert_eq!(compare(&big("4321"), &big("4312")), Ordering::Greater);
        assert_eq!(compare(&big("-4321"), &big("-4312")), Ordering::Less);

        assert!(equal(&big("0"), &BigInt::zero()));
        assert!(equal(&big("-77"), &big("-77")));
        assert!(!equal(&big("77"), &big("-77")));
        assert!(!equal(&big("77"), &big("770")));
    }

    #[test]
    fn test_out_of_memory_mid_operation() {
        let limits = Limits::default().with_max_digits(4);
        // operands fit, the carry digit does not
        assert_eq!(add(&big("9999"), &big("1"), &limits), Err(OutOfMemory));
        // scaled partial products overflow the limit
        assert_eq!(multiply(&big("99"), &big("999"), &limits), Err(OutOfMemory));
        // results that fit are still computed
        assert_eq!(multiply(&big("99"), &big("99"), &limits).unwrap().to_string(), "9801");
        assert_eq!(subtract(&big("1000"), &big("1"), &limits).unwrap().to_string(), "999");
    }
}
