//! Decimal digit sequences.
//!
//! Digits are stored least-significant first, so the tail of the sequence is
//! the most-significant digit. Every operation that can grow the sequence is
//! fallible: it reserves memory with `try_reserve` and honours
//! [`Limits::max_digits`], reporting [`OutOfMemory`] instead of aborting.

use crate::config::Limits;
use crate::error::OutOfMemory;

#[derive(Debug, Default, PartialEq, Eq, Hash)]
pub struct Digits(Vec<u8>);

impl Digits {
    pub const fn new() -> Self {
        Digits(Vec::new())
    }

    /// An empty sequence with room for `capacity` digits.
    pub fn with_capacity(capacity: usize, limits: &Limits) -> Result<Self, OutOfMemory> {
        limits.check_digits(capacity)?;
        let mut digits = Vec::new();
        digits.try_reserve_exact(capacity)?;
        Ok(Digits(digits))
    }

    /// Copy a slice of digits (least-significant first) into a new sequence.
    pub fn from_slice(digits: &[u8], limits: &Limits) -> Result<Self, OutOfMemory> {
        let mut copy = Digits::with_capacity(digits.len(), limits)?;
        copy.0.extend_from_slice(digits);
        Ok(copy)
    }

    /// Deep copy. A partially built copy is dropped before the error propagates.
    pub fn try_clone(&self, limits: &Limits) -> Result<Self, OutOfMemory> {
        Digits::from_slice(&self.0, limits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digits least-significant first.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn most_significant(&self) -> Option<u8> {
        self.0.last().copied()
    }

    pub fn push_most_significant(&mut self, digit: u8, limits: &Limits) -> Result<(), OutOfMemory> {
        debug_assert!(digit < 10);
        limits.check_digits(self.0.len() + 1)?;
        self.0.try_reserve(1)?;
        self.0.push(digit);
        Ok(())
    }

    pub fn push_least_significant(&mut self, digit: u8, limits: &Limits) -> Result<(), OutOfMemory> {
        debug_assert!(digit < 10);
        limits.check_digits(self.0.len() + 1)?;
        self.0.try_reserve(1)?;
        self.0.insert(0, digit);
        Ok(())
    }

    /// Multiply by `10^count` by prepending zero digits at the least-significant end.
    pub fn shift_left(&mut self, count: usize, limits: &Limits) -> Result<(), OutOfMemory> {
        if count == 0 || self.0.is_empty() {
            return Ok(());
        }
        let new_len = self.0.len().checked_add(count).ok_or(OutOfMemory)?;
        limits.check_digits(new_len)?;
        self.0.try_reserve(count)?;
        self.0.resize(new_len, 0);
        self.0.rotate_right(count);
        Ok(())
    }

    pub fn pop_most_significant(&mut self) -> Option<u8> {
        self.0.pop()
    }

    /// Remove most-significant zero digits. An all-zero sequence becomes empty,
    /// which is the canonical representation of zero.
    pub fn trim(&mut self) {
        while self.most_significant() == Some(0) {
            self.pop_most_significant();
        }
    }
}
