// Resource limits for the evaluator
//
// Real allocation failures are reported through try_reserve, but they are
// practically impossible to provoke on a desktop. These limits make the same
// OutOfMemory paths reachable on demand: exceeding one behaves exactly like
// a failed allocation.

use crate::error::OutOfMemory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of decimal digits in any single number, including
    /// intermediate results of an operation.
    pub max_digits: usize,
    /// Maximum number of values on the evaluation stack.
    pub max_stack_depth: usize,
}

impl Limits {
    pub const UNLIMITED: Limits = Limits {
        max_digits: usize::MAX,
        max_stack_depth: usize::MAX,
    };

    pub fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    pub fn with_max_stack_depth(mut self, max_stack_depth: usize) -> Self {
        self.max_stack_depth = max_stack_depth;
        self
    }

    pub(crate) fn check_digits(&self, len: usize) -> Result<(), OutOfMemory> {
        if len > self.max_digits {
            Err(OutOfMemory)
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_stack_depth(&self, depth: usize) -> Result<(), OutOfMemory> {
        if depth > self.max_stack_depth {
            Err(OutOfMemory)
        } else {
            Ok(())
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits::UNLIMITED
    }
}
