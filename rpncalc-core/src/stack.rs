// Evaluation stack
//
// Each slot owns one reference to its value: push takes an owner, pop gives
// it back. A fresh stack is created for every input line and drained at the
// end of it, whatever the outcome.

use crate::bigint::BigInt;
use crate::config::Limits;
use crate::error::OutOfMemory;
use crate::heap::Heap;
use crate::value::Value;

#[derive(Debug, Default)]
pub struct Stack {
    items: Vec<Value>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `value`, taking one owner on it. On failure the owner count is
    /// left untouched, so an unadopted value is still reclaimed by the heap.
    pub fn push(&mut self, value: Value, limits: &Limits) -> Result<(), OutOfMemory> {
        limits.check_stack_depth(self.items.len() + 1)?;
        self.items.try_reserve(1)?;
        value.acquire();
        self.items.push(value);
        Ok(())
    }

    /// Pop the top value and release its owner. The returned handle stays
    /// readable until the heap's next reclaim, and valid after it.
    pub fn pop(&mut self, heap: &mut Heap) -> Option<Value> {
        let value = self.items.pop()?;
        heap.release(&value);
        Some(value)
    }

    /// Linear scan for an entry numerically equal to `candidate`.
    pub fn contains(&self, candidate: &BigInt) -> Option<&Value> {
        self.items.iter().find(|item| item.as_big_int() == candidate)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Values from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Pop everything, releasing each slot's owner.
    pub fn drain(&mut self, heap: &mut Heap) {
        while self.pop(heap).is_some() {}
    }
}
