//! The intern table.
//!
//! Every live integer (on the stack, in the line's pending bindings, or in the
//! committed store) is registered here exactly once, keyed by its value. New
//! literals and operator results are passed through [`Heap::intern`] before
//! anything owns them, so at most one instance exists per numeric value.
//!
//! Values that lose their last owner, and fresh values nobody has adopted yet,
//! wait in a limbo list until [`Heap::reclaim`] runs at the end of each token
//! and each line. Until then they are still interning candidates, which is
//! how an operator's result can reuse one of the operands it just popped.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::bigint::BigInt;
use crate::error::OutOfMemory;
use crate::value::Value;

#[derive(Debug, Default)]
pub struct Heap {
    live: HashSet<Value>,
    limbo: Vec<Value>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the live value equal to `candidate`, or adopt the candidate.
    ///
    /// A newly adopted value starts with zero owners; the caller is expected
    /// to give it one (usually by pushing it) before the next reclaim.
    pub fn intern(&mut self, candidate: BigInt) -> Result<Value, OutOfMemory> {
        if let Some(existing) = self.live.get(&candidate) {
            debug!(value = %existing, owners = existing.refcount(), "interned to existing value");
            return Ok(existing.clone());
        }

        self.live.try_reserve(1)?;
        self.limbo.try_reserve(1)?;
        let value = Value::new(candidate);
        self.live.insert(value.clone());
        self.limbo.push(value.clone());
        Ok(value)
    }

    pub fn find(&self, int: &BigInt) -> Option<&Value> {
        self.live.get(int)
    }

    pub fn acquire(&mut self, value: &Value) {
        value.acquire();
    }

    /// Drop one owner. At zero owners the value is queued for reclamation.
    pub fn release(&mut self, value: &Value) {
        if value.release() == 0 {
            self.limbo.push(value.clone());
        }
    }

    /// Destroy queued values that still have no owner. Returns how many were destroyed.
    pub fn reclaim(&mut self) -> usize {
        let mut destroyed = 0;
        for value in self.limbo.drain(..) {
            if value.refcount() != 0 {
                continue;
            }
            let registered = self
                .live
                .get(value.as_big_int())
                .is_some_and(|live| Value::ptr_eq(live, &value));
            if registered {
                self.live.remove(value.as_big_int());
                destroyed += 1;
            }
        }
        if destroyed > 0 {
            trace!(destroyed, live = self.live.len(), "reclaimed values");
        }
        destroyed
    }

    /// Number of distinct live values.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
