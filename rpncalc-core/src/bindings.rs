// Variable bindings
//
// The same type backs both the committed store (lives as long as the
// interpreter) and the per-line buffer of pending `=x` assignments.

use std::collections::HashMap;
use std::fmt;

use crate::error::OutOfMemory;
use crate::heap::Heap;
use crate::value::Value;

/// A variable name: exactly one lowercase ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(u8);

impl Var {
    pub fn new(name: char) -> Option<Var> {
        if name.is_ascii_lowercase() {
            Some(Var(name as u8))
        } else {
            None
        }
    }

    /// Parse a whole token as a variable name.
    pub fn parse(text: &str) -> Option<Var> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(name), None) => Var::new(name),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Default)]
pub struct Bindings {
    slots: HashMap<Var, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, var: Var) -> Option<&Value> {
        self.slots.get(&var)
    }

    /// Bindings sorted by variable name.
    pub fn sorted(&self) -> Vec<(Var, &Value)> {
        let mut entries: Vec<(Var, &Value)> = self.slots.iter().map(|(var, value)| (*var, value)).collect();
        entries.sort_by_key(|(var, _)| *var);
        entries
    }

    /// Bind `var` to `value`, taking one owner on the new value and releasing
    /// the one held on the previous binding.
    ///
    /// The new owner is taken before the old one is released, so rebinding a
    /// variable to the value it already holds never destroys that value.
    pub fn assign(&mut self, heap: &mut Heap, var: Var, value: &Value) -> Result<(), OutOfMemory> {
        if !self.slots.contains_key(&var) {
            self.slots.try_reserve(1)?;
        }
        heap.acquire(value);
        if let Some(previous) = self.slots.insert(var, value.clone()) {
            heap.release(&previous);
        }
        Ok(())
    }

    /// Copy every binding into `store`. Room for all of them is reserved up
    /// front, so either every binding is applied or, on `OutOfMemory`, none is.
    pub fn commit_into(&self, store: &mut Bindings, heap: &mut Heap) -> Result<usize, OutOfMemory> {
        self.commit_reserving(store, heap, self.slots.len())
    }

    // Reserve `room` new slots in `store`, then apply every binding. Nothing
    // is touched unless the reservation succeeds.
    fn commit_reserving(&self, store: &mut Bindings, heap: &mut Heap, room: usize) -> Result<usize, OutOfMemory> {
        store.slots.try_reserve(room)?;
        for (var, value) in &self.slots {
            store.assign(heap, *var, value)?;
        }
        Ok(self.slots.len())
    }

    /// Remove every binding, releasing one owner from each bound value.
    pub fn clear(&mut self, heap: &mut Heap) {
        for (_, value) in self.slots.drain() {
            heap.release(&value);
        }
    }
}
