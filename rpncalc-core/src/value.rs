use std::borrow::Borrow;
use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use crate::bigint::BigInt;

// RUST CONCEPT: Two separate counts live in a Value
// - `owners` is the reference count the language exposes through `?`: one
//   per stack slot and one per variable binding (pending or committed)
// - the Rc strong count only keeps the memory valid for short-lived holders,
//   such as operands an operator has just popped or the result of a line
// A value is destroyed when the heap drops it at zero owners; any holder
// that still has an Rc sees a detached but valid integer, never freed memory
#[derive(Debug)]
struct Number {
    int: BigInt,
    owners: Cell<usize>,
}

/// Shared handle to an interned integer.
///
/// Equality and hashing are structural (by the integer), which is what lets
/// the heap find an existing value for a freshly computed candidate.
#[derive(Clone)]
pub struct Value(Rc<Number>);

impl Value {
    pub(crate) fn new(int: BigInt) -> Self {
        Value(Rc::new(Number {
            int,
            owners: Cell::new(0),
        }))
    }

    pub fn as_big_int(&self) -> &BigInt {
        &self.0.int
    }

    /// Number of live owners: stack slots plus variable bindings.
    pub fn refcount(&self) -> usize {
        self.0.owners.get()
    }

    /// True when both handles refer to the same instance, not merely equal integers.
    pub fn ptr_eq(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }

    pub(crate) fn acquire(&self) -> usize {
        let owners = self.0.owners.get() + 1;
        self.0.owners.set(owners);
        owners
    }

    pub(crate) fn release(&self) -> usize {
        let owners = self.0.owners.get();
        debug_assert!(owners > 0, "released a value with no owners");
        let owners = owners.saturating_sub(1);
        self.0.owners.set(owners);
        owners
    }
}

impl Deref for Value {
    type Target = BigInt;

    fn deref(&self) -> &BigInt {
        &self.0.int
    }
}

impl Borrow<BigInt> for Value {
    fn borrow(&self) -> &BigInt {
        &self.0.int
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.int == other.0.int
    }
}

impl Eq for Value {}

// Must hash exactly like BigInt so lookups by &BigInt find the Value
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.int.hash(state);
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.int)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({}, owners={})", self.0.int, self.refcount())
    }
}
