use tracing::debug;

use crate::bigint::BigInt;
use crate::bindings::{Bindings, Var};
use crate::config::Limits;
use crate::error::{OutOfMemory, SyntaxError};
use crate::heap::Heap;
use crate::stack::Stack;
use crate::value::Value;

// RUST CONCEPT: Explicit context instead of global state
// The committed variable store, the intern table and the limits live in one
// value that is threaded through every evaluation; nothing is process-global
#[derive(Debug, Default)]
pub struct Interpreter {
    pub(crate) heap: Heap,
    pub(crate) store: Bindings,
    pub(crate) limits: Limits,
}

/// State scoped to one input line: the evaluation stack and the bindings
/// made by `=x` that are not committed yet.
///
/// Hand it back to [`Interpreter::end_line`] or [`Interpreter::abort_line`];
/// dropping it on the floor leaves its values registered until teardown.
#[derive(Debug, Default)]
#[must_use = "a line must be finished with end_line or abort_line"]
pub struct LineState {
    pub(crate) stack: Stack,
    pub(crate) buffer: Bindings,
}

impl LineState {
    /// Current stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Values on the stack, bottom first.
    pub fn stack(&self) -> impl Iterator<Item = &Value> {
        self.stack.iter()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn begin_line(&self) -> LineState {
        LineState::default()
    }

    /// Committed binding of `var`, ignoring any line in progress.
    pub fn lookup(&self, var: Var) -> Option<&Value> {
        self.store.get(var)
    }

    /// Committed bindings sorted by name.
    pub fn bindings(&self) -> Vec<(Var, &Value)> {
        self.store.sorted()
    }

    /// Number of distinct integers currently alive.
    pub fn live_values(&self) -> usize {
        self.heap.live_count()
    }

    /// Release every committed binding and destroy whatever is left.
    /// Returns how many values were destroyed.
    pub fn teardown(&mut self) -> usize {
        self.store.clear(&mut self.heap);
        let destroyed = self.heap.reclaim();
        debug!(destroyed, "store torn down");
        destroyed
    }

    // RUST CONCEPT: Helpers shared by the primitives
    // Each primitive borrows the interpreter and the line separately, so these
    // take the LineState explicitly rather than living on it

    /// Pop the top of the stack, failing with `MissingOperand` when empty.
    pub(crate) fn pop(&mut self, line: &mut LineState, operator: &str) -> Result<Value, SyntaxError> {
        line.stack
            .pop(&mut self.heap)
            .ok_or_else(|| SyntaxError::MissingOperand {
                operator: operator.to_string(),
            })
    }

    pub(crate) fn push(&self, line: &mut LineState, value: Value) -> Result<(), OutOfMemory> {
        line.stack.push(value, &self.limits)
    }

    /// Replace `candidate` by the live value equal to it, if there is one, and
    /// push the result.
    pub(crate) fn push_interned(&mut self, line: &mut LineState, candidate: BigInt) -> Result<(), OutOfMemory> {
        let value = self.heap.intern(candidate)?;
        debug_assert!(
            line.stack.contains(&value).is_none_or(|found| Value::ptr_eq(found, &value)),
            "two live instances of {value}"
        );
        self.push(line, value)
    }

    /// A pending binding on this line shadows a committed one.
    pub(crate) fn resolve(&self, line: &LineState, var: Var) -> Option<Value> {
        line.buffer.get(var).or_else(|| self.store.get(var)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: char) -> Var {
        Var::new(name).unwrap()
    }

    #[test]
    fn test_pop_reports_operator() {
        let mut interp = Interpreter::new();
        let mut line = interp.begin_line();
        assert_eq!(
            interp.pop(&mut line, "+"),
            Err(SyntaxError::MissingOperand { operator: "+".to_string() })
        );
        interp.abort_line(line);
    }

    #[test]
    fn test_push_interned_shares_instances() {
        let mut interp = Interpreter::new();
        let mut line = interp.begin_line();
        interp.push_interned(&mut line, "77".parse().unwrap()).unwrap();
        interp.push_interned(&mut line, "77".parse().unwrap()).unwrap();

        let values: Vec<&Value> = line.stack().collect();
        assert!(Value::ptr_eq(values[0], values[1]));
        assert_eq!(values[0].refcount(), 2);
        assert_eq!(interp.live_values(), 1);
        interp.abort_line(line);
        assert_eq!(interp.live_values(), 0);
    }

    #[test]
    fn test_buffer_shadows_store() {
        let mut interp = Interpreter::new();
        interp.execute_line("1 =a").unwrap();

        let mut line = interp.begin_line();
        interp.execute_token(&mut line, "2").unwrap();
        interp.execute_token(&mut line, "=a").unwrap();
        assert_eq!(interp.resolve(&line, var('a')).unwrap().to_string(), "2");
        assert_eq!(interp.lookup(var('a')).unwrap().to_string(), "1");
        interp.abort_line(line);
        assert_eq!(interp.lookup(var('a')).unwrap().to_string(), "1");
    }

    #[test]
    fn test_teardown_reclaims_everything() {
        let mut interp = Interpreter::new();
        interp.execute_line("10 =a 20 =b +").unwrap();
        assert_eq!(interp.bindings().len(), 2);
        assert!(interp.live_values() >= 2);

        interp.teardown();
        assert_eq!(interp.live_values(), 0);
        assert!(interp.bindings().is_empty());
    }

    #[test]
    fn test_with_limits() {
        let limits = Limits::default().with_max_stack_depth(4);
        let interp = Interpreter::with_limits(limits);
        assert_eq!(interp.limits(), &limits);
    }
}
