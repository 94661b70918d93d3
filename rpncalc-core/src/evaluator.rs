// Postfix evaluator
//
// EXECUTION MODEL:
// 1. A line is split into words lazily, each word is classified and dispatched
//    to its primitive before the next word is even looked at
// 2. After every token the heap reclaims values left without an owner
// 3. At the end of the line exactly one value must remain on the stack. The
//    line's pending bindings are then committed to the store and the value is
//    returned. Any failure rolls the line back and leaves the store untouched

use tracing::{debug, trace, warn};

use crate::error::{EvalError, SyntaxError};
use crate::interpreter::{Interpreter, LineState};
use crate::primitives::{
    assign::assign_impl, literal::literal_impl, minus::sub_impl, multiply::mul_impl, plus::add_impl,
    refcount::refcount_impl, variable::variable_impl,
};
use crate::tokenizer::{BinaryOp, Token, tokenize};
use crate::value::Value;

impl Interpreter {
    /// Evaluate one input line and return its value.
    ///
    /// Evaluation stops at the first failing token, so errors are reported in
    /// the order they occur on the line.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn execute_line(&mut self, text: &str) -> Result<Value, EvalError> {
        let mut line = self.begin_line();
        for word in tokenize(text) {
            let outcome = match word {
                Ok(word) => self.execute_token(&mut line, word),
                Err(err) => Err(err.into()),
            };
            if let Err(err) = outcome {
                debug!(error = %err, "line failed");
                self.abort_line(line);
                return Err(err);
            }
        }
        self.end_line(line)
    }

    /// Evaluate a single word against the line in progress.
    pub fn execute_token(&mut self, line: &mut LineState, word: &str) -> Result<(), EvalError> {
        let outcome = self.dispatch(line, word);
        if let Err(EvalError::OutOfMemory(_)) = &outcome {
            warn!(token = word, depth = line.depth(), "out of memory");
        }
        self.heap.reclaim();
        outcome
    }

    fn dispatch(&mut self, line: &mut LineState, word: &str) -> Result<(), EvalError> {
        let token = Token::classify(word)?;
        trace!(%token, depth = line.depth(), "dispatch");

        // RUST CONCEPT: Exhaustive match over the token grammar
        match token {
            Token::Literal(text) => literal_impl(self, line, text),
            Token::Variable(var) => variable_impl(self, line, var),
            Token::Binary(BinaryOp::Add) => add_impl(self, line),
            Token::Binary(BinaryOp::Subtract) => sub_impl(self, line),
            Token::Binary(BinaryOp::Multiply) => mul_impl(self, line),
            Token::RefCount => refcount_impl(self, line),
            Token::Assign(var) => assign_impl(self, line, var),
        }
    }

    /// Finish a line: commit its bindings and return the single value left on
    /// the stack, or roll the line back if the stack depth is not one.
    pub fn end_line(&mut self, mut line: LineState) -> Result<Value, EvalError> {
        let depth = line.depth();
        if depth != 1 {
            debug!(depth, "unbalanced stack");
            self.abort_line(line);
            return Err(SyntaxError::UnbalancedStack { depth }.into());
        }

        // the returned handle keeps the integer readable even if the heap
        // destroys it below because nothing binds it
        let result = match line.stack.pop(&mut self.heap) {
            Some(value) => value,
            None => return Err(SyntaxError::UnbalancedStack { depth: 0 }.into()),
        };

        match line.buffer.commit_into(&mut self.store, &mut self.heap) {
            Ok(committed) => {
                debug!(committed, result = %result, "line committed");
                line.buffer.clear(&mut self.heap);
                self.heap.reclaim();
                Ok(result)
            }
            Err(oom) => {
                warn!(pending = line.buffer.len(), "out of memory while committing bindings");
                self.abort_line(line);
                Err(oom.into())
            }
        }
    }

    /// Discard a line: drop its pending bindings and release its stack.
    pub fn abort_line(&mut self, mut line: LineState) {
        let pending = line.buffer.len();
        line.buffer.clear(&mut self.heap);
        line.stack.drain(&mut self.heap);
        let destroyed = self.heap.reclaim();
        debug!(pending, destroyed, "line rolled back");
    }
}
