//! # rpncalc core
//!
//! Evaluation core of a postfix calculator over arbitrary-precision decimal
//! integers with single-letter variables.
//!
//! ## Features
//!
//! - **Decimal big integers**: sign plus digit sequence, no size limit other
//!   than memory (or a configured [`Limits`])
//! - **Interning**: at most one live instance per numeric value, shared by the
//!   stack and every variable bound to it
//! - **Reference counts**: the `?` operator exposes how many owners a value has
//! - **Transactional lines**: assignments made on a line only become visible
//!   to later lines when the whole line succeeds
//! - **Optional REPL**: enable with the `repl` feature
//!
//! ## Example
//!
//! ```
//! use rpncalc_core::{Interpreter, Var};
//!
//! let mut interp = Interpreter::new();
//!
//! let value = interp.execute_line("3 =x").unwrap();
//! assert_eq!(value.to_string(), "3");
//!
//! let square = interp.execute_line("x x *").unwrap();
//! assert_eq!(square.to_string(), "9");
//!
//! let x = Var::new('x').unwrap();
//! assert_eq!(interp.lookup(x).unwrap().refcount(), 1);
//! ```

// Numbers
pub mod digits;
pub mod bigint;
pub mod arith;

// Values and their owners
pub mod value;
pub mod heap;
pub mod bindings;
pub mod stack;

// Evaluation
pub mod config;
pub mod error;
pub mod tokenizer;
pub mod interpreter;
pub mod evaluator;
pub mod primitives;

// Surfaces
pub mod output;
pub mod repl;

// Re-exports for convenience
pub use bigint::BigInt;
pub use bindings::Var;
pub use config::Limits;
pub use error::{EvalError, OutOfMemory, SyntaxError};
pub use interpreter::{Interpreter, LineState};
pub use output::Output;
pub use repl::{Summary, run_batch};
#[cfg(feature = "repl")]
pub use repl::run_repl;
pub use value::Value;
