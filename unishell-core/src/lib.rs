//! Core evaluation engine for the unishell command language.
//!
//! Source text is parsed by `unishell-parser`; the resulting nodes are evaluated here
//! against an [`ExecutionContext`], which holds the session's variables, registered
//! [`commands::Command`] implementations, and option stacks. [`Interpreter::evaluate`] is
//! the single entry point tying the two together.

pub mod commands;
pub mod interp;
pub mod options;
pub mod trace_categories;
pub mod variables;

mod context;
mod error;
mod interpreter;
mod results;
mod value;

pub use commands::{Command, SimpleCommand};
pub use context::ExecutionContext;
pub use error::{Error, ErrorCategory, ErrorKind};
pub use interpreter::{
    DEFAULT_MAX_DEPTH, EvalOutcome, Interpreter, InterpreterOptions, MissingVariablePolicy,
};
pub use results::{ExecutionControlFlow, ExecutionResult};
pub use value::Value;

pub use unishell_parser::{ParserOptions, ast};
