//! Implements the grammar, parse tree, and abstract syntax tree for the unishell command
//! language.
//!
//! Source text flows through three stages:
//!
//! 1. the [`peg`] grammar in [`parser`] matches it into a [`syntax`] parse tree,
//! 2. the [`transform`] visitor walks that tree bottom-up and produces [`ast`] nodes,
//! 3. string literals along the way are split by the [`interpolation`] engine, whose
//!    substitution spans are parsed recursively with the `expression` start rule.
//!
//! Evaluation of the resulting nodes lives in `unishell-core`.

pub mod ast;
pub mod interpolation;
pub mod syntax;
pub mod transform;

mod error;
mod parser;

pub use error::ParseError;
pub use parser::{DEFAULT_MAX_NESTING_DEPTH, ParseTree, Parser, ParserOptions, StartRule};
