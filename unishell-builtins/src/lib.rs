//! Standard builtins.

#[cfg(feature = "builtin.cd")]
mod cd;
#[cfg(feature = "builtin.clear")]
mod clear;
#[cfg(feature = "builtin.echo")]
mod echo;
#[cfg(feature = "builtin.env")]
mod env;
#[cfg(feature = "builtin.eval")]
mod eval;
#[cfg(feature = "builtin.exit")]
mod exit;
#[cfg(feature = "builtin.export")]
mod export;
#[cfg(feature = "builtin.help")]
mod help;
#[cfg(feature = "builtin.ls")]
mod ls;
#[cfg(feature = "builtin.options")]
mod options;
#[cfg(feature = "builtin.pwd")]
mod pwd;
#[cfg(feature = "builtin.set")]
mod set;
#[cfg(feature = "builtin.stat")]
mod stat;
#[cfg(feature = "builtin.unset")]
mod unset;

mod args;
mod factory;

pub use factory::{default_builtins, register_default_builtins};
