//! Crate for unishell, an executable interactive shell for the unishell command language.

pub mod args;
pub mod entry;
mod error;
pub mod events;
mod formatter;
mod input;
mod productinfo;
mod session;

pub use error::ShellError;
