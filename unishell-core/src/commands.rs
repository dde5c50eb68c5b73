//! The command dispatch protocol.

use std::sync::Arc;

use unishell_parser::ast;

use crate::{ErrorKind, ExecutionContext, ExecutionResult, Value, error, trace_categories};

/// A command that can be registered in an [`ExecutionContext`] and invoked by name.
pub trait Command: Send + Sync {
    /// Invokes the command.
    ///
    /// # Arguments
    ///
    /// * `args` - The evaluated positional arguments, in source order.
    /// * `flags` - The flags given to the command, in source order.
    /// * `context` - The context in which the command is being invoked.
    fn invoke(
        &self,
        args: Vec<Value>,
        flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, error::Error>;

    /// Returns a one-line description of the command, for help output.
    fn description(&self) -> &str {
        ""
    }
}

/// A [`Command`] implemented by a function or closure.
pub struct SimpleCommand<F> {
    description: String,
    handler: F,
}

impl<F> SimpleCommand<F>
where
    F: Fn(Vec<Value>, &[ast::Flag], &mut ExecutionContext) -> Result<ExecutionResult, error::Error>
        + Send
        + Sync,
{
    /// Returns a new command backed by the given handler.
    ///
    /// # Arguments
    ///
    /// * `description` - One-line description of the command.
    /// * `handler` - The function to call when the command is invoked.
    pub fn new(description: impl Into<String>, handler: F) -> Self {
        Self {
            description: description.into(),
            handler,
        }
    }
}

impl<F> Command for SimpleCommand<F>
where
    F: Fn(Vec<Value>, &[ast::Flag], &mut ExecutionContext) -> Result<ExecutionResult, error::Error>
        + Send
        + Sync,
{
    fn invoke(
        &self,
        args: Vec<Value>,
        flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, error::Error> {
        (self.handler)(args, flags, context)
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Looks up the named command and invokes it.
///
/// # Arguments
///
/// * `context` - The context in which to look up and invoke the command.
/// * `name` - Name of the command.
/// * `args` - The evaluated positional arguments.
/// * `flags` - The command's flags.
pub fn dispatch(
    context: &mut ExecutionContext,
    name: &str,
    args: Vec<Value>,
    flags: &[ast::Flag],
) -> Result<ExecutionResult, error::Error> {
    // The registry may be modified by the command itself.
    let command: Arc<dyn Command> = context
        .get_cmd(name)
        .ok_or_else(|| ErrorKind::CommandNotFound(name.to_owned()))?;

    tracing::debug!(
        target: trace_categories::COMMANDS,
        "invoking {name} with {} arg(s) and {} flag(s)",
        args.len(),
        flags.len()
    );

    command.invoke(args, flags, context)
}

/// Returns whether a flag with the given name is present.
pub fn has_flag(flags: &[ast::Flag], name: &str) -> bool {
    flags.iter().any(|f| f.name == name)
}
