use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast};

use crate::args;

/// Pushes a value onto an option's stack.
///
/// Syntax: `pushopt name value`.
pub(crate) struct PushOptCommand;

impl Command for PushOptCommand {
    fn invoke(
        &self,
        mut args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("pushopt", &args, 2..=2)?;

        let value = args.pop().unwrap_or_default();
        let name = args::string("pushopt", "option name", &args[0])?;
        context.push_option(name, value)?;

        Ok(ExecutionResult::unit())
    }

    fn description(&self) -> &str {
        "Push a value onto an option's stack"
    }
}

/// Returns an option's current value.
///
/// Syntax: `peekopt name`.
pub(crate) struct PeekOptCommand;

impl Command for PeekOptCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("peekopt", &args, 1..=1)?;

        let name = args::string("peekopt", "option name", &args[0])?;
        Ok(context.peek_option(name)?.clone().into())
    }

    fn description(&self) -> &str {
        "Show an option's current value"
    }
}

/// Pops an option's current value, restoring the previous one. The default value cannot
/// be popped.
///
/// Syntax: `popopt name`.
pub(crate) struct PopOptCommand;

impl Command for PopOptCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("popopt", &args, 1..=1)?;

        let name = args::string("popopt", "option name", &args[0])?;
        Ok(context.pop_option(name)?.into())
    }

    fn description(&self) -> &str {
        "Pop an option's current value"
    }
}
