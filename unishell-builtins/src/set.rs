use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast, commands};

use crate::args;

/// Sets a variable.
///
/// Syntax: `set [-x] name value`. With `-x`, the variable is exported.
pub(crate) struct SetCommand;

impl Command for SetCommand {
    fn invoke(
        &self,
        mut args: Vec<Value>,
        flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("set", &args, 2..=2)?;

        let value = args.pop().unwrap_or_default();
        let name = args::string("set", "variable name", &args[0])?;
        let exported = commands::has_flag(flags, "x");

        context.set_var(name, value, exported);

        Ok(ExecutionResult::unit())
    }

    fn description(&self) -> &str {
        "Set variable; -x exports it"
    }
}
