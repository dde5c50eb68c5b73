use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast};

use crate::args;

/// Removes variables. Names that are not set are ignored.
pub(crate) struct UnsetCommand;

impl Command for UnsetCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        for arg in &args {
            let name = args::string("unset", "variable name", arg)?;
            context.del_var(name);
        }

        Ok(ExecutionResult::unit())
    }

    fn description(&self) -> &str {
        "Remove variables"
    }
}
