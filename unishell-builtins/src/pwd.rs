use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast};

use crate::args;

/// Returns the working directory.
pub(crate) struct PwdCommand;

impl Command for PwdCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("pwd", &args, 0..=0)?;
        Ok(ExecutionResult::new(
            context.working_dir().to_string_lossy().into_owned(),
        ))
    }

    fn description(&self) -> &str {
        "Display the current working directory"
    }
}
