use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast};

/// Returns its arguments joined by single spaces.
pub(crate) struct EchoCommand;

impl Command for EchoCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        _context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        Ok(ExecutionResult::new(Value::List(args).to_string()))
    }

    fn description(&self) -> &str {
        "Echo arguments to output"
    }
}
