use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast};

use crate::args;

/// Exits the shell.
pub(crate) struct ExitCommand;

impl Command for ExitCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        _context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("exit", &args, 0..=1)?;

        let code = match args.first() {
            None => 0,
            Some(Value::Integer(code)) => i32::try_from(*code).map_err(|_| {
                Error::invalid_arguments("exit", format!("exit code out of range: {code}"))
            })?,
            Some(other) => {
                return Err(Error::invalid_arguments(
                    "exit",
                    format!("exit code must be an integer, got {}", other.type_name()),
                ));
            }
        };

        Ok(ExecutionResult::exit(code))
    }

    fn description(&self) -> &str {
        "Exit shell"
    }
}
