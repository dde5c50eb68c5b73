use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast};

use crate::args;

/// Terminal reset sequence.
const RESET: &str = "\x1Bc";

/// Clears the screen.
pub(crate) struct ClearCommand;

impl Command for ClearCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        _context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("clear", &args, 0..=0)?;
        Ok(ExecutionResult::new(RESET))
    }

    fn description(&self) -> &str {
        "Clear screen"
    }
}
