use itertools::Itertools;
use unishell_core::{Command, Error, EvalOutcome, ExecutionContext, ExecutionResult, Value, ast};

/// Evaluates its arguments, joined by spaces, as a program.
///
/// Returns the list of statement values. The first failing statement's error is
/// propagated; an exit requested by the program is honored.
pub(crate) struct EvalCommand;

impl Command for EvalCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        let source = args.iter().join(" ");

        let mut values = vec![];
        for outcome in context.evaluate(&source)? {
            match outcome {
                EvalOutcome::Value(value) => values.push(value),
                EvalOutcome::Failed(err) => return Err(err),
                EvalOutcome::ExitRequested(code) => return Ok(ExecutionResult::exit(code)),
            }
        }

        Ok(Value::List(values).into())
    }

    fn description(&self) -> &str {
        "Evaluate arguments as a program"
    }
}
