use unishell_core::{
    Command, Error, ExecutionContext, ExecutionResult, Value, ast, trace_categories,
};

use crate::args;

/// Changes the working directory.
///
/// With no argument, the working directory is left alone. Either way the (new) working
/// directory is returned.
pub(crate) struct CdCommand;

impl Command for CdCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("cd", &args, 0..=1)?;

        if let Some(target) = args.first() {
            let target = args::path("cd", target)?;
            context.set_working_dir(target)?;

            tracing::debug!(
                target: trace_categories::COMMANDS,
                "working directory is now {}",
                context.working_dir().display()
            );
        }

        Ok(ExecutionResult::new(
            context.working_dir().to_string_lossy().into_owned(),
        ))
    }

    fn description(&self) -> &str {
        "Change directory"
    }
}
