use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast};

/// Lists registered commands with their descriptions.
pub(crate) struct HelpCommand;

impl Command for HelpCommand {
    fn invoke(
        &self,
        _args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        let lines = context
            .cmd_names()
            .into_iter()
            .filter_map(|name| {
                let command = context.get_cmd(name)?;
                Some(Value::String(format!("{name}\t{}", command.description())))
            })
            .collect();

        Ok(Value::List(lines).into())
    }

    fn description(&self) -> &str {
        "Show commands"
    }
}
