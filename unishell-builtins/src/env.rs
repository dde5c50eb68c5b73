use unishell_core::{Command, Error, ExecutionContext, ExecutionResult, Value, ast};

/// Lists variables as `name=value` lines; exported variables are marked.
pub(crate) struct EnvCommand;

impl Command for EnvCommand {
    fn invoke(
        &self,
        _args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        let lines = context
            .var_names()
            .into_iter()
            .filter_map(|name| {
                let value = context.get_var(name)?;
                let marker = if context.is_exported(name) {
                    "(exported) "
                } else {
                    ""
                };
                Some(Value::String(format!("{marker}{name}={value}")))
            })
            .collect();

        Ok(Value::List(lines).into())
    }

    fn description(&self) -> &str {
        "Show environment"
    }
}
