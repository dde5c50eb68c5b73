use unishell_core::{Command, Error, ErrorKind, ExecutionContext, ExecutionResult, Value, ast};

use crate::args;

/// Exports a variable, optionally setting it first.
///
/// Syntax: `export name [value]`.
pub(crate) struct ExportCommand;

impl Command for ExportCommand {
    fn invoke(
        &self,
        mut args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("export", &args, 1..=2)?;

        let value = if args.len() == 2 { args.pop() } else { None };
        let name = args::string("export", "variable name", &args[0])?;

        match value {
            Some(value) => context.set_var(name, value, true),
            None => {
                if !context.export_var(name) {
                    return Err(ErrorKind::VariableNotFound(name.to_owned()).into());
                }
            }
        }

        Ok(ExecutionResult::unit())
    }

    fn description(&self) -> &str {
        "Export variable, optionally setting its value"
    }
}
