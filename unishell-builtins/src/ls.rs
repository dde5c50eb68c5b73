use unishell_core::{Command, Error, ErrorKind, ExecutionContext, ExecutionResult, Value, ast};

use crate::args;

/// Lists the entries of a directory, sorted by name.
///
/// Syntax: `ls [dir]`. With no argument, the working directory is listed.
pub(crate) struct LsCommand;

impl Command for LsCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("ls", &args, 0..=1)?;

        let target = match args.first() {
            Some(dir) => context.absolute_path(args::path("ls", dir)?),
            None => context.working_dir().to_path_buf(),
        };

        let entries =
            std::fs::read_dir(&target).map_err(|e| ErrorKind::PathIo(target.clone(), e))?;

        let mut names = vec![];
        for entry in entries {
            let entry = entry.map_err(|e| ErrorKind::PathIo(target.clone(), e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(Value::List(names.into_iter().map(Value::String).collect()).into())
    }

    fn description(&self) -> &str {
        "List contents of a directory"
    }
}
