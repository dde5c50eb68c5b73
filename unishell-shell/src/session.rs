//! Drives evaluation of input against a single long-lived context.

use std::io::{BufRead, Write};
use std::path::Path;

use unishell_core::{EvalOutcome, ExecutionContext, Interpreter, Value, options};

use crate::error::ShellError;
use crate::formatter;
use crate::input::{LineReader, ReadResult};

/// A shell session: one execution context with the default builtins registered.
pub(crate) struct Session {
    context: ExecutionContext,
}

impl Session {
    /// Returns a new session evaluating with the given interpreter.
    ///
    /// # Arguments
    ///
    /// * `interpreter` - The interpreter to evaluate input with.
    pub fn new(interpreter: Interpreter) -> Self {
        let mut context = ExecutionContext::new(interpreter);
        unishell_builtins::register_default_builtins(&mut context);

        Self { context }
    }

    #[cfg(test)]
    pub const fn context(&self) -> &ExecutionContext {
        &self.context
    }

    /// Evaluates a unit of input, writing values to `out` and reported errors to `err`.
    /// Returns the exit code if a statement requested that the shell exit.
    ///
    /// # Arguments
    ///
    /// * `source` - The input to evaluate.
    /// * `out` - Destination for produced values.
    /// * `err` - Destination for reported errors.
    pub fn run_string(
        &mut self,
        source: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<Option<i32>, ShellError> {
        if source.trim().is_empty() {
            return Ok(None);
        }

        if self.echo_enabled() {
            writeln!(out, "{source}")?;
        }

        let interpreter = self.context.interpreter().clone();
        let mut exit_code = None;
        let mut written = Ok(());

        interpreter.evaluate_each(source, &mut self.context, |context, outcome| {
            if written.is_ok() {
                written = write_outcome(context, outcome, out, err, &mut exit_code);
            }
        });
        written?;
        write_diagnostics(&mut self.context, err)?;

        out.flush()?;
        Ok(exit_code)
    }

    /// Runs a script file one line at a time. Returns the exit code.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the script.
    /// * `out` - Destination for produced values.
    /// * `err` - Destination for reported errors.
    pub fn run_script(
        &mut self,
        path: &Path,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<i32, ShellError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ShellError::ScriptReadError(path.to_owned(), e))?;

        for line in contents.lines() {
            if let Some(code) = self.run_string(line, out, err)? {
                return Ok(code);
            }
        }

        Ok(0)
    }

    /// Reads and evaluates lines until end of input or an exit request. Returns the exit
    /// code.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of input lines.
    /// * `out` - Destination for produced values.
    /// * `err` - Destination for reported errors.
    pub fn run_interactively<R: BufRead>(
        &mut self,
        reader: &mut LineReader<R>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<i32, ShellError> {
        loop {
            let prompt = std::format!("{}> ", self.context.working_dir().display());

            match reader.read_line(&prompt)? {
                ReadResult::Input(line) => {
                    if let Some(code) = self.run_string(&line, out, err)? {
                        return Ok(code);
                    }
                }
                ReadResult::Eof => {
                    if reader.is_interactive() {
                        writeln!(out)?;
                    }
                    return Ok(0);
                }
            }
        }
    }

    fn echo_enabled(&self) -> bool {
        self.context
            .peek_option(options::ECHO)
            .is_ok_and(|value| *value == Value::from("on"))
    }
}

/// Writes the errors a statement reported, then the statement's own outcome.
fn write_outcome(
    context: &mut ExecutionContext,
    outcome: EvalOutcome,
    out: &mut impl Write,
    err: &mut impl Write,
    exit_code: &mut Option<i32>,
) -> std::io::Result<()> {
    write_diagnostics(context, err)?;

    match outcome {
        EvalOutcome::Value(value) => formatter::write_value(out, &value),
        EvalOutcome::Failed(e) => writeln!(err, "{}", formatter::format_error(&e)),
        EvalOutcome::ExitRequested(code) => {
            *exit_code = Some(code);
            Ok(())
        }
    }
}

fn write_diagnostics(context: &mut ExecutionContext, err: &mut impl Write) -> std::io::Result<()> {
    for diagnostic in context.take_diagnostics() {
        writeln!(err, "{}", formatter::format_error(&diagnostic))?;
    }
    Ok(())
}
