//! The mutable state of a unishell session.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::commands::Command;
use crate::options::OptionTable;
use crate::variables::Variable;
use crate::{ErrorKind, EvalOutcome, Interpreter, Value, error};

/// Holds the variables, registered commands, and option stacks of a session.
///
/// A context is mutated by the commands it dispatches to. Exactly one evaluation may be in
/// flight against a context at any time.
pub struct ExecutionContext {
    variables: HashMap<String, Variable>,
    commands: HashMap<String, Arc<dyn Command>>,
    options: OptionTable,
    working_dir: PathBuf,
    depth: usize,
    interpreter: Interpreter,
    diagnostics: Vec<error::Error>,
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new(Interpreter::default())
    }
}

impl ExecutionContext {
    /// Returns a new context with no variables or commands, the standard options
    /// declared, and the process's current directory as its working directory.
    ///
    /// # Arguments
    ///
    /// * `interpreter` - The interpreter used when commands re-enter evaluation.
    pub fn new(interpreter: Interpreter) -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Self {
            variables: HashMap::new(),
            commands: HashMap::new(),
            options: OptionTable::with_defaults(),
            working_dir,
            depth: 0,
            interpreter,
            diagnostics: vec![],
        }
    }

    /// Returns the interpreter associated with this context.
    pub const fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub(crate) fn replace_interpreter(&mut self, interpreter: Interpreter) -> Interpreter {
        std::mem::replace(&mut self.interpreter, interpreter)
    }

    /// Records an error that was contained inside a statement, such as a failed command
    /// substitution, so that the caller can report it.
    pub fn report_error(&mut self, err: error::Error) {
        self.diagnostics.push(err);
    }

    /// Returns and clears the errors recorded by [`Self::report_error`], oldest first.
    pub fn take_diagnostics(&mut self) -> Vec<error::Error> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Parses and evaluates the given source text in this context, as a nested
    /// evaluation. The outer evaluation's depth limit applies.
    ///
    /// # Arguments
    ///
    /// * `source` - The program text to evaluate.
    pub fn evaluate(&mut self, source: &str) -> Result<Vec<EvalOutcome>, error::Error> {
        let interpreter = self.interpreter.clone();

        self.enter_nested()?;
        let outcomes = interpreter.evaluate(source, self);
        self.leave_nested();

        Ok(outcomes)
    }

    pub(crate) fn enter_nested(&mut self) -> Result<(), error::Error> {
        let max_depth = self.interpreter.options().max_depth;
        if self.depth >= max_depth {
            return Err(ErrorKind::MaxEvaluationDepthExceeded(max_depth).into());
        }

        self.depth += 1;
        Ok(())
    }

    pub(crate) const fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    //
    // Variables
    //

    /// Returns the value of the named variable, if set.
    pub fn get_var(&self, name: &str) -> Option<&Value> {
        self.variables.get(name).map(Variable::value)
    }

    /// Sets a variable, replacing any existing variable of the same name.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the variable.
    /// * `value` - The new value.
    /// * `exported` - Whether the variable is exported to child processes.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<Value>, exported: bool) {
        self.variables
            .insert(name.into(), Variable::new(value, exported));
    }

    /// Removes the named variable, returning it if it was set.
    pub fn del_var(&mut self, name: &str) -> Option<Variable> {
        self.variables.remove(name)
    }

    /// Returns whether the named variable is set and exported.
    pub fn is_exported(&self, name: &str) -> bool {
        self.variables.get(name).is_some_and(Variable::is_exported)
    }

    /// Marks an existing variable as exported. Returns whether the variable was found.
    pub fn export_var(&mut self, name: &str) -> bool {
        match self.variables.get_mut(name) {
            Some(var) => {
                var.export();
                true
            }
            None => false,
        }
    }

    /// Returns the names of all variables, sorted.
    pub fn var_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the names and values of exported variables, sorted by name.
    pub fn exported_vars(&self) -> Vec<(&str, &Value)> {
        let mut vars: Vec<_> = self
            .variables
            .iter()
            .filter(|(_, var)| var.is_exported())
            .map(|(name, var)| (name.as_str(), var.value()))
            .collect();
        vars.sort_unstable_by_key(|(name, _)| *name);
        vars
    }

    //
    // Commands
    //

    /// Returns the command registered under the given name.
    pub fn get_cmd(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.get(name).cloned()
    }

    /// Registers a command, replacing any command of the same name.
    pub fn set_cmd(&mut self, name: impl Into<String>, command: Arc<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    /// Unregisters the named command, returning it if it was registered.
    pub fn del_cmd(&mut self, name: &str) -> Option<Arc<dyn Command>> {
        self.commands.remove(name)
    }

    /// Returns the names of all registered commands, sorted.
    pub fn cmd_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    //
    // Options
    //

    /// Declares an option with the given default value.
    pub fn declare_option(&mut self, name: impl Into<String>, default: impl Into<Value>) {
        self.options.declare(name, default);
    }

    /// Pushes a new current value onto the named option's stack.
    pub fn push_option(&mut self, name: &str, value: impl Into<Value>) -> Result<(), error::Error> {
        self.options.push(name, value.into())
    }

    /// Returns the current value of the named option.
    pub fn peek_option(&self, name: &str) -> Result<&Value, error::Error> {
        self.options.peek(name)
    }

    /// Pops the current value off the named option's stack.
    pub fn pop_option(&mut self, name: &str) -> Result<Value, error::Error> {
        self.options.pop(name)
    }

    /// Returns the names of all declared options, sorted.
    pub fn option_names(&self) -> Vec<&str> {
        self.options.names()
    }

    //
    // Working directory
    //

    /// Returns the working directory used to resolve relative paths.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Sets the working directory; relative paths are resolved against the current one.
    /// The target must be an existing directory.
    pub fn set_working_dir(&mut self, target: impl AsRef<Path>) -> Result<(), error::Error> {
        let path = self.absolute_path(target);

        let metadata =
            std::fs::metadata(&path).map_err(|e| ErrorKind::PathIo(path.clone(), e))?;
        if !metadata.is_dir() {
            return Err(ErrorKind::PathIo(
                path,
                std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
            )
            .into());
        }

        self.working_dir = path.canonicalize().unwrap_or(path);
        Ok(())
    }

    /// Resolves a path against the working directory.
    pub fn absolute_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            self.working_dir.clone()
        } else {
            self.working_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;

    #[test]
    fn variables_last_write_wins() {
        let mut ctx = ExecutionContext::default();

        ctx.set_var("b", 1, false);
        ctx.set_var("a", "x", true);
        ctx.set_var("b", 2, false);

        assert_eq!(ctx.get_var("b"), Some(&Value::Integer(2)));
        assert_eq!(ctx.var_names(), vec!["a", "b"]);
        assert!(ctx.is_exported("a"));
        assert!(!ctx.is_exported("b"));
        assert!(!ctx.is_exported("missing"));
        assert_eq!(ctx.exported_vars(), vec![("a", &Value::from("x"))]);

        assert!(ctx.del_var("a").is_some());
        assert!(ctx.del_var("a").is_none());
        assert_eq!(ctx.var_names(), vec!["b"]);
    }

    #[test]
    fn export_existing_variable() {
        let mut ctx = ExecutionContext::default();

        ctx.set_var("v", 1, false);
        assert!(ctx.export_var("v"));
        assert!(ctx.is_exported("v"));
        assert!(!ctx.export_var("other"));
    }

    #[test]
    fn options_through_context() -> Result<()> {
        let mut ctx = ExecutionContext::default();

        assert_eq!(ctx.option_names(), vec!["echo"]);
        ctx.push_option("echo", "on")?;
        assert_eq!(ctx.peek_option("echo")?, &Value::from("on"));
        assert!(ctx.push_option("undeclared", 1).is_err());

        ctx.declare_option("undeclared", 0);
        ctx.push_option("undeclared", 1)?;
        assert_eq!(ctx.pop_option("undeclared")?, Value::Integer(1));

        Ok(())
    }

    #[test]
    fn diagnostics_are_drained_in_order() {
        let mut ctx = ExecutionContext::default();
        assert!(ctx.take_diagnostics().is_empty());

        ctx.report_error(ErrorKind::CommandNotFound("a".into()).into());
        ctx.report_error(ErrorKind::VariableNotFound("b".into()).into());

        let messages: Vec<_> = ctx
            .take_diagnostics()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec!["command not found: a", "variable not set: b"]
        );
        assert!(ctx.take_diagnostics().is_empty());
    }

    #[test]
    fn working_dir_changes_are_relative() -> Result<()> {
        let mut ctx = ExecutionContext::default();
        let start = ctx.working_dir().to_path_buf();

        ctx.set_working_dir(std::env::temp_dir())?;
        let temp = ctx.working_dir().to_path_buf();

        ctx.set_working_dir("..")?;
        assert_ne!(ctx.working_dir(), temp);

        assert!(ctx.set_working_dir("definitely-not-a-dir-here").is_err());
        assert!(!start.as_os_str().is_empty());

        Ok(())
    }
}
