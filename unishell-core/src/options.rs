//! Script options, each backed by a stack of values.
//!
//! An option must be declared with a default value before it can be pushed. The default
//! sits at the bottom of the option's stack and can never be popped, so every declared
//! option always has a current value.

use std::collections::HashMap;

use crate::{ErrorKind, Value, error, trace_categories};

/// Name of the option controlling whether input lines are echoed before evaluation.
pub const ECHO: &str = "echo";

/// Table of declared options and their value stacks.
#[derive(Clone, Debug, Default)]
pub struct OptionTable {
    stacks: HashMap<String, Vec<Value>>,
}

impl OptionTable {
    /// Returns a table with the standard options declared.
    pub fn with_defaults() -> Self {
        let mut table = Self::default();
        table.declare(ECHO, "off");
        table
    }

    /// Declares an option, replacing any existing stack with one holding only `default`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the option.
    /// * `default` - The option's default value.
    pub fn declare(&mut self, name: impl Into<String>, default: impl Into<Value>) {
        self.stacks.insert(name.into(), vec![default.into()]);
    }

    /// Pushes a new current value for the named option.
    pub fn push(&mut self, name: &str, value: Value) -> Result<(), error::Error> {
        let stack = self
            .stacks
            .get_mut(name)
            .ok_or_else(|| ErrorKind::OptionNotDeclared(name.to_owned()))?;

        tracing::debug!(target: trace_categories::OPTIONS, "push {name}={value}");
        stack.push(value);

        Ok(())
    }

    /// Returns the current value of the named option.
    pub fn peek(&self, name: &str) -> Result<&Value, error::Error> {
        self.stacks
            .get(name)
            .and_then(|stack| stack.last())
            .ok_or_else(|| ErrorKind::OptionNotDeclared(name.to_owned()).into())
    }

    /// Removes and returns the current value of the named option. Fails, leaving the
    /// stack untouched, if only the default remains.
    pub fn pop(&mut self, name: &str) -> Result<Value, error::Error> {
        let stack = self
            .stacks
            .get_mut(name)
            .ok_or_else(|| ErrorKind::OptionNotDeclared(name.to_owned()))?;

        if stack.len() <= 1 {
            return Err(ErrorKind::OptionAtDefault(name.to_owned()).into());
        }

        let value = stack.pop().unwrap_or_default();
        tracing::debug!(target: trace_categories::OPTIONS, "pop {name}={value}");

        Ok(value)
    }

    /// Returns the names of all declared options, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.stacks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
