//! Session variables.

use crate::Value;

/// A variable stored in an execution context.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    value: Value,
    exported: bool,
}

impl Variable {
    /// Returns a new variable.
    ///
    /// # Arguments
    ///
    /// * `value` - The variable's value.
    /// * `exported` - Whether the variable is exported to child processes.
    pub fn new(value: impl Into<Value>, exported: bool) -> Self {
        Self {
            value: value.into(),
            exported,
        }
    }

    /// Returns the variable's value.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns whether the variable is exported.
    pub const fn is_exported(&self) -> bool {
        self.exported
    }

    /// Marks the variable as exported.
    pub const fn export(&mut self) {
        self.exported = true;
    }
}
