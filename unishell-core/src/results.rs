//! Encapsulation of execution results.

use crate::Value;

/// Represents the result of evaluating a node or invoking a command.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExecutionResult {
    /// The value produced.
    pub value: Value,
    /// The control flow transition to apply after execution.
    pub next_control_flow: ExecutionControlFlow,
}

impl ExecutionResult {
    /// Returns a new `ExecutionResult` carrying the given value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value produced.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            next_control_flow: ExecutionControlFlow::Normal,
        }
    }

    /// Returns a new `ExecutionResult` with no value.
    pub const fn unit() -> Self {
        Self {
            value: Value::Unit,
            next_control_flow: ExecutionControlFlow::Normal,
        }
    }

    /// Returns a new `ExecutionResult` requesting that the shell exit.
    ///
    /// # Arguments
    ///
    /// * `code` - The exit code to report to the caller of the shell.
    pub const fn exit(code: i32) -> Self {
        Self {
            value: Value::Unit,
            next_control_flow: ExecutionControlFlow::ExitShell(code),
        }
    }

    /// Returns whether the execution result indicates normal control flow.
    pub const fn is_normal_flow(&self) -> bool {
        matches!(self.next_control_flow, ExecutionControlFlow::Normal)
    }
}

impl From<Value> for ExecutionResult {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Represents a control flow transition to apply.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExecutionControlFlow {
    /// Continue normal execution.
    #[default]
    Normal,
    /// Exit the shell with the given code.
    ExitShell(i32),
}
