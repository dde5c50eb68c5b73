//! Evaluation of AST nodes.

use unishell_parser::ast;

use crate::interpreter::MissingVariablePolicy;
use crate::{ErrorKind, ExecutionContext, ExecutionResult, Value, commands, error, trace_categories};

/// Represents an AST node that can be evaluated against a context.
pub trait Evaluate {
    /// Evaluates the node.
    ///
    /// # Arguments
    ///
    /// * `context` - The context to evaluate against.
    fn evaluate(&self, context: &mut ExecutionContext) -> Result<ExecutionResult, error::Error>;
}

impl Evaluate for ast::Node {
    fn evaluate(&self, context: &mut ExecutionContext) -> Result<ExecutionResult, error::Error> {
        match self {
            Self::Literal(literal) => literal.evaluate(context),
            Self::Flag(flag) => Err(ErrorKind::UnexpectedFlag(flag.to_string()).into()),
            Self::VarLookup(lookup) => lookup.evaluate(context),
            Self::InterpolatedString(s) => s.evaluate(context),
            Self::Command(command) => command.evaluate(context),
        }
    }
}

impl Evaluate for ast::Literal {
    fn evaluate(&self, _context: &mut ExecutionContext) -> Result<ExecutionResult, error::Error> {
        Ok(Value::from(self).into())
    }
}

impl Evaluate for ast::VarLookup {
    fn evaluate(&self, context: &mut ExecutionContext) -> Result<ExecutionResult, error::Error> {
        if let Some(value) = context.get_var(&self.name) {
            return Ok(value.clone().into());
        }

        match context.interpreter().options().missing_variable {
            MissingVariablePolicy::Error => {
                Err(ErrorKind::VariableNotFound(self.name.clone()).into())
            }
            MissingVariablePolicy::EmptyString => Ok(Value::from("").into()),
        }
    }
}

impl Evaluate for ast::InterpolatedString {
    fn evaluate(&self, context: &mut ExecutionContext) -> Result<ExecutionResult, error::Error> {
        let mut result = String::new();

        for part in &self.parts {
            match part {
                ast::StringPart::Text(text) => result.push_str(text),
                ast::StringPart::Node(node) => {
                    let evaluated = evaluate_embedded(node, context)?;
                    if !evaluated.is_normal_flow() {
                        return Ok(evaluated);
                    }

                    tracing::debug!(
                        target: trace_categories::INTERPOLATION,
                        "{node} => '{}'",
                        evaluated.value
                    );

                    result.push_str(&evaluated.value.to_string());
                }
            }
        }

        Ok(Value::String(result).into())
    }
}

impl Evaluate for ast::Command {
    fn evaluate(&self, context: &mut ExecutionContext) -> Result<ExecutionResult, error::Error> {
        context.enter_nested()?;
        let result = invoke_command(self, context);
        context.leave_nested();

        result
    }
}

fn invoke_command(
    command: &ast::Command,
    context: &mut ExecutionContext,
) -> Result<ExecutionResult, error::Error> {
    // Arguments are evaluated fresh on every invocation, strictly left to right.
    let mut args = Vec::with_capacity(command.args().len());
    for arg in command.args() {
        let evaluated = evaluate_embedded(arg, context)?;
        if !evaluated.is_normal_flow() {
            return Ok(evaluated);
        }

        args.push(evaluated.value);
    }

    commands::dispatch(context, command.name(), args, command.flags())
}

/// Evaluates a node embedded in a command's arguments or in an interpolated string. A
/// command that fails here is reported through the context and yields unit, so the
/// enclosing command or string still completes; other failures propagate.
fn evaluate_embedded(
    node: &ast::Node,
    context: &mut ExecutionContext,
) -> Result<ExecutionResult, error::Error> {
    let ast::Node::Command(command) = node else {
        return node.evaluate(context);
    };

    match command.evaluate(context) {
        Ok(result) => Ok(result),
        Err(err) => {
            tracing::debug!(target: trace_categories::COMMANDS, "{node} failed: {err}");
            context.report_error(err);
            Ok(ExecutionResult::unit())
        }
    }
}
