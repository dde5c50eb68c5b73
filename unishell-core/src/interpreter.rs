//! The top-level evaluation pipeline.

use unishell_parser::{Parser, ParserOptions, ast};

use crate::interp::Evaluate;
use crate::results::ExecutionControlFlow;
use crate::{ExecutionContext, Value, error, trace_categories};

/// Default limit on nested command invocations.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Behavior when a variable reference names a variable that is not set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MissingVariablePolicy {
    /// Fail with a lookup error.
    #[default]
    Error,
    /// Substitute the empty string.
    EmptyString,
}

/// Options controlling evaluation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct InterpreterOptions {
    /// Behavior of references to unset variables.
    pub missing_variable: MissingVariablePolicy,
    /// Maximum nesting of command invocations and nested evaluations.
    pub max_depth: usize,
}

impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            missing_variable: MissingVariablePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The outcome of evaluating one top-level statement.
#[derive(Debug)]
pub enum EvalOutcome {
    /// The statement produced a value.
    Value(Value),
    /// The statement failed; later statements still ran.
    Failed(error::Error),
    /// The statement requested that the shell exit with the given code; no later
    /// statements ran.
    ExitRequested(i32),
}

impl EvalOutcome {
    /// Returns the produced value, if the statement succeeded.
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error, if the statement failed.
    pub const fn error(&self) -> Option<&error::Error> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Parses and evaluates unishell source text.
///
/// An interpreter is immutable once built and cheap to clone; all session state lives in
/// the [`ExecutionContext`] passed to [`Interpreter::evaluate`].
#[derive(Clone, Debug, Default, bon::Builder)]
pub struct Interpreter {
    /// Options for parsing.
    #[builder(default)]
    parser_options: ParserOptions,
    /// Options for evaluation.
    #[builder(default)]
    options: InterpreterOptions,
}

impl Interpreter {
    /// Returns the parser options in use.
    pub const fn parser_options(&self) -> &ParserOptions {
        &self.parser_options
    }

    /// Returns the evaluation options in use.
    pub const fn options(&self) -> &InterpreterOptions {
        &self.options
    }

    /// Returns a parser configured with this interpreter's options.
    pub fn parser(&self) -> Parser {
        Parser::new(&self.parser_options)
    }

    /// Parses and evaluates the given source text.
    ///
    /// Returns one outcome per non-empty statement, in source order. Evaluation stops after
    /// the first statement that requests an exit. See [`Interpreter::evaluate_each`] for
    /// how syntax errors are handled.
    ///
    /// # Arguments
    ///
    /// * `source` - The program text.
    /// * `context` - The context to evaluate against.
    pub fn evaluate(&self, source: &str, context: &mut ExecutionContext) -> Vec<EvalOutcome> {
        let mut outcomes = vec![];
        self.evaluate_each(source, context, |_, outcome| outcomes.push(outcome));
        outcomes
    }

    /// Parses and evaluates the given source text, handing each statement's outcome to
    /// `on_outcome` as soon as the statement completes. The handler also receives the
    /// context, so errors the statement reported through
    /// [`ExecutionContext::report_error`] can be drained alongside its outcome.
    ///
    /// If the source fails to parse as a whole, each line is parsed and evaluated on its
    /// own: lines that fail to parse yield a failed outcome and the remaining lines still
    /// run. A single line that fails to parse runs nothing.
    ///
    /// This interpreter's options govern the whole evaluation, including nested
    /// evaluations started through [`ExecutionContext::evaluate`].
    ///
    /// # Arguments
    ///
    /// * `source` - The program text.
    /// * `context` - The context to evaluate against.
    /// * `on_outcome` - Receives each outcome, in source order.
    pub fn evaluate_each(
        &self,
        source: &str,
        context: &mut ExecutionContext,
        mut on_outcome: impl FnMut(&mut ExecutionContext, EvalOutcome),
    ) {
        self.scoped(context, |context| {
            let parser = self.parser();

            let err = match parser.parse_program(source) {
                Ok(program) => {
                    run_statements(&program, context, &mut on_outcome);
                    return;
                }
                Err(err) => err,
            };

            tracing::debug!(target: trace_categories::PARSE, "syntax error: {err}");

            if !source.trim_end().contains('\n') {
                on_outcome(context, EvalOutcome::Failed(err.into()));
                return;
            }

            for line in source.lines() {
                let exited = match parser.parse_program(line) {
                    Ok(program) => run_statements(&program, context, &mut on_outcome),
                    Err(err) => {
                        on_outcome(context, EvalOutcome::Failed(err.into()));
                        false
                    }
                };

                if exited {
                    break;
                }
            }
        });
    }

    /// Evaluates an already-parsed program.
    ///
    /// # Arguments
    ///
    /// * `program` - The program to evaluate.
    /// * `context` - The context to evaluate against.
    pub fn evaluate_program(
        &self,
        program: &ast::Program,
        context: &mut ExecutionContext,
    ) -> Vec<EvalOutcome> {
        let mut outcomes = Vec::with_capacity(program.statements.len());
        self.scoped(context, |context| {
            run_statements(
                program,
                context,
                &mut |_: &mut ExecutionContext, outcome: EvalOutcome| outcomes.push(outcome),
            );
        });
        outcomes
    }

    /// Runs `f` with this interpreter installed in the context, restoring the context's
    /// own interpreter afterwards.
    fn scoped<R>(
        &self,
        context: &mut ExecutionContext,
        f: impl FnOnce(&mut ExecutionContext) -> R,
    ) -> R {
        let previous = context.replace_interpreter(self.clone());
        let result = f(context);
        context.replace_interpreter(previous);
        result
    }
}

/// Evaluates statements in order, stopping after an exit request. Returns whether an exit
/// was requested.
fn run_statements(
    program: &ast::Program,
    context: &mut ExecutionContext,
    on_outcome: &mut impl FnMut(&mut ExecutionContext, EvalOutcome),
) -> bool {
    for statement in &program.statements {
        match statement.evaluate(context) {
            Ok(result) => match result.next_control_flow {
                ExecutionControlFlow::Normal => {
                    on_outcome(context, EvalOutcome::Value(result.value));
                }
                ExecutionControlFlow::ExitShell(code) => {
                    on_outcome(context, EvalOutcome::ExitRequested(code));
                    return true;
                }
            },
            Err(err) => {
                tracing::debug!(target: trace_categories::COMMANDS, "statement failed: {err}");
                on_outcome(context, EvalOutcome::Failed(err));
            }
        }
    }

    false
}
