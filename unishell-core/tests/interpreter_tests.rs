//! Integration tests for the evaluation pipeline.

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;
use unishell_core::{
    ErrorCategory, EvalOutcome, ExecutionContext, ExecutionResult, Interpreter,
    InterpreterOptions, MissingVariablePolicy, ParserOptions, SimpleCommand, Value, ast,
};

fn test_context(interpreter: Interpreter) -> ExecutionContext {
    let mut ctx = ExecutionContext::new(interpreter);

    ctx.set_cmd(
        "echo",
        Arc::new(SimpleCommand::new(
            "join arguments",
            |args: Vec<Value>, _, _| Ok(Value::List(args).into()),
        )),
    );

    ctx.set_cmd(
        "describe",
        Arc::new(SimpleCommand::new(
            "report arguments and flags",
            |args: Vec<Value>, flags: &[ast::Flag], _| {
                let flags = flags.iter().map(|f| Value::from(f.name.as_str())).collect();
                Ok(Value::List(vec![Value::List(args), Value::List(flags)]).into())
            },
        )),
    );

    ctx.set_cmd(
        "quit",
        Arc::new(SimpleCommand::new("exit", |args: Vec<Value>, _, _| {
            let code = args.first().and_then(Value::as_integer).unwrap_or(0);
            Ok(ExecutionResult::exit(i32::try_from(code).unwrap_or(1)))
        })),
    );

    ctx.set_cmd(
        "setvar",
        Arc::new(SimpleCommand::new(
            "set a variable",
            |mut args: Vec<Value>, _, ctx: &mut ExecutionContext| {
                let value = args.pop().unwrap_or_default();
                let name = args.pop().unwrap_or_default().to_string();
                ctx.set_var(name, value, false);
                Ok(ExecutionResult::unit())
            },
        )),
    );

    ctx
}

fn values(outcomes: &[EvalOutcome]) -> Vec<Option<&Value>> {
    outcomes.iter().map(EvalOutcome::value).collect()
}

#[test]
fn interpolates_variables() {
    let mut ctx = test_context(Interpreter::default());
    ctx.set_var("x", 5, false);

    let outcomes = Interpreter::default().evaluate(r#""a$x b""#, &mut ctx);
    assert_eq!(values(&outcomes), vec![Some(&Value::from("a5 b"))]);
}

#[test]
fn interpolates_nested_commands() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate(
        r#""$(echo hi)"; "[$(echo $(echo a b) c)]""#,
        &mut ctx,
    );
    assert_eq!(
        values(&outcomes),
        vec![Some(&Value::from("hi")), Some(&Value::from("[a b c]"))]
    );
}

#[test]
fn flags_do_not_reorder_arguments() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate("describe name -x value --all", &mut ctx);
    assert_eq!(
        values(&outcomes),
        vec![Some(&Value::List(vec![
            Value::List(vec![Value::from("name"), Value::from("value")]),
            Value::List(vec![Value::from("x"), Value::from("all")]),
        ]))]
    );
}

#[test]
fn side_effects_visible_to_later_statements() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate("setvar greeting hello\necho $greeting", &mut ctx);
    assert_eq!(
        values(&outcomes),
        vec![Some(&Value::Unit), Some(&Value::List(vec![Value::from("hello")]))]
    );
}

#[test]
fn unknown_command_is_contained() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate("frobnicate 1 2; echo after", &mut ctx);
    assert_eq!(outcomes.len(), 2);
    assert_eq!(
        outcomes[0].error().map(unishell_core::Error::category),
        Some(ErrorCategory::UnknownCommand)
    );
    assert_eq!(
        outcomes[1].value(),
        Some(&Value::List(vec![Value::from("after")]))
    );
}

#[test]
fn missing_variable_is_lookup_error_by_default() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate("$nope", &mut ctx);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(
        outcomes[0].error().map(unishell_core::Error::category),
        Some(ErrorCategory::LookupError)
    );
}

#[test]
fn missing_variable_can_be_empty() {
    let interpreter = Interpreter::builder()
        .options(InterpreterOptions {
            missing_variable: MissingVariablePolicy::EmptyString,
            ..InterpreterOptions::default()
        })
        .build();
    let mut ctx = test_context(interpreter.clone());

    let outcomes = interpreter.evaluate(r#"$nope; "<$nope>""#, &mut ctx);
    assert_eq!(
        values(&outcomes),
        vec![Some(&Value::from("")), Some(&Value::from("<>"))]
    );
}

#[test]
fn failed_substitution_is_contained_by_enclosing_command() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate("echo a $(frobnicate) b", &mut ctx);
    assert_eq!(outcomes.len(), 1);

    let value = outcomes[0].value().cloned().unwrap_or_default();
    assert_eq!(
        value,
        Value::List(vec![Value::from("a"), Value::Unit, Value::from("b")])
    );
    assert_eq!(value.to_string(), "a  b");

    let diagnostics = ctx.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].category(), ErrorCategory::UnknownCommand);
}

#[test]
fn failed_substitution_in_string_is_contained() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate(r#""[$(frobnicate)]"; echo after"#, &mut ctx);
    assert_eq!(
        values(&outcomes),
        vec![
            Some(&Value::from("[]")),
            Some(&Value::List(vec![Value::from("after")]))
        ]
    );
    assert_eq!(ctx.take_diagnostics().len(), 1);
}

#[test]
fn missing_variable_in_arguments_fails_statement() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate("echo $nope; echo ok", &mut ctx);
    assert_eq!(
        outcomes[0].error().map(unishell_core::Error::category),
        Some(ErrorCategory::LookupError)
    );
    assert_eq!(
        outcomes[1].value(),
        Some(&Value::List(vec![Value::from("ok")]))
    );
    assert!(ctx.take_diagnostics().is_empty());
}

#[test]
fn diagnostics_arrive_with_their_statement() {
    let mut ctx = test_context(Interpreter::default());
    let mut seen = vec![];

    Interpreter::default().evaluate_each(
        "echo $(frobnicate); echo fine; echo $(nope) $(nope)",
        &mut ctx,
        |ctx, outcome| seen.push((outcome.value().is_some(), ctx.take_diagnostics().len())),
    );

    assert_eq!(seen, vec![(true, 1), (true, 0), (true, 2)]);
}

#[test]
fn syntax_error_on_single_line_runs_nothing() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate("setvar a 1; echo \"unterminated", &mut ctx);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(
        outcomes[0].error().map(unishell_core::Error::category),
        Some(ErrorCategory::SyntaxError)
    );
    assert!(ctx.get_var("a").is_none());
}

#[test]
fn syntax_error_does_not_stop_other_lines() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate(
        "setvar a 1\necho \"unterminated\nsetvar b 2\n",
        &mut ctx,
    );
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].value(), Some(&Value::Unit));
    assert_eq!(
        outcomes[1].error().map(unishell_core::Error::category),
        Some(ErrorCategory::SyntaxError)
    );
    assert_eq!(outcomes[2].value(), Some(&Value::Unit));
    assert_eq!(ctx.get_var("a"), Some(&Value::Integer(1)));
    assert_eq!(ctx.get_var("b"), Some(&Value::Integer(2)));
}

#[test]
fn evaluating_interpreter_options_apply() {
    let lenient = Interpreter::builder()
        .options(InterpreterOptions {
            missing_variable: MissingVariablePolicy::EmptyString,
            ..InterpreterOptions::default()
        })
        .build();
    let mut ctx = test_context(Interpreter::default());

    let outcomes = lenient.evaluate(r#""<$nope>""#, &mut ctx);
    assert_eq!(values(&outcomes), vec![Some(&Value::from("<>"))]);

    assert_eq!(
        ctx.interpreter().options().missing_variable,
        MissingVariablePolicy::Error
    );
    let outcomes = Interpreter::default().evaluate(r#""<$nope>""#, &mut ctx);
    assert_eq!(
        outcomes[0].error().map(unishell_core::Error::category),
        Some(ErrorCategory::LookupError)
    );
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let mut ctx = test_context(Interpreter::default());
    let depth = 20_000;
    let source = format!("echo {}x{}", "$(echo ".repeat(depth), ")".repeat(depth));

    let outcomes = Interpreter::default().evaluate(&source, &mut ctx);
    assert_eq!(outcomes.len(), 1);
    assert_eq!(
        outcomes[0].error().map(unishell_core::Error::category),
        Some(ErrorCategory::SyntaxError)
    );
}

#[test]
fn exit_stops_evaluation() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate("echo 1; quit 3; setvar a 1", &mut ctx);
    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[1], EvalOutcome::ExitRequested(3)));
    assert!(ctx.get_var("a").is_none());
}

#[test]
fn exit_inside_substitution_propagates() {
    let mut ctx = test_context(Interpreter::default());

    let outcomes = Interpreter::default().evaluate(r#"echo "$(quit 4)"; echo no"#, &mut ctx);
    assert_eq!(outcomes.len(), 1);
    assert!(matches!(outcomes[0], EvalOutcome::ExitRequested(4)));
}

#[test]
fn recursion_is_bounded() {
    let interpreter = Interpreter::builder()
        .options(InterpreterOptions {
            max_depth: 20,
            ..InterpreterOptions::default()
        })
        .build();
    let mut ctx = test_context(interpreter.clone());

    ctx.set_cmd(
        "again",
        Arc::new(SimpleCommand::new(
            "re-enter evaluation forever",
            |_, _, ctx: &mut ExecutionContext| {
                let outcomes = ctx.evaluate("again")?;
                match outcomes.into_iter().next() {
                    Some(EvalOutcome::Failed(err)) => Err(err),
                    _ => Ok(ExecutionResult::unit()),
                }
            },
        )),
    );

    let outcomes = interpreter.evaluate("again; echo ok", &mut ctx);
    assert_eq!(outcomes.len(), 2);
    assert_eq!(
        outcomes[0].error().map(unishell_core::Error::category),
        Some(ErrorCategory::EvaluationError)
    );
    assert_eq!(
        outcomes[1].value(),
        Some(&Value::List(vec![Value::from("ok")]))
    );
}

#[test]
fn evaluation_is_repeatable() {
    let mut ctx = test_context(Interpreter::default());
    ctx.set_var("name", "world", false);

    let source = r#"echo "hello $name" 1 2.0; "$(echo x)""#;
    let first: Vec<_> = Interpreter::default()
        .evaluate(source, &mut ctx)
        .iter()
        .map(|o| o.value().cloned())
        .collect();
    let second: Vec<_> = Interpreter::default()
        .evaluate(source, &mut ctx)
        .iter()
        .map(|o| o.value().cloned())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn escapes_follow_parser_options() -> Result<()> {
    let raw = Interpreter::builder()
        .parser_options(ParserOptions {
            unescape_strings: false,
            ..ParserOptions::default()
        })
        .build();
    let mut ctx = test_context(raw.clone());

    let outcomes = raw.evaluate(r#""a\tb""#, &mut ctx);
    assert_eq!(values(&outcomes), vec![Some(&Value::from(r"a\tb"))]);

    let outcomes = Interpreter::default().evaluate(r#""a\tb""#, &mut ctx);
    assert_eq!(values(&outcomes), vec![Some(&Value::from("a\tb"))]);

    Ok(())
}
