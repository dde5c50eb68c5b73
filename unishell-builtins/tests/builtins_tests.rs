//! Integration tests for the default builtins.

use anyhow::Result;
use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use unishell_core::{ErrorCategory, EvalOutcome, ExecutionContext, Interpreter, Value};

struct TestShell {
    interpreter: Interpreter,
    context: ExecutionContext,
}

impl TestShell {
    fn new() -> Self {
        let interpreter = Interpreter::default();
        let mut context = ExecutionContext::new(interpreter.clone());
        unishell_builtins::register_default_builtins(&mut context);

        Self {
            interpreter,
            context,
        }
    }

    fn run(&mut self, source: &str) -> Vec<EvalOutcome> {
        self.interpreter.evaluate(source, &mut self.context)
    }

    /// Runs a single statement and returns its value.
    fn value(&mut self, source: &str) -> Result<Value> {
        let mut outcomes = self.run(source);
        anyhow::ensure!(outcomes.len() == 1, "expected one outcome: {outcomes:?}");
        match outcomes.remove(0) {
            EvalOutcome::Value(value) => Ok(value),
            other => anyhow::bail!("unexpected outcome: {other:?}"),
        }
    }

    /// Runs a single statement and returns the category of its failure.
    fn failure(&mut self, source: &str) -> Option<ErrorCategory> {
        let outcomes = self.run(source);
        outcomes.first().and_then(EvalOutcome::error).map(unishell_core::Error::category)
    }
}

fn strings(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| Value::from(*s)).collect())
}

#[test]
fn echo_joins_arguments() -> Result<()> {
    let mut shell = TestShell::new();

    assert_eq!(shell.value("echo hello 1 2.5")?, Value::from("hello 1 2.5"));
    assert_eq!(shell.value("echo")?, Value::from(""));
    assert_eq!(shell.value(r#""$(echo hi)""#)?, Value::from("hi"));

    Ok(())
}

#[test]
fn set_and_export() -> Result<()> {
    let mut shell = TestShell::new();

    assert_eq!(shell.value("set a 1")?, Value::Unit);
    assert_eq!(shell.value("set -x b two")?, Value::Unit);
    assert_eq!(shell.value("$a")?, Value::Integer(1));
    assert!(shell.context.is_exported("b"));
    assert!(!shell.context.is_exported("a"));

    shell.value("export a")?;
    assert!(shell.context.is_exported("a"));

    shell.value("export c 3")?;
    assert_eq!(shell.context.get_var("c"), Some(&Value::Integer(3)));
    assert!(shell.context.is_exported("c"));

    assert_eq!(shell.failure("export missing"), Some(ErrorCategory::LookupError));

    Ok(())
}

#[test]
fn set_validates_arguments() {
    let mut shell = TestShell::new();

    assert_eq!(shell.failure("set a"), Some(ErrorCategory::ArgumentError));
    assert_eq!(shell.failure("set a b c"), Some(ErrorCategory::ArgumentError));
    assert_eq!(shell.failure("set 1 b"), Some(ErrorCategory::ArgumentError));
}

#[test]
fn unset_ignores_missing_names() -> Result<()> {
    let mut shell = TestShell::new();

    shell.value("set a 1")?;
    shell.value("unset a never_set")?;
    assert!(shell.context.get_var("a").is_none());

    Ok(())
}

#[test]
fn env_lists_variables() -> Result<()> {
    let mut shell = TestShell::new();

    shell.run("set b 2; set -x a \"x y\"");
    assert_eq!(shell.value("env")?, strings(&["(exported) a=x y", "b=2"]));

    Ok(())
}

#[test]
fn exit_codes() {
    let mut shell = TestShell::new();

    assert!(matches!(shell.run("exit")[..], [EvalOutcome::ExitRequested(0)]));
    assert!(matches!(shell.run("exit 7; echo no")[..], [EvalOutcome::ExitRequested(7)]));
    assert_eq!(shell.failure("exit abc"), Some(ErrorCategory::ArgumentError));
    assert_eq!(shell.failure("exit 1.5"), Some(ErrorCategory::ArgumentError));
    assert_eq!(shell.failure("exit 1 2"), Some(ErrorCategory::ArgumentError));
}

#[test]
fn option_stack() -> Result<()> {
    let mut shell = TestShell::new();

    shell.value("pushopt echo on")?;
    assert_eq!(shell.value("peekopt echo")?, Value::from("on"));
    assert_eq!(shell.value("popopt echo")?, Value::from("on"));
    assert_eq!(shell.value("peekopt echo")?, Value::from("off"));

    assert_eq!(shell.failure("popopt echo"), Some(ErrorCategory::OptionError));
    assert_eq!(shell.value("peekopt echo")?, Value::from("off"));

    assert_eq!(shell.failure("pushopt nope 1"), Some(ErrorCategory::OptionError));

    Ok(())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let mut shell = TestShell::new();

    let Value::List(lines) = shell.value("help")? else {
        anyhow::bail!("expected a list");
    };

    let names: Vec<String> = lines
        .iter()
        .map(|line| line.to_string().split('\t').next().unwrap_or_default().to_owned())
        .collect();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.iter().any(|n| n == "echo"));
    assert!(names.iter().any(|n| n == "popopt"));
    assert!(lines.contains(&Value::from("exit\tExit shell")));

    Ok(())
}

#[test]
fn clear_rejects_arguments() -> Result<()> {
    let mut shell = TestShell::new();

    assert_eq!(shell.value("clear")?, Value::from("\x1Bc"));
    assert_eq!(shell.failure("clear now"), Some(ErrorCategory::ArgumentError));

    Ok(())
}

#[test]
fn cd_ls_and_stat() -> Result<()> {
    let temp = assert_fs::TempDir::new()?;
    temp.child("b.txt").write_str("hello")?;
    temp.child("a.txt").write_str("")?;
    temp.child("sub").create_dir_all()?;

    let root = temp.path().canonicalize()?;

    let mut shell = TestShell::new();
    shell.context.set_var("root", root.to_string_lossy().into_owned(), false);

    let cwd = shell.value("cd $root")?;
    assert_eq!(cwd, Value::from(root.to_string_lossy().into_owned()));
    assert_eq!(shell.value("pwd")?, cwd);
    assert_eq!(shell.value("cd")?, cwd);

    assert_eq!(shell.value("ls")?, strings(&["a.txt", "b.txt", "sub"]));
    assert_eq!(shell.value("ls sub")?, strings(&[]));

    let Value::List(lines) = shell.value("stat b.txt")? else {
        anyhow::bail!("expected a list");
    };
    assert!(lines.contains(&Value::from("Name: b.txt")));
    assert!(lines.contains(&Value::from("Size: 5")));

    shell.value("cd sub")?;
    assert_eq!(
        shell.value("pwd")?,
        Value::from(root.join("sub").to_string_lossy().into_owned())
    );

    assert_eq!(shell.failure("cd missing"), Some(ErrorCategory::IoError));
    assert_eq!(shell.failure("stat"), Some(ErrorCategory::ArgumentError));
    assert_eq!(shell.failure("stat nothing_here"), Some(ErrorCategory::IoError));

    Ok(())
}

#[test]
fn eval_runs_nested_programs() -> Result<()> {
    let mut shell = TestShell::new();

    assert_eq!(
        shell.value(r#"eval "set v 3; echo $(echo nested)""#)?,
        Value::List(vec![Value::Unit, Value::from("nested")])
    );
    assert_eq!(shell.context.get_var("v"), Some(&Value::Integer(3)));

    assert_eq!(shell.failure("eval frobnicate"), Some(ErrorCategory::UnknownCommand));
    assert!(matches!(shell.run("eval \"exit 2\"; echo no")[..], [EvalOutcome::ExitRequested(2)]));

    Ok(())
}
