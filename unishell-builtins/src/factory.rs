use std::collections::HashMap;
use std::sync::Arc;

#[allow(clippy::wildcard_imports)]
use super::*;

use unishell_core::{Command, ExecutionContext};

/// Returns the default set of built-in commands, keyed by name.
pub fn default_builtins() -> HashMap<String, Arc<dyn Command>> {
    let mut m = HashMap::<String, Arc<dyn Command>>::new();

    #[cfg(feature = "builtin.cd")]
    m.insert("cd".into(), Arc::new(cd::CdCommand));
    #[cfg(feature = "builtin.clear")]
    m.insert("clear".into(), Arc::new(clear::ClearCommand));
    #[cfg(feature = "builtin.echo")]
    m.insert("echo".into(), Arc::new(echo::EchoCommand));
    #[cfg(feature = "builtin.env")]
    m.insert("env".into(), Arc::new(env::EnvCommand));
    #[cfg(feature = "builtin.eval")]
    m.insert("eval".into(), Arc::new(eval::EvalCommand));
    #[cfg(feature = "builtin.exit")]
    m.insert("exit".into(), Arc::new(exit::ExitCommand));
    #[cfg(feature = "builtin.export")]
    m.insert("export".into(), Arc::new(export::ExportCommand));
    #[cfg(feature = "builtin.help")]
    m.insert("help".into(), Arc::new(help::HelpCommand));
    #[cfg(feature = "builtin.ls")]
    m.insert("ls".into(), Arc::new(ls::LsCommand));
    #[cfg(feature = "builtin.options")]
    {
        m.insert("pushopt".into(), Arc::new(options::PushOptCommand));
        m.insert("peekopt".into(), Arc::new(options::PeekOptCommand));
        m.insert("popopt".into(), Arc::new(options::PopOptCommand));
    }
    #[cfg(feature = "builtin.pwd")]
    m.insert("pwd".into(), Arc::new(pwd::PwdCommand));
    #[cfg(feature = "builtin.set")]
    m.insert("set".into(), Arc::new(set::SetCommand));
    #[cfg(feature = "builtin.stat")]
    m.insert("stat".into(), Arc::new(stat::StatCommand));
    #[cfg(feature = "builtin.unset")]
    m.insert("unset".into(), Arc::new(unset::UnsetCommand));

    m
}

/// Registers the default set of built-in commands in the given context, replacing any
/// commands of the same names.
///
/// # Arguments
///
/// * `context` - The context to register commands in.
pub fn register_default_builtins(context: &mut ExecutionContext) {
    for (name, command) in default_builtins() {
        context.set_cmd(name, command);
    }
}
