//! Defines the Abstract Syntax Tree (ast) for unishell programs.
//!
//! Nodes are immutable once constructed. The set of node kinds is closed; evaluators are
//! expected to match on [`Node`] exhaustively.

use std::fmt::Display;

/// Represents a complete program: one node per non-empty statement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Node>,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

/// A node of the abstract syntax tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// A literal number or string.
    Literal(Literal),
    /// A command flag; only meaningful inside a command's argument list.
    Flag(Flag),
    /// A variable reference.
    VarLookup(VarLookup),
    /// A string with embedded substitutions.
    InterpolatedString(InterpolatedString),
    /// A command invocation.
    Command(Command),
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(l) => write!(f, "{l}"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::VarLookup(v) => write!(f, "{v}"),
            Self::InterpolatedString(s) => write!(f, "{s}"),
            Self::Command(c) => write!(f, "$({c})"),
        }
    }
}

impl From<Literal> for Node {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Command> for Node {
    fn from(value: Command) -> Self {
        Self::Command(value)
    }
}

impl From<VarLookup> for Node {
    fn from(value: VarLookup) -> Self {
        Self::VarLookup(value)
    }
}

impl From<Flag> for Node {
    fn from(value: Flag) -> Self {
        Self::Flag(value)
    }
}

/// A literal value appearing in source.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string, after escape processing.
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "\"{s}\""),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// A `-x` / `--name` command modifier.
#[derive(Clone, Debug, PartialEq)]
pub struct Flag {
    /// Name of the flag, without leading dashes.
    pub name: String,
    /// Value of the flag; flags written in source always carry the integer 1.
    pub value: Literal,
    /// Whether the flag was written with two dashes.
    pub long: bool,
}

impl Flag {
    /// Returns a new single-dash flag with the default value.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the flag, without leading dashes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Literal::Integer(1),
            long: false,
        }
    }

    /// Returns a new double-dash flag with the default value.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the flag, without leading dashes.
    pub fn new_long(name: impl Into<String>) -> Self {
        Self {
            long: true,
            ..Self::new(name)
        }
    }
}

impl Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dashes = if self.long { "--" } else { "-" };
        write!(f, "{dashes}{}", self.name)
    }
}

/// A reference to a variable by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarLookup {
    /// Name of the variable.
    pub name: String,
}

impl VarLookup {
    /// Returns a lookup of the named variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Display for VarLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${{{}}}", self.name)
    }
}

/// One part of an [`InterpolatedString`].
#[derive(Clone, Debug, PartialEq)]
pub enum StringPart {
    /// Raw text, included verbatim.
    Text(String),
    /// A node whose evaluated value is stringified into the result.
    Node(Node),
}

/// A string literal containing `$name`, `${name}`, or `$( ... )` substitutions.
#[derive(Clone, Debug, PartialEq)]
pub struct InterpolatedString {
    /// Parts, in source order.
    pub parts: Vec<StringPart>,
}

impl Display for InterpolatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"")?;
        for part in &self.parts {
            match part {
                StringPart::Text(t) => write!(f, "{t}")?,
                StringPart::Node(n) => write!(f, "{n}")?,
            }
        }
        write!(f, "\"")
    }
}

/// A command invocation.
///
/// Flags are separated from positional arguments at construction time; the relative order
/// within each group is that of the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    name: String,
    args: Vec<Node>,
    flags: Vec<Flag>,
}

impl Command {
    /// Returns a new command, partitioning `raw_args` into positional arguments and flags.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the command to invoke.
    /// * `raw_args` - Arguments and flags, in source order.
    pub fn new(name: impl Into<String>, raw_args: Vec<Node>) -> Self {
        let mut args = vec![];
        let mut flags = vec![];

        for arg in raw_args {
            match arg {
                Node::Flag(flag) => flags.push(flag),
                other => args.push(other),
            }
        }

        Self {
            name: name.into(),
            args,
            flags,
        }
    }

    /// Returns the name of the command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the positional (non-flag) arguments.
    pub fn args(&self) -> &[Node] {
        &self.args
    }

    /// Returns the flags.
    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        for flag in &self.flags {
            write!(f, " {flag}")?;
        }
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
