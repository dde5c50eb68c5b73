//! Defines the parse tree produced directly by the grammar.
//!
//! The parse tree mirrors grammar productions one-to-one and is transient: it is built
//! per parse call, handed to the [`crate::transform`] visitor, and dropped.

/// Parse tree for the `program` start rule.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgramTree {
    /// Statements in source order, including empty ones.
    pub statements: Vec<StatementTree>,
}

/// Parse tree for a single `statement`.
#[derive(Clone, Debug, PartialEq)]
pub struct StatementTree {
    /// The command or expression making up the statement, if any.
    pub body: Option<ExprCmdTree>,
    /// Trailing comment text, without the leading `#`.
    pub comment: Option<String>,
}

/// Parse tree for `expr_cmd`: either a command invocation or a bare expression.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprCmdTree {
    /// A command invocation.
    Command(CommandTree),
    /// A standalone expression.
    Expr(ExprTree),
}

/// Parse tree for `command`.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandTree {
    /// The command name.
    pub name: String,
    /// Flags and expressions following the name, in source order.
    pub args: Vec<ArgumentTree>,
}

/// One whitespace-separated item following a command name.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentTree {
    /// A `-x` or `--name` flag.
    Flag(FlagTree),
    /// Any other expression.
    Expr(ExprTree),
}

/// Parse tree for `flag`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagTree {
    /// Name of the flag, without leading dashes.
    pub name: String,
    /// Whether the flag was written with two dashes.
    pub long: bool,
}

/// Parse tree for `expr`.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprTree {
    /// `$name` or `${name}`.
    VarRef(String),
    /// `$( ... )`.
    CmdSubst(Box<ExprCmdTree>),
    /// Contents of a double-quoted string, without the quotes.
    QuotedString(String),
    /// An unquoted string token.
    BareString(String),
    /// A numeric literal.
    Number(NumberTree),
}

/// Parse tree for `number`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberTree {
    /// An integer literal.
    Integer(i64),
    /// A floating-point literal.
    Float(f64),
}
