//! Runtime values.

use std::fmt::Display;

use itertools::Itertools;
use unishell_parser::ast;

/// A value produced by evaluating a node or invoking a command.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    List(Vec<Value>),
    /// No value; produced by commands that only have side effects.
    #[default]
    Unit,
}

impl Value {
    /// Returns the contained integer, if this value is one.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the contained string, if this value is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns a short name for the type of this value, for use in messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Unit => "unit",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // Debug formatting is the shortest round-trip form and keeps a fractional part.
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(items) => write!(f, "{}", items.iter().join(" ")),
            Self::Unit => Ok(()),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<&ast::Literal> for Value {
    fn from(value: &ast::Literal) -> Self {
        match value {
            ast::Literal::Integer(i) => Self::Integer(*i),
            ast::Literal::Float(x) => Self::Float(*x),
            ast::Literal::String(s) => Self::String(s.clone()),
        }
    }
}
