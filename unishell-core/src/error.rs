use std::path::PathBuf;

/// Unified error type for the evaluator and the commands it dispatches to.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Returns a reference to the kind of error.
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the reporting category of the error.
    pub const fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Returns an error indicating that a command was invoked with malformed arguments.
    ///
    /// # Arguments
    ///
    /// * `command` - Name of the command.
    /// * `message` - Description of the problem.
    pub fn invalid_arguments(command: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorKind::InvalidArguments {
            command: command.into(),
            message: message.into(),
        }
        .into()
    }
}

impl<T> From<T> for Error
where
    ErrorKind: From<T>,
{
    fn from(convertible_to_kind: T) -> Self {
        Self {
            kind: convertible_to_kind.into(),
        }
    }
}

/// Kinds of errors that can occur while evaluating unishell source text.
#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    /// The source text did not match the grammar.
    #[error("{0}")]
    Syntax(#[from] unishell_parser::ParseError),

    /// No command is registered under the given name.
    #[error("command not found: {0}")]
    CommandNotFound(String),

    /// A command was given arguments of the wrong number or type.
    #[error("{command}: {message}")]
    InvalidArguments {
        /// Name of the command.
        command: String,
        /// Description of the problem.
        message: String,
    },

    /// A referenced variable is not set.
    #[error("variable not set: {0}")]
    VariableNotFound(String),

    /// The named option was never declared.
    #[error("unknown option: {0}")]
    OptionNotDeclared(String),

    /// An attempt was made to pop the default value off an option's stack.
    #[error("cannot pop default value of option: {0}")]
    OptionAtDefault(String),

    /// A flag was evaluated outside of a command's argument list.
    #[error("flag used outside of a command: {0}")]
    UnexpectedFlag(String),

    /// Nested evaluation exceeded the configured depth limit.
    #[error("maximum evaluation depth exceeded ({0})")]
    MaxEvaluationDepthExceeded(usize),

    /// An I/O error occurred while operating on the given path.
    #[error("{0}: {1}")]
    PathIo(PathBuf, std::io::Error),
}

impl ErrorKind {
    /// Returns the reporting category of this kind of error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Syntax(_) => ErrorCategory::SyntaxError,
            Self::CommandNotFound(_) => ErrorCategory::UnknownCommand,
            Self::InvalidArguments { .. } => ErrorCategory::ArgumentError,
            Self::VariableNotFound(_) => ErrorCategory::LookupError,
            Self::OptionNotDeclared(_) | Self::OptionAtDefault(_) => ErrorCategory::OptionError,
            Self::UnexpectedFlag(_) | Self::MaxEvaluationDepthExceeded(_) => {
                ErrorCategory::EvaluationError
            }
            Self::PathIo(..) => ErrorCategory::IoError,
        }
    }
}

/// Broad classes of errors, as shown to users.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum_macros::Display, strum_macros::EnumIter)]
pub enum ErrorCategory {
    /// Source text failed to parse.
    SyntaxError,
    /// A command name was not registered.
    UnknownCommand,
    /// A command rejected its arguments.
    ArgumentError,
    /// A variable was not found.
    LookupError,
    /// An option stack operation failed.
    OptionError,
    /// Evaluation could not proceed.
    EvaluationError,
    /// An operating system I/O operation failed.
    IoError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn category_names() {
        let names: Vec<String> = ErrorCategory::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "SyntaxError",
                "UnknownCommand",
                "ArgumentError",
                "LookupError",
                "OptionError",
                "EvaluationError",
                "IoError"
            ]
        );
    }

    #[test]
    fn invalid_arguments_display() {
        let err = Error::invalid_arguments("set", "expected 2 arguments");
        assert_eq!(err.category(), ErrorCategory::ArgumentError);
        assert_eq!(err.to_string(), "set: expected 2 arguments");
    }
}
