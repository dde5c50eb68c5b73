/// Represents an error that occurred while parsing source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The grammar failed to match the input.
    #[error("line {line}, column {column}: expected {expected}")]
    Syntax {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// Human-readable description of the tokens that would have been accepted.
        expected: String,
    },

    /// Command substitutions were nested more deeply than the parser allows.
    #[error("line {line}, column {column}: substitutions nested deeper than {limit}")]
    NestingTooDeep {
        /// 1-based line where the limit was exceeded.
        line: usize,
        /// 1-based column where the limit was exceeded.
        column: usize,
        /// The configured nesting limit.
        limit: usize,
    },

    /// A substitution embedded in a string literal failed to parse.
    #[error("in substitution '{text}': {inner}")]
    Substitution {
        /// The substitution text, including its leading `$`.
        text: String,
        /// The error raised while parsing the substitution.
        inner: Box<ParseError>,
    },
}

pub(crate) fn convert_peg_parse_error(err: &peg::error::ParseError<peg::str::LineCol>) -> ParseError {
    ParseError::Syntax {
        line: err.location.line,
        column: err.location.column,
        expected: err.expected.to_string(),
    }
}
