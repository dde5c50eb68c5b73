//! Rendering of statement outcomes to the output streams.

use std::io::Write;

use unishell_core::{Error, ErrorCategory, Value};

/// Writes a statement's value. Lists are written one element per line; the unit value
/// produces no output.
pub(crate) fn write_value(out: &mut impl Write, value: &Value) -> std::io::Result<()> {
    match value {
        Value::Unit => Ok(()),
        Value::List(items) => {
            for item in items {
                writeln!(out, "{item}")?;
            }
            Ok(())
        }
        other => writeln!(out, "{other}"),
    }
}

/// Formats an error for display on the error stream.
pub(crate) fn format_error(err: &Error) -> String {
    match err.category() {
        ErrorCategory::SyntaxError => std::format!("SYNTAX ERROR: {err}"),
        category => std::format!("ERROR: ({category}) {err}"),
    }
}
