//! Argument validation shared by builtins.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use unishell_core::{Error, Value};

/// Fails unless the number of arguments lies in the given range.
pub(crate) fn expect_count(
    command: &str,
    args: &[Value],
    allowed: RangeInclusive<usize>,
) -> Result<(), Error> {
    if allowed.contains(&args.len()) {
        return Ok(());
    }

    let expected = if allowed.start() == allowed.end() {
        format!("{}", allowed.start())
    } else {
        format!("{} to {}", allowed.start(), allowed.end())
    };

    Err(Error::invalid_arguments(
        command,
        format!("expected {expected} argument(s), got {}", args.len()),
    ))
}

/// Returns the string contents of the argument, failing if it is not a string.
pub(crate) fn string<'a>(command: &str, what: &str, value: &'a Value) -> Result<&'a str, Error> {
    value.as_str().ok_or_else(|| {
        Error::invalid_arguments(
            command,
            format!("{what} must be a string, got {}", value.type_name()),
        )
    })
}

/// Interprets the argument as a path.
pub(crate) fn path(command: &str, value: &Value) -> Result<PathBuf, Error> {
    string(command, "path", value).map(PathBuf::from)
}
