use std::path::PathBuf;

/// Represents an error encountered while running the shell itself, as opposed to an error
/// reported by an individual statement.
#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    /// The script file could not be read.
    #[error("failed to read script '{}': {}", .0.display(), .1)]
    ScriptReadError(PathBuf, std::io::Error),

    /// A generic I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
