//! Trace utilities

/// Trace category for command dispatch.
pub const COMMANDS: &str = "commands";
/// Trace category for string interpolation.
pub const INTERPOLATION: &str = "interpolation";
/// Trace category for option stacks.
pub const OPTIONS: &str = "options";
/// Trace category for parsing.
pub const PARSE: &str = "parse";
