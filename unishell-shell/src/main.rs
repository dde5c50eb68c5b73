//! Implements the command-line interface for the `unishell` shell.

/// Main entry point for the `unishell` shell.
fn main() {
    unishell_shell::entry::run();
}
