//! Command-line argument parsing for the `unishell` binary.

use clap::Parser;
use std::path::PathBuf;

use crate::{events, productinfo};

const SHORT_DESCRIPTION: &str = "A small interactive command language";

const LONG_DESCRIPTION: &str = r"
unishell evaluates a small command language with variables, command substitution, and
string interpolation.

With no COMMAND and no SCRIPT, statements are read from standard input, one line at a time.
";

/// Parsed command-line arguments for the unishell shell.
#[derive(Debug, Default, Parser)]
#[clap(name = productinfo::PRODUCT_NAME,
       version = productinfo::PRODUCT_VERSION,
       about = SHORT_DESCRIPTION,
       long_about = LONG_DESCRIPTION)]
#[allow(clippy::module_name_repetitions)]
pub struct CommandLineArgs {
    /// Execute the provided command and then exit.
    #[arg(short = 'c', value_name = "COMMAND")]
    pub command: Option<String>,

    /// Do not display the banner when starting interactively.
    #[clap(long = "no-banner")]
    pub no_banner: bool,

    /// Treat references to unset variables as empty strings instead of errors.
    #[clap(long = "lenient-vars")]
    pub lenient_vars: bool,

    /// Do not process escape sequences in string literals.
    #[clap(long = "no-unescape")]
    pub no_unescape: bool,

    /// Limit on nested command invocations.
    #[clap(long = "max-depth", value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Enable debug logging for classes of tracing events.
    #[clap(long = "debug", value_name = "EVENT")]
    pub enabled_debug_events: Vec<events::TraceEvent>,

    /// Path to a script to execute, one line at a time.
    #[clap(value_name = "SCRIPT")]
    pub script_path: Option<PathBuf>,
}
