//! Implements the command-line interface for the `unishell` shell.

use clap::Parser;
use std::io::Write;
use unishell_core::{Interpreter, InterpreterOptions, MissingVariablePolicy, ParserOptions};

use crate::args::CommandLineArgs;
use crate::error::ShellError;
use crate::events;
use crate::input::LineReader;
use crate::productinfo;
use crate::session::Session;

/// Main entry point for the `unishell` shell.
pub fn run() {
    //
    // Install panic handlers to report panics in a human-readable way.
    //
    install_panic_handlers();

    //
    // Parse args.
    //
    let parsed_args = match CommandLineArgs::try_parse_from(std::env::args()) {
        Ok(parsed_args) => parsed_args,
        Err(e) => {
            let _ = e.print();

            // clap returns errors for `--help`, `--version`, etc.
            let exit_code = match e.kind() {
                clap::error::ErrorKind::DisplayVersion => 0,
                clap::error::ErrorKind::DisplayHelp => 0,
                _ => 1,
            };

            std::process::exit(exit_code);
        }
    };

    //
    // Run.
    //
    let exit_code = match run_with_args(&parsed_args) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("error: {err:#}");
            1
        }
    };

    std::process::exit(exit_code);
}

/// Installs a panic handler that captures panic details and reports a human-readable
/// message on release builds.
fn install_panic_handlers() {
    human_panic::setup_panic!(
        human_panic::Metadata::new(productinfo::PRODUCT_NAME, productinfo::PRODUCT_VERSION)
            .homepage(productinfo::PRODUCT_DISPLAY_URI)
            .support("please post an issue on the project's issue tracker")
    );
}

/// Run the shell with already-parsed arguments. Returns the exit code.
///
/// # Arguments
///
/// * `args` - The parsed command-line arguments.
fn run_with_args(args: &CommandLineArgs) -> Result<i32, ShellError> {
    // Initializing tracing.
    let _event_config = events::TraceEventConfig::init(&args.enabled_debug_events);

    let mut session = Session::new(build_interpreter(args));

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    if let Some(command) = &args.command {
        let code = session.run_string(command, &mut stdout, &mut stderr)?;
        Ok(code.unwrap_or(0))
    } else if let Some(script_path) = &args.script_path {
        session.run_script(script_path, &mut stdout, &mut stderr)
    } else {
        let mut reader = LineReader::stdin();

        if !args.no_banner {
            writeln!(stdout, "{}", productinfo::get_product_display_str())?;
            writeln!(stdout)?;
        }

        session.run_interactively(&mut reader, &mut stdout, &mut stderr)
    }
}

/// Builds the interpreter configured by the command-line arguments.
fn build_interpreter(args: &CommandLineArgs) -> Interpreter {
    let missing_variable = if args.lenient_vars {
        MissingVariablePolicy::EmptyString
    } else {
        MissingVariablePolicy::Error
    };

    let mut options = InterpreterOptions {
        missing_variable,
        ..InterpreterOptions::default()
    };
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }

    Interpreter::builder()
        .parser_options(ParserOptions {
            unescape_strings: !args.no_unescape,
            ..ParserOptions::default()
        })
        .options(options)
        .build()
}
