//! Configuration of tracing output.

use std::collections::HashSet;
use std::fmt::Display;

use tracing_subscriber::{Layer, filter::Targets, layer::SubscriberExt, util::SubscriberInitExt};
use unishell_core::trace_categories;

/// Type of event to trace.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum TraceEvent {
    /// Traces command dispatch and statement failures.
    #[clap(name = "commands")]
    Commands,
    /// Traces expansion of interpolated strings.
    #[clap(name = "interpolation")]
    Interpolation,
    /// Traces operations on option stacks.
    #[clap(name = "options")]
    Options,
    /// Traces the process of parsing source text into an abstract syntax tree.
    #[clap(name = "parse")]
    Parse,
}

impl TraceEvent {
    const fn target(self) -> &'static str {
        match self {
            Self::Commands => trace_categories::COMMANDS,
            Self::Interpolation => trace_categories::INTERPOLATION,
            Self::Options => trace_categories::OPTIONS,
            Self::Parse => trace_categories::PARSE,
        }
    }
}

impl Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Commands => write!(f, "commands"),
            Self::Interpolation => write!(f, "interpolation"),
            Self::Options => write!(f, "options"),
            Self::Parse => write!(f, "parse"),
        }
    }
}

/// The set of tracing events enabled for this process.
#[derive(Debug, Default)]
pub struct TraceEventConfig {
    enabled_trace_events: HashSet<TraceEvent>,
}

impl TraceEventConfig {
    /// Installs a global subscriber that writes to stderr, enabling debug output for the
    /// given events.
    ///
    /// # Arguments
    ///
    /// * `enabled_debug_events` - Events to enable debug-level output for.
    pub fn init(enabled_debug_events: &[TraceEvent]) -> Self {
        let config = Self {
            enabled_trace_events: enabled_debug_events.iter().copied().collect(),
        };

        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_filter(config.compose_filter());

        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            // Something went wrong; proceed on anyway but complain audibly.
            eprintln!("warning: failed to initialize tracing.");
        }

        config
    }

    fn compose_filter(&self) -> Targets {
        let mut filter =
            Targets::new().with_default(tracing_subscriber::filter::LevelFilter::INFO);

        for event in &self.enabled_trace_events {
            filter = filter.with_target(event.target(), tracing::Level::DEBUG);
        }

        filter
    }
}
