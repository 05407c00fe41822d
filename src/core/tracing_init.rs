use crate::core::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the configured level.
///
/// Only this crate logs at the configured level; everything else is held
/// at `warn`. `RUST_LOG` replaces the whole directive when set.
pub fn filter_directive(config: &LoggingConfig) -> String {
    format!("{}={},warn", env!("CARGO_CRATE_NAME"), config.level)
}

/// Install the global subscriber.
///
/// Logs go to stderr so they never interleave with the wizard's prompts
/// on stdout.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let use_console = config.console || config.format == "console";

    let console_layer = use_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(true)
    });

    let json_layer = (!use_console).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(json_layer)
        .init();
}
