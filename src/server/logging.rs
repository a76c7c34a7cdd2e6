//! Logging and tracing initialization.
//!
//! Sets up structured logging using the `tracing` ecosystem. `RUST_LOG` takes precedence
//! over the configured level when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::config::LogFormat;

/// Initializes the logging subsystem.
///
/// # Arguments
/// - `level` - Log level string (trace, debug, info, warn, error)
/// - `format` - Log output format (text or json)
pub fn init_logging(level: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},hyper=warn,tower=warn,sqlx=warn,sea_orm=warn"
        ))
    });

    match format {
        LogFormat::Text => init_text_logging(env_filter),
        LogFormat::Json => init_json_logging(env_filter),
    }
}

fn init_text_logging(filter: EnvFilter) {
    let is_terminal = std::io::IsTerminal::is_terminal(&std::io::stdout());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_ansi(is_terminal))
        .init();
}

/// JSON lines for log aggregation in production.
fn init_json_logging(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false),
        )
        .init();
}
