//! Logging setup for the demo binary

use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "exchange_demo=info,exchange_core=info";

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, colored
    Pretty,
    /// One JSON object per event
    Json,
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over the built-in filter. Events go to stderr so that
/// stdout carries only results.
///
/// # Environment Variables
///
/// - `RUST_LOG`: filter directives (default: `exchange_demo=info,exchange_core=info`)
/// - `EXCHANGE_LOG_FORMAT`: `pretty` or `json` (read through clap)
pub fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .expect("Failed to create env filter");

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}
