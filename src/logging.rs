//! Structured logging setup
//!
//! The CLI logs to stderr through `tracing-subscriber`. `RUST_LOG` takes
//! precedence over the level passed in; `APIGEN_LOG_FORMAT=json` switches the
//! human-readable output to one JSON object per line.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable selecting the log format
pub const LOG_FORMAT_ENV: &str = "APIGEN_LOG_FORMAT";

/// Log format: pretty-print for terminals, JSON for log collectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is unset (trace/debug/info/warn/error)
    pub log_level: String,
    pub format: LogFormat,
}

impl LogConfig {
    /// Config for `log_level` with the format taken from the environment
    pub fn from_env(log_level: &str) -> Self {
        Self {
            log_level: log_level.to_string(),
            format: env::var(LOG_FORMAT_ENV)
                .map(|s| LogFormat::parse(&s))
                .unwrap_or_default(),
        }
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber
///
/// # Example
///
/// ```no_run
/// apigen::logging::init_logging("info").expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: &str) -> Result<()> {
    init_logging_with_config(&LogConfig::from_env(log_level))
}

/// Install the global subscriber described by `config`
///
/// Fails if a global subscriber is already set.
pub fn init_logging_with_config(config: &LogConfig) -> Result<()> {
    let level = parse_level(&config.log_level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}
