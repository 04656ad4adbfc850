//! `tracing` subscriber setup for the UDP service.
//!
//! Read from the environment at startup:
//!
//! - `LOG_FORMAT`: `json` for one object per line, `text` (or `pretty`) for
//!   terminal output. Unset or unrecognised values mean `json`.
//! - `RUST_LOG`: an `EnvFilter` directive such as `info` or
//!   `pathgram_service_udp=debug`. A directive that fails to parse is
//!   replaced by `info`.
//! - `SERVICE_NAME`: reported in the first log line.
//!
//! ```no_run
//! use pathgram_service_shared::logging::{init_logging, LoggingConfig};
//!
//! let config = LoggingConfig::from_env().with_service("pathgram-udp");
//! if !init_logging(&config) {
//!     eprintln!("a tracing subscriber was already installed");
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LEVEL: &str = "info";

/// How log events are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl LogFormat {
    /// Map a `LOG_FORMAT` value to a format, ignoring case.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("text") || value.eq_ignore_ascii_case("pretty") {
            LogFormat::Text
        } else {
            LogFormat::Json
        }
    }
}

/// Subscriber settings resolved from the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive string.
    pub level: String,
    pub service: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: DEFAULT_LEVEL.to_string(),
            service: None,
        }
    }
}

impl LoggingConfig {
    /// Read `LOG_FORMAT`, `RUST_LOG` and `SERVICE_NAME` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`LoggingConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            format: lookup("LOG_FORMAT")
                .map(|raw| LogFormat::parse(&raw))
                .unwrap_or_default(),
            level: lookup("RUST_LOG")
                .filter(|raw| !raw.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            service: lookup("SERVICE_NAME").filter(|name| !name.is_empty()),
        }
    }

    /// Fall back to `service` when `SERVICE_NAME` was not set.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service.get_or_insert_with(|| service.into());
        self
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Install the global subscriber described by `config`.
///
/// Returns `false` when a subscriber was already in place; that one is kept.
/// In JSON mode a served query looks like:
///
/// ```json
/// {"timestamp":"2026-10-17T09:12:03.114Z","level":"INFO","fields":{"message":"route computed","hops":2,"weight":3,"elapsed":"41.2µs"},"target":"pathgram_service_shared::dispatcher"}
/// ```
pub fn init_logging(config: &LoggingConfig) -> bool {
    let registry = tracing_subscriber::registry().with(config.filter());

    let installed = match config.format {
        LogFormat::Text => registry.with(fmt::layer().pretty()).try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .try_init(),
    }
    .is_ok();

    if installed {
        tracing::info!(
            service = config.service.as_deref().unwrap_or("pathgram"),
            format = ?config.format,
            filter = %config.level,
            "logging initialised"
        );
    }
    installed
}
