//! Prometheus metrics infrastructure for the pathgram service.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Install the Prometheus recorder (and optional HTTP listener)
//! - Business metric helpers for query outcomes
//!
//! # Example
//!
//! ```no_run
//! use pathgram_service_shared::metrics::{init_metrics, MetricsConfig};
//!
//! let config = MetricsConfig::from_env();
//! if let Err(e) = init_metrics(&config) {
//!     eprintln!("continuing without metrics: {e}");
//! }
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use thiserror::Error;

/// Handle kept when the recorder runs without its own HTTP listener.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Set once a recorder is installed, with or without a listener.
static RECORDER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
    /// Address for the Prometheus scrape endpoint, if any.
    pub listen_addr: Option<SocketAddr>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            listen_addr: None,
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_ADDR`: Socket address for `/metrics` (default: none)
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let listen_addr = std::env::var("METRICS_ADDR")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "ignoring invalid METRICS_ADDR");
                    None
                }
            });

        Self {
            enabled,
            listen_addr,
        }
    }
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    #[error("metrics are disabled")]
    Disabled,
    /// The recorder has already been installed.
    #[error("metrics recorder already initialized")]
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    #[error("failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Install the Prometheus recorder.
///
/// With a `listen_addr` the exporter serves scrapes itself; it must then be
/// called from inside a Tokio runtime or it will start its own. Any call after
/// a successful install returns [`MetricsError::AlreadyInitialized`],
/// whichever mode the first call used.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    if RECORDER_INSTALLED.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    match config.listen_addr {
        Some(addr) => PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
            .map_err(|e| MetricsError::InstallFailed(e.to_string()))?,
        None => {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;
            let _ = PROMETHEUS_HANDLE.set(handle);
        }
    }

    RECORDER_INSTALLED
        .set(())
        .map_err(|_| MetricsError::AlreadyInitialized)
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` unless [`init_metrics`] installed a recorder without a listener.
pub fn prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

// =============================================================================
// Business Metrics Helpers
// =============================================================================

/// Record a successfully answered query and the hop count of its path.
pub fn record_query_answered(hops: usize) {
    metrics::counter!("pathgram_queries_answered_total").increment(1);
    metrics::histogram!("pathgram_path_hops").record(hops as f64);
}

/// Record a query answered with an error reply.
///
/// `reason` is e.g. "decode_error", "unknown_node" or "no_path".
pub fn record_query_failed(reason: &str) {
    metrics::counter!(
        "pathgram_queries_failed_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

/// Record time spent inside the shortest-path computation.
pub fn record_calc_duration(elapsed: Duration) {
    metrics::histogram!("pathgram_calc_duration_seconds").record(elapsed.as_secs_f64());
}

/// Record a datagram that received no reply.
///
/// `reason` is e.g. "encode_error", "send_error" or "recv_error".
pub fn record_datagram_dropped(reason: &str) {
    metrics::counter!(
        "pathgram_datagrams_dropped_total",
        "reason" => reason.to_string()
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_config_default() {
        let config = MetricsConfig::default();
        assert!(config.enabled);
        assert!(config.listen_addr.is_none());
    }

    #[test]
    fn test_disabled_metrics_are_not_installed() {
        let config = MetricsConfig {
            enabled: false,
            listen_addr: None,
        };
        assert!(matches!(init_metrics(&config), Err(MetricsError::Disabled)));
    }

    #[test]
    fn test_second_init_reports_already_initialized() {
        let local = MetricsConfig::default();
        let first = init_metrics(&local);
        assert!(
            first.is_ok() || matches!(first, Err(MetricsError::AlreadyInitialized)),
            "unexpected first result: {first:?}"
        );
        assert!(prometheus_handle().is_some());

        assert!(matches!(
            init_metrics(&local),
            Err(MetricsError::AlreadyInitialized)
        ));

        // The listener branch is refused before it tries to bind.
        let with_listener = MetricsConfig {
            enabled: true,
            listen_addr: Some("127.0.0.1:0".parse().unwrap()),
        };
        assert!(matches!(
            init_metrics(&with_listener),
            Err(MetricsError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_business_metrics_helpers_do_not_panic() {
        // Works whether or not another test already installed a recorder.
        record_query_answered(3);
        record_query_failed("no_path");
        record_calc_duration(Duration::from_micros(40));
        record_datagram_dropped("send_error");
    }

    #[test]
    fn test_metrics_error_display() {
        assert_eq!(MetricsError::Disabled.to_string(), "metrics are disabled");
        assert_eq!(
            MetricsError::AlreadyInitialized.to_string(),
            "metrics recorder already initialized"
        );
        assert!(MetricsError::InstallFailed("boom".to_string())
            .to_string()
            .contains("boom"));
    }
}
