//! Pathgram UDP shortest-path service.
//!
//! Each datagram carries `{"ori": "...", "dest": "..."}`; the reply is either
//! `{"path": [...], "calc-duration": "..."}` or `{"message": "..."}`.
//!
//! # Configuration
//!
//! - `PORT` - UDP port (required)
//! - `BIND_ADDR` - Bind address (default: 127.0.0.1)
//! - `GRAPH_FILE` - Edge list to serve (default: graph.txt)
//! - `WORKERS` - Concurrent request handlers (default: available CPUs)
//! - `QUEUE_DEPTH` - Datagrams buffered for workers (default: 1024)
//! - `MAX_DATAGRAM_SIZE` - Receive buffer in bytes (default: 1024)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` / `METRICS_ADDR` - Prometheus exporter settings

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use pathgram_service_shared::metrics::prometheus_handle;
use pathgram_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig, QueryDispatcher,
    ServiceConfig,
};
use pathgram_service_udp::{bind, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let logging_config = LoggingConfig::from_env().with_service("pathgram-udp");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Metrics are optional.
        warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env().context("invalid service configuration")?;
    info!(
        graph_file = %config.graph_file.display(),
        addr = %config.listen_addr(),
        workers = config.workers,
        "starting pathgram service"
    );

    let state = AppState::load(&config.graph_file)
        .with_context(|| format!("failed to load graph from {}", config.graph_file.display()))?;

    let socket = bind(&config)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr()))?;
    info!(addr = %socket.local_addr()?, "waiting for requests");

    serve(socket, QueryDispatcher::new(state), &config, shutdown_signal()).await?;

    if let Some(handle) = prometheus_handle() {
        debug!(metrics = %handle.render(), "final metrics snapshot");
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the service runs until killed.
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
