//! Shared infrastructure for the pathgram shortest-path service.
//!
//! This crate provides everything between raw datagram bytes and the
//! pathfinding library:
//!
//! - [`ServiceConfig`]: Environment-driven service configuration
//! - [`AppState`]: Pre-loaded graph shared by every worker
//! - [`QueryDispatcher`]: Decode, plan, time, and encode a single request
//! - [`protocol`]: Wire payloads for requests, replies, and errors
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//!
//! # Architecture
//!
//! The transport crate stays thin; all per-request work happens here and all
//! graph logic lives in `pathgram-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  QueryDispatcher                                            │
//! │  - Decode request JSON                                      │
//! │  - Call pathgram-lib plan_route (timed)                     │
//! │  - Encode success or error reply                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a fixture graph and state. Enable the
//! `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

pub mod config;
mod dispatcher;
pub mod logging;
pub mod metrics;
pub mod protocol;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, ServiceConfig};
pub use dispatcher::{QueryDispatcher, QueryError};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, record_calc_duration, record_datagram_dropped, record_query_answered,
    record_query_failed, MetricsConfig, MetricsError,
};
pub use protocol::{ErrorPayload, RouteRequestPayload, RouteResponsePayload};
pub use state::{AppState, AppStateError};
