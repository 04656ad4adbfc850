//! Wire payloads exchanged with clients, one JSON document per datagram.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Inbound request naming an origin and destination node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequestPayload {
    /// Origin node label.
    pub ori: String,
    /// Destination node label.
    pub dest: String,
}

/// Successful reply carrying the path and the time spent computing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponsePayload {
    /// Node labels from origin to destination inclusive.
    pub path: Vec<String>,
    /// Elapsed computation time, e.g. `"18.2µs"`.
    #[serde(rename = "calc-duration")]
    pub calc_duration: String,
}

impl RouteResponsePayload {
    pub fn new(path: Vec<String>, elapsed: Duration) -> Self {
        Self {
            path,
            calc_duration: format_duration(elapsed),
        }
    }
}

/// Error reply with a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Render a duration the way Rust prints it in debug output (`1.5ms`, `42µs`).
pub fn format_duration(elapsed: Duration) -> String {
    format!("{:?}", elapsed)
}
