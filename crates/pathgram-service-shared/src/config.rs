//! Service configuration read from the environment at startup.
//!
//! # Environment Variables
//!
//! - `PORT`: UDP port to listen on (required)
//! - `BIND_ADDR`: Address to bind (default: `127.0.0.1`)
//! - `GRAPH_FILE`: Edge-list file to load (default: `graph.txt`)
//! - `WORKERS`: Number of concurrent request handlers (default: available CPUs)
//! - `QUEUE_DEPTH`: Datagrams buffered between receiver and workers (default: 1024)
//! - `MAX_DATAGRAM_SIZE`: Receive buffer size in bytes (default: 1024)

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Default graph file, relative to the working directory.
pub const DEFAULT_GRAPH_FILE: &str = "graph.txt";

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";

/// Largest request accepted in a single datagram.
pub const DEFAULT_MAX_DATAGRAM_SIZE: usize = 1024;

/// Default bound on datagrams waiting for a worker.
pub const DEFAULT_QUEUE_DEPTH: usize = 1024;

/// Fatal startup configuration problems.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is absent.
    #[error("undefined {0}")]
    Missing(&'static str),

    /// A variable is present but could not be parsed.
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime configuration for the UDP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub port: u16,
    pub graph_file: PathBuf,
    pub workers: usize,
    pub queue_depth: usize,
    pub max_datagram_size: usize,
}

impl ServiceConfig {
    /// Create configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT").ok_or(ConfigError::Missing("PORT"))?;
        let port = parse_value("PORT", &port)?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let graph_file = lookup("GRAPH_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GRAPH_FILE));

        let workers = match lookup("WORKERS") {
            Some(raw) => parse_positive("WORKERS", &raw)?,
            None => std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        };
        let queue_depth = match lookup("QUEUE_DEPTH") {
            Some(raw) => parse_positive("QUEUE_DEPTH", &raw)?,
            None => DEFAULT_QUEUE_DEPTH,
        };
        let max_datagram_size = match lookup("MAX_DATAGRAM_SIZE") {
            Some(raw) => parse_positive("MAX_DATAGRAM_SIZE", &raw)?,
            None => DEFAULT_MAX_DATAGRAM_SIZE,
        };

        Ok(Self {
            bind_addr,
            port,
            graph_file,
            workers,
            queue_depth,
            max_datagram_size,
        })
    }

    /// `host:port` string suitable for socket binding.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_positive(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    parse_value::<NonZeroUsize>(key, raw).map(NonZeroUsize::get)
}
