//! Pathgram CLI library.
//!
//! Command handlers and output formatting for the `pathgram` binary.

pub mod commands;
pub mod output;
