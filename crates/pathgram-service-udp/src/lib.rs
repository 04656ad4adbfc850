//! UDP transport for the pathgram shortest-path service.
//!
//! One receive loop reads datagrams into a bounded queue; a fixed pool of
//! workers takes them off the queue, runs the [`QueryDispatcher`] and sends the
//! reply back to the sender. A slow query only occupies its own worker.
//!
//! ```text
//!  socket ──recv_from──▶ [ bounded queue ] ──▶ worker 0..N ──send_to──▶ socket
//! ```
//!
//! [`QueryDispatcher`]: pathgram_service_shared::QueryDispatcher

#![deny(warnings)]

mod server;

pub use server::{bind, serve, Datagram};
