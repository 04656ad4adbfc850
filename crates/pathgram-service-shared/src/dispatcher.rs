//! Per-datagram request handling.
//!
//! [`QueryDispatcher::handle`] turns one inbound payload into one outbound
//! payload. Every failure short of encoding the reply itself becomes an
//! [`ErrorPayload`], so a sender always hears back.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, info, warn};

use pathgram_lib::{plan_route, Error as LibError, RoutePlan, RouteRequest};

use crate::metrics::{
    record_calc_duration, record_datagram_dropped, record_query_answered, record_query_failed,
};
use crate::protocol::{ErrorPayload, RouteRequestPayload, RouteResponsePayload};
use crate::state::AppState;

/// Per-request failures that are reported back to the sender.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The payload was not a well-formed request.
    #[error("invalid request payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request was valid but has no answer.
    #[error(transparent)]
    Route(#[from] LibError),
}

impl QueryError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            QueryError::Decode(_) => "decode_error",
            QueryError::Route(e) => e.reason(),
        }
    }
}

/// Stateless request handler over a shared, read-only graph.
#[derive(Debug, Clone)]
pub struct QueryDispatcher {
    state: AppState,
}

impl QueryDispatcher {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Decode `payload`, plan the route, and build the success payload.
    pub fn answer(&self, payload: &[u8]) -> Result<RouteResponsePayload, QueryError> {
        let request: RouteRequestPayload = serde_json::from_slice(payload)?;
        debug!(ori = %request.ori, dest = %request.dest, "payload received");

        let started = Instant::now();
        let plan: RoutePlan = plan_route(
            self.state.graph(),
            &RouteRequest::new(request.ori, request.dest),
        )?;
        let elapsed = started.elapsed();

        record_calc_duration(elapsed);
        record_query_answered(plan.hop_count());
        info!(
            hops = plan.hop_count(),
            weight = plan.total_weight,
            elapsed = ?elapsed,
            "route computed"
        );

        let path = plan.steps.into_iter().map(String::from).collect();
        Ok(RouteResponsePayload::new(path, elapsed))
    }

    /// Produce the reply bytes for `payload`.
    ///
    /// Returns `None` only when the reply could not be encoded; the request is
    /// then dropped.
    pub fn handle(&self, payload: &[u8]) -> Option<Vec<u8>> {
        let encoded = match self.answer(payload) {
            Ok(response) => serde_json::to_vec(&response),
            Err(error) => {
                warn!(error = %error, reason = error.reason(), "query failed");
                record_query_failed(error.reason());
                serde_json::to_vec(&ErrorPayload::new(error.to_string()))
            }
        };

        match encoded {
            Ok(bytes) => Some(bytes),
            Err(error) => {
                warn!(error = %error, "failed to encode reply, dropping request");
                record_datagram_dropped("encode_error");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{request_bytes, test_dispatcher};
    use serde_json::Value;

    fn reply(payload: &[u8]) -> Value {
        let bytes = test_dispatcher().handle(payload).expect("reply encoded");
        serde_json::from_slice(&bytes).expect("reply is JSON")
    }

    #[test]
    fn success_reply_carries_path_and_duration() {
        let value = reply(&request_bytes("A", "C"));
        assert_eq!(value["path"], serde_json::json!(["A", "B", "C"]));
        assert!(value["calc-duration"].is_string());
        assert!(value.get("message").is_none());
    }

    #[test]
    fn same_node_reply_has_single_element() {
        let value = reply(&request_bytes("B", "B"));
        assert_eq!(value["path"], serde_json::json!(["B"]));
    }

    #[test]
    fn unknown_node_reply_names_node() {
        let value = reply(br#"{"ori":"X","dest":"A"}"#);
        let message = value["message"].as_str().expect("error message");
        assert!(message.contains("unknown node: X"), "{message}");
    }

    #[test]
    fn unreachable_reply_reports_no_path() {
        let value = reply(&request_bytes("C", "A"));
        assert_eq!(value["message"], "no path found between C and A");
    }

    #[test]
    fn malformed_payloads_get_decode_errors() {
        let cases: [&[u8]; 6] = [
            b"",
            b"not json",
            b"{\"ori\":\"A\"}",
            b"{\"dest\":\"A\"}",
            b"{\"ori\":1,\"dest\":\"A\"}",
            b"[\"A\",\"C\"",
        ];
        for case in cases {
            let value = reply(case);
            let message = value["message"].as_str().expect("error message");
            assert!(
                message.starts_with("invalid request payload"),
                "{:?} -> {message}",
                String::from_utf8_lossy(case)
            );
        }
    }

    #[test]
    fn answer_classifies_errors() {
        let dispatcher = test_dispatcher();
        let err = dispatcher.answer(b"{}").unwrap_err();
        assert_eq!(err.reason(), "decode_error");

        let err = dispatcher.answer(&request_bytes("A", "Z")).unwrap_err();
        assert_eq!(err.reason(), "unknown_node");

        let err = dispatcher.answer(&request_bytes("B", "A")).unwrap_err();
        assert_eq!(err.reason(), "no_path");
    }
}
