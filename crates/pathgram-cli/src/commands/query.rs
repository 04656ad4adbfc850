//! Query command handler: ask a running server over UDP.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use pathgram_service_shared::protocol::{ErrorPayload, RouteRequestPayload, RouteResponsePayload};

/// Receive buffer for replies; paths can be longer than requests.
const REPLY_BUFFER_SIZE: usize = 64 * 1024;

/// Reply datagram, either a path or an error message.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Route(RouteResponsePayload),
    Error(ErrorPayload),
}

/// Send one request datagram to `server` and wait for its reply.
pub fn send_query(server: SocketAddr, from: &str, to: &str, timeout: Duration) -> Result<Reply> {
    let bind_addr = if server.is_ipv4() {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    };
    let socket = UdpSocket::bind(bind_addr).context("failed to bind client socket")?;
    socket
        .set_read_timeout(Some(timeout))
        .context("failed to set read timeout")?;

    let request = RouteRequestPayload {
        ori: from.to_string(),
        dest: to.to_string(),
    };
    let payload = serde_json::to_vec(&request).context("failed to encode request")?;
    socket
        .send_to(&payload, server)
        .with_context(|| format!("failed to send request to {}", server))?;

    let mut buffer = vec![0u8; REPLY_BUFFER_SIZE];
    let (len, _) = socket
        .recv_from(&mut buffer)
        .with_context(|| format!("no reply from {} within {:?}", server, timeout))?;

    serde_json::from_slice(&buffer[..len]).context("server reply was not understood")
}

/// Handle the query subcommand.
pub fn handle_query(server: SocketAddr, from: &str, to: &str, timeout: Duration) -> Result<()> {
    match send_query(server, from, to, timeout)? {
        Reply::Route(route) => {
            println!("Path: {}", route.path.join(" -> "));
            println!("Calculated in {}", route.calc_duration);
            Ok(())
        }
        Reply::Error(error) => bail!("server error: {}", error.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_distinguishes_route_from_error() {
        let route: Reply =
            serde_json::from_str(r#"{"path":["A","B"],"calc-duration":"3µs"}"#).unwrap();
        assert!(matches!(route, Reply::Route(ref r) if r.path == ["A", "B"]));

        let error: Reply = serde_json::from_str(r#"{"message":"unknown node: X"}"#).unwrap();
        assert!(matches!(error, Reply::Error(ref e) if e.message == "unknown node: X"));
    }

    #[test]
    fn answered_by_local_responder() {
        let responder = UdpSocket::bind("127.0.0.1:0").unwrap();
        let addr = responder.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let mut buf = [0u8; 1024];
            let (len, peer) = responder.recv_from(&mut buf).unwrap();
            let request: RouteRequestPayload = serde_json::from_slice(&buf[..len]).unwrap();
            assert_eq!(request.ori, "A");
            responder
                .send_to(r#"{"path":["A","C"],"calc-duration":"1µs"}"#.as_bytes(), peer)
                .unwrap();
        });

        let reply = send_query(addr, "A", "C", Duration::from_secs(5)).unwrap();
        handle.join().unwrap();
        assert!(matches!(reply, Reply::Route(ref r) if r.path == ["A", "C"]));
    }
}
