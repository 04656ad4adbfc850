use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::UdpSocket;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, info, info_span, warn, Instrument};

use pathgram_service_shared::{record_datagram_dropped, QueryDispatcher, ServiceConfig};

/// A received request and the address to answer.
#[derive(Debug, Clone)]
pub struct Datagram {
    pub payload: Vec<u8>,
    pub peer: SocketAddr,
}

type SharedQueue = Arc<Mutex<mpsc::Receiver<Datagram>>>;

/// Bind the UDP socket described by `config`.
pub async fn bind(config: &ServiceConfig) -> io::Result<UdpSocket> {
    UdpSocket::bind(config.listen_addr()).await
}

/// Serve requests on `socket` until `shutdown` resolves.
///
/// After shutdown the receive loop stops, queued datagrams are still answered,
/// and the call returns once every worker has exited.
pub async fn serve<F>(
    socket: UdpSocket,
    dispatcher: QueryDispatcher,
    config: &ServiceConfig,
    shutdown: F,
) -> io::Result<()>
where
    F: Future<Output = ()>,
{
    let socket = Arc::new(socket);
    let (sender, receiver) = mpsc::channel(config.queue_depth);
    let queue: SharedQueue = Arc::new(Mutex::new(receiver));

    let mut workers = JoinSet::new();
    for worker in 0..config.workers {
        workers.spawn(worker_loop(
            worker,
            Arc::clone(&queue),
            Arc::clone(&socket),
            dispatcher.clone(),
        ));
    }
    info!(
        workers = config.workers,
        queue_depth = config.queue_depth,
        "worker pool started"
    );

    receive_loop(&socket, sender, config.max_datagram_size, shutdown).await;

    while let Some(joined) = workers.join_next().await {
        if let Err(e) = joined {
            warn!(error = %e, "worker terminated abnormally");
        }
    }
    info!("all workers stopped");
    Ok(())
}

async fn receive_loop<F>(
    socket: &UdpSocket,
    sender: mpsc::Sender<Datagram>,
    max_datagram_size: usize,
    shutdown: F,
) where
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut buffer = vec![0u8; max_datagram_size];

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("shutdown requested, no longer receiving");
                break;
            }
            received = socket.recv_from(&mut buffer) => match received {
                Ok((len, peer)) => {
                    let datagram = Datagram {
                        payload: buffer[..len].to_vec(),
                        peer,
                    };
                    if sender.send(datagram).await.is_err() {
                        warn!("worker queue closed, stopping receive loop");
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "failed to receive datagram");
                    record_datagram_dropped("recv_error");
                }
            },
        }
    }
}

async fn worker_loop(
    worker: usize,
    queue: SharedQueue,
    socket: Arc<UdpSocket>,
    dispatcher: QueryDispatcher,
) {
    loop {
        let next = { queue.lock().await.recv().await };
        let Some(Datagram { payload, peer }) = next else {
            break;
        };

        let span = info_span!("datagram", worker, peer = %peer, bytes = payload.len());
        let reply = {
            let dispatcher = dispatcher.clone();
            let span = span.clone();
            tokio::task::spawn_blocking(move || span.in_scope(|| dispatcher.handle(&payload))).await
        };

        let reply = match reply {
            Ok(Some(reply)) => reply,
            Ok(None) => continue,
            Err(e) => {
                warn!(parent: &span, error = %e, "dispatch task failed");
                record_datagram_dropped("dispatch_panic");
                continue;
            }
        };

        async {
            match socket.send_to(&reply, peer).await {
                Ok(sent) => debug!(bytes = sent, "reply sent"),
                Err(e) => {
                    warn!(error = %e, "failed to send reply");
                    record_datagram_dropped("send_error");
                }
            }
        }
        .instrument(span)
        .await;
    }
    debug!(worker, "worker exiting");
}
