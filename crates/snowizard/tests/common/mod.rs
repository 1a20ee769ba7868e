#![allow(dead_code)]

use axum::Router;
use axum::extract::Request;
use axum::http::{HeaderMap, Method, StatusCode, header};
use std::net::{SocketAddr, TcpListener as StdTcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use tokio::sync::oneshot;

/// What a mock server saw for one request.
#[derive(Clone, Debug)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
}

/// A Snowizard stand-in that answers every request with a fixed reply.
///
/// The server runs on its own thread and tokio runtime so blocking clients
/// can call it from plain `#[test]` functions.
pub struct MockServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockServer {
    pub fn start(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let hits = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (ready_tx, ready_rx) = mpsc::channel();

        let handler = {
            let hits = Arc::clone(&hits);
            let seen = Arc::clone(&seen);
            move |req: Request| {
                let hits = Arc::clone(&hits);
                let seen = Arc::clone(&seen);
                let body = body.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    seen.lock().unwrap().push(SeenRequest {
                        method: req.method().clone(),
                        path: req.uri().path().to_owned(),
                        content_type: header_str(req.headers(), header::CONTENT_TYPE),
                        user_agent: header_str(req.headers(), header::USER_AGENT),
                    });
                    (status, body)
                }
            }
        };
        let app = Router::new().fallback(handler);

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build mock server runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("failed to bind mock server");
                ready_tx
                    .send(listener.local_addr().expect("mock server has no address"))
                    .expect("test dropped before mock server started");
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        let addr = ready_rx.recv().expect("mock server failed to start");
        Self {
            addr,
            hits,
            seen,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::start(StatusCode::OK, body)
    }

    /// The `host:port` string a client should be configured with.
    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// A `host:port` that refuses connections.
pub fn closed_host() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("failed to reserve a port");
    let addr = listener.local_addr().expect("reserved port has no address");
    drop(listener);
    addr.to_string()
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
