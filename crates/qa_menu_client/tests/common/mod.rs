//! Minimal in-process HTTP server for integration tests. No mocks: the client
//! under test talks real HTTP/1.1 over a loopback socket.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Running test server: base URL plus the request targets it has seen.
pub struct TestServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    /// Request targets (path and query, still percent-encoded) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Pick a free port by binding to :0 and extracting the assigned port.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Spawn a server answering each request target in `routes` with
/// `200 OK` and the given JSON body. Unknown targets get FastAPI's 404 body.
pub fn spawn_server(routes: &[(&str, &str)]) -> TestServer {
    let routes: HashMap<String, (u16, String)> = routes
        .iter()
        .map(|(target, body)| (target.to_string(), (200, body.to_string())))
        .collect();
    spawn_server_with_status(routes)
}

/// Like [`spawn_server`] but with an explicit status per target.
pub fn spawn_server_with_status(routes: HashMap<String, (u16, String)>) -> TestServer {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            loop {
                let Ok((mut tcp, _)) = listener.accept().await else {
                    break;
                };

                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match tcp.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf);
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("")
                    .to_string();
                seen.lock().unwrap().push(target.clone());

                let (status, body) = routes
                    .get(&target)
                    .cloned()
                    .unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    if status == 200 { "OK" } else { "Error" },
                    body.len(),
                    body
                );
                let _ = tcp.write_all(response.as_bytes()).await;
                let _ = tcp.shutdown().await;
            }
        });
    });

    TestServer {
        base_url: format!("http://127.0.0.1:{}", port),
        requests,
    }
}
