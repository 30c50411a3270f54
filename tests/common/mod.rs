//! Shared utilities for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use dragonchain_client::error::BoxError;
use dragonchain_client::{Client, Credentials, HttpSend};

pub const CHAIN_ID: &str = "test-chain";
pub const AUTH_KEY: &str = "test-secret";
pub const AUTH_KEY_ID: &str = "TESTKEY";

pub fn credentials() -> Credentials {
    Credentials::new(CHAIN_ID, AUTH_KEY, AUTH_KEY_ID)
}

/// Client wired to a mock sender.
pub fn client(sender: &MockSender) -> Client {
    Client::with_sender(credentials(), sender.clone()).with_endpoint("http://chain.test")
}

/// A request as seen by the mock sender.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    /// Path plus query, exactly as signed.
    pub resource: String,
    pub headers: reqwest::header::HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

enum Reply {
    Http(u16, String),
    Fail(String),
}

#[derive(Default)]
struct MockState {
    replies: VecDeque<Reply>,
    requests: Vec<RecordedRequest>,
}

/// Recording [`HttpSend`] that answers with queued replies.
#[derive(Clone, Default)]
pub struct MockSender {
    state: Arc<Mutex<MockState>>,
}

impl MockSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an envelope reply.
    pub fn respond(&self, status: u16, body: serde_json::Value) {
        self.respond_raw(status, &body.to_string());
    }

    /// Queue a raw body reply.
    pub fn respond_raw(&self, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .replies
            .push_back(Reply::Http(status, body.to_string()));
    }

    /// Queue a transport failure.
    pub fn fail(&self, message: &str) {
        self.state
            .lock()
            .unwrap()
            .replies
            .push_back(Reply::Fail(message.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpSend for MockSender {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, BoxError> {
        let url = request.url();
        let resource = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        let recorded = RecordedRequest {
            method: request.method().to_string(),
            url: url.to_string(),
            resource,
            headers: request.headers().clone(),
            body: request
                .body()
                .and_then(|b| b.as_bytes())
                .map(|b| b.to_vec())
                .unwrap_or_default(),
        };

        let reply = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(recorded);
            state.replies.pop_front()
        };

        match reply {
            Some(Reply::Http(status, body)) => {
                let response = http::Response::builder().status(status).body(body)?;
                Ok(reqwest::Response::from(response))
            }
            Some(Reply::Fail(message)) => Err(message.into()),
            None => Err("no mock reply queued".into()),
        }
    }
}

/// Start a one-shot-per-connection HTTP backend that records raw requests.
pub async fn start_recording_backend(
    status: u16,
    body: String,
) -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = seen.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let recorded = recorded.clone();
                    let body = body.clone();
                    tokio::spawn(async move {
                        let raw = read_request(&mut socket).await;
                        recorded.lock().unwrap().push(raw);

                        let status_text = match status {
                            200 => "200 OK",
                            201 => "201 Created",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            _ => "200 OK",
                        };
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, seen)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
