//! Stub transport for unit tests.

use crate::transport::{HttpMethod, HttpRequest, HttpResponse, RequestBody, Transport, TransportFailure};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, TryStreamExt};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Request as the stub received it, with the body fully drained
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone)]
enum Reply {
    Body { status: u16, chunks: Vec<String> },
    BrokenBody { status: u16, chunk: String, error: String },
    Fail(String),
}

/// Replies to every request with the same canned response
#[derive(Clone)]
pub struct StubTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubTransport {
    pub fn ok(body: Value) -> Self {
        Self::with_status(200, body)
    }

    pub fn with_status(status: u16, body: Value) -> Self {
        Self::new(Reply::Body {
            status,
            chunks: vec![body.to_string()],
        })
    }

    pub fn raw(status: u16, chunks: Vec<&str>) -> Self {
        Self::new(Reply::Body {
            status,
            chunks: chunks.into_iter().map(str::to_string).collect(),
        })
    }

    pub fn broken_body(status: u16, chunk: &str, error: &str) -> Self {
        Self::new(Reply::BrokenBody {
            status,
            chunk: chunk.to_string(),
            error: error.to_string(),
        })
    }

    pub fn failing(error: &str) -> Self {
        Self::new(Reply::Fail(error.to_string()))
    }

    fn new(reply: Reply) -> Self {
        StubTransport {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> CapturedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let body = match request.body {
            RequestBody::Empty => Vec::new(),
            RequestBody::Json(json) => json.into_bytes(),
            RequestBody::Form(stream) => stream
                .map_ok(|chunk| chunk.to_vec())
                .try_concat()
                .await
                .map_err(|e| TransportFailure(e.to_string()))?,
        };
        self.requests.lock().unwrap().push(CapturedRequest {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body,
        });

        match self.reply.clone() {
            Reply::Body { status, chunks } => Ok(HttpResponse {
                status,
                body: Box::pin(stream::iter(
                    chunks
                        .into_iter()
                        .map(|c| Ok::<Bytes, TransportFailure>(Bytes::from(c))),
                )),
            }),
            Reply::BrokenBody {
                status,
                chunk,
                error,
            } => Ok(HttpResponse {
                status,
                body: Box::pin(stream::iter(vec![
                    Ok(Bytes::from(chunk)),
                    Err(TransportFailure(error)),
                ])),
            }),
            Reply::Fail(error) => Err(TransportFailure(error)),
        }
    }
}

/// Boundary parameter of a multipart content type
pub fn boundary_of(content_type: &str) -> &str {
    content_type
        .split("boundary=")
        .nth(1)
        .expect("content type has no boundary")
}
