//! HTTP transport seam.
//!
//! Requests and responses are described as plain data so the dispatcher can
//! be driven by any transport. `ReqwestTransport` is the one used in
//! production; tests substitute their own.

use crate::client::{create_http_client, Config};
use crate::error::Result;
use crate::form::FormStream;
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use reqwest::{Body, Client, Method};
use std::fmt;
use std::pin::Pin;
use std::str::FromStr;

/// HTTP methods used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = crate::error::MailgunError;

    fn from_str(method: &str) -> Result<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "" => Err(crate::error::MailgunError::argument("an HTTP method is required")),
            other => Err(crate::error::MailgunError::argument(format!(
                "unsupported HTTP method: {}",
                other
            ))),
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// Outbound body
pub enum RequestBody {
    /// No body; the request ends right after the headers
    Empty,
    /// Serialized JSON written in one piece
    Json(String),
    /// Sealed multipart form, streamed chunk by chunk
    Form(FormStream),
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestBody::Empty => write!(f, "Empty"),
            RequestBody::Json(json) => write!(f, "Json({} bytes)", json.len()),
            RequestBody::Form(_) => write!(f, "Form"),
        }
    }
}

/// A fully built request
#[derive(Debug)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    /// First header value with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response body chunks as they arrive
pub type BodyStream = Pin<Box<dyn Stream<Item = std::result::Result<Bytes, TransportFailure>> + Send>>;

/// Response head plus a body that is still being received
pub struct HttpResponse {
    pub status: u16,
    pub body: BodyStream,
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish()
    }
}

/// Connection-level failure reported by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure(pub String);

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for TransportFailure {}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        TransportFailure(err.to_string())
    }
}

/// Executes requests over the network
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportFailure>;
}

/// Reqwest-based transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        ReqwestTransport { client }
    }

    /// Transport with a client built from `config`'s timeouts
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(ReqwestTransport {
            client: create_http_client(config)?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportFailure> {
        let mut req = self
            .client
            .request(request.method.into(), request.url.as_str());

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        req = match request.body {
            RequestBody::Empty => req,
            RequestBody::Json(json) => req.body(json),
            RequestBody::Form(stream) => req.body(Body::wrap_stream(stream)),
        };

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(TransportFailure::from));

        Ok(HttpResponse {
            status,
            body: Box::pin(body),
        })
    }
}
