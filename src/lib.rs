//! # mailgun - async client for the Mailgun email API
//!
//! A Rust client for the Mailgun v3 REST API. Every endpoint is an async
//! method on [`Mailgun`] that returns a [`Response`] wrapping the parsed JSON
//! body, or a [`MailgunError`].
//!
//! ## Features
//!
//! - Streaming `multipart/form-data` encoder with file attachments
//! - Domain placeholder resolution against a default sending domain
//! - Query string building, including the `begin` conversion used by event searches
//! - Private or public key authentication per request
//! - Pluggable [`Transport`] for tests and custom HTTP stacks
//!
//! ## Basic Usage
//!
//! ```no_run
//! use mailgun::{Credentials, Mailgun, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mailgun::MailgunError> {
//!     let credentials = Credentials::private("key-3ax6xnjp29jd6fds4gc373sgvjxteol0")?
//!         .with_domain("samples.mailgun.org");
//!     let mg = Mailgun::new(credentials)?;
//!
//!     let message = Message::new("me@samples.mailgun.org", "you@example.com", "Hello")
//!         .text("Testing some Mailgun awesomeness!")
//!         .tag("welcome");
//!
//!     let response = mg.send_message(message, None).await?;
//!     println!("queued: {:?}", response.get_string("id"));
//!     Ok(())
//! }
//! ```
//!
//! ## Raw requests
//!
//! Endpoints without a dedicated method go through [`Mailgun::send`]. `<>` in
//! the path is replaced by the request's domain.
//!
//! ```no_run
//! use mailgun::{Credentials, HttpMethod, Mailgun, RequestOptions};
//!
//! # async fn run() -> mailgun::Result<()> {
//! let mg = Mailgun::new(Credentials::private("key-example")?)?;
//! let tags = mg
//!     .send(
//!         "get_tags",
//!         "/<>/tags",
//!         HttpMethod::Get,
//!         RequestOptions::new().domain(Some("example.com")),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod credentials;
pub mod error;
pub mod form;
pub mod query;
pub mod response;
pub mod rest;
pub mod time;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use api::domains::NewDomainOptions;
pub use api::lists::{AccessLevel, MailingList, MailingListUpdate};
pub use api::messages::Message;
pub use api::routes::{Route, RouteUpdate};
pub use api::suppressions::Suppression;
pub use api::{ListOptions, PageOptions, DEFAULT_LIMIT};
pub use client::{create_http_client, Config};
pub use credentials::Credentials;
pub use error::{MailgunError, Result};
pub use form::{FileAttachment, FileSource, FormData};
pub use query::{build_event_query, build_query_string};
pub use response::{Param, Response};
pub use rest::{FormValue, Mailgun, RequestOptions};
pub use time::Time;
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, RequestBody, ReqwestTransport, Transport,
    TransportFailure,
};

// Re-export commonly used external types
pub use serde_json::json;
pub use serde_json::Value;
