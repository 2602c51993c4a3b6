//! Endpoint methods, one module per remote resource.
//!
//! Every method resolves its arguments into a path and a field set and hands
//! them to [`Mailgun::send`](crate::Mailgun::send). Input errors come back
//! through the returned future before any request is made.

pub mod address;
pub mod campaigns;
pub mod connection;
pub mod domains;
pub mod events;
pub mod lists;
pub mod messages;
pub mod routes;
pub mod smtp;
pub mod stats;
pub mod suppressions;
pub mod webhooks;

/// Page size the API uses when none is given
pub const DEFAULT_LIMIT: u32 = 100;

/// Paging for collection listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Defaults to [`DEFAULT_LIMIT`]
    pub limit: Option<u32>,
    /// Defaults to 0
    pub skip: Option<u32>,
}

impl PageOptions {
    pub fn new(limit: u32, skip: u32) -> Self {
        PageOptions {
            limit: Some(limit),
            skip: Some(skip),
        }
    }

    pub(crate) fn query(&self) -> String {
        format!(
            "?limit={}&skip={}",
            self.limit.unwrap_or(DEFAULT_LIMIT),
            self.skip.unwrap_or(0)
        )
    }
}

/// Options for suppression listings (bounces, unsubscribes, complaints)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Look up a single address instead of listing
    pub address: Option<String>,
    /// Defaults to [`DEFAULT_LIMIT`]
    pub limit: Option<u32>,
    /// Falls back to the default domain
    pub domain: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}
