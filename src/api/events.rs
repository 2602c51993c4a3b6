use crate::error::Result;
use crate::query::build_event_query;
use crate::response::Response;
use crate::rest::{Mailgun, RequestOptions};
use crate::transport::HttpMethod;
use serde::Serialize;

impl Mailgun {
    /// Search the event log.
    ///
    /// `query` is a query string, a parameter map, or `()`. In a map, `begin`
    /// is converted: numbers are multiplied by 1000 and dates become epoch
    /// seconds.
    pub async fn get_events<Q: Serialize>(&self, query: Q, domain: Option<&str>) -> Result<Response> {
        let path = format!("/<>/events{}", build_event_query(query)?);
        self.send(
            "get_events",
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }
}
