use crate::error::Result;
use crate::query::build_query_string;
use crate::response::Response;
use crate::rest::{segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;
use serde::Serialize;

impl Mailgun {
    /// Domain statistics. `query` is a query string, a parameter map, or `()`.
    pub async fn get_stats<Q: Serialize>(&self, query: Q, domain: Option<&str>) -> Result<Response> {
        let path = format!("/<>/stats{}", build_query_string(query)?);
        self.send(
            "get_stats",
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    /// Delete a tag and its statistics
    pub async fn delete_tag(&self, tag: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/<>/tags/{}", segment("a tag", tag)?);
        self.send(
            "delete_tag",
            &path,
            HttpMethod::Delete,
            RequestOptions::new().domain(domain),
        )
        .await
    }
}
