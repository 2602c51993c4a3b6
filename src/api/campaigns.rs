use super::PageOptions;
use crate::error::Result;
use crate::query::build_query_string;
use crate::response::Response;
use crate::rest::{required, segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;
use serde::Serialize;

impl Mailgun {
    pub async fn get_campaigns(&self, page: PageOptions, domain: Option<&str>) -> Result<Response> {
        let path = format!("/<>/campaigns{}", page.query());
        self.send(
            "get_campaigns",
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    pub async fn get_campaign(&self, id: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/<>/campaigns/{}", segment("a campaign id", id)?);
        self.send(
            "get_campaign",
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    pub async fn add_campaign(&self, id: &str, name: &str, domain: Option<&str>) -> Result<Response> {
        segment("a campaign id", id)?;
        required("a campaign name", name)?;
        let options = RequestOptions::new()
            .domain(domain)
            .field("name", name)
            .field("id", id);
        self.send("add_campaign", "/<>/campaigns", HttpMethod::Post, options)
            .await
    }

    /// Rename a campaign; without a name only the id is resubmitted
    pub async fn update_campaign(
        &self,
        id: &str,
        name: Option<&str>,
        domain: Option<&str>,
    ) -> Result<Response> {
        let path = format!("/<>/campaigns/{}", segment("a campaign id", id)?);
        let options = RequestOptions::new()
            .domain(domain)
            .optional_field("name", name)
            .field("id", id);
        self.send("update_campaign", &path, HttpMethod::Put, options)
            .await
    }

    pub async fn delete_campaign(&self, id: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/<>/campaigns/{}", segment("a campaign id", id)?);
        self.send(
            "delete_campaign",
            &path,
            HttpMethod::Delete,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    /// Campaign activity. `event_type` defaults to `events`; other values
    /// include `stats`, `clicks`, `opens`, `unsubscribes` and `complaints`.
    pub async fn get_campaign_events<Q: Serialize>(
        &self,
        id: &str,
        event_type: Option<&str>,
        query: Q,
        domain: Option<&str>,
    ) -> Result<Response> {
        let path = format!(
            "/<>/campaigns/{}/{}{}",
            segment("a campaign id", id)?,
            segment("an event type", event_type.unwrap_or("events"))?,
            build_query_string(query)?
        );
        self.send(
            "get_campaign_events",
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }
}
