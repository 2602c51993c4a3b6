use crate::error::Result;
use crate::response::Response;
use crate::rest::{required, segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;

impl Mailgun {
    pub async fn get_webhooks(&self, domain: Option<&str>) -> Result<Response> {
        self.send(
            "get_webhooks",
            "/domains/<>/webhooks",
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    /// Fetch one webhook by event id (`delivered`, `opened`, ...)
    pub async fn get_webhook(&self, id: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/domains/<>/webhooks/{}", segment("a webhook id", id)?);
        self.send(
            "get_webhook",
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    pub async fn add_webhook(&self, id: &str, url: &str, domain: Option<&str>) -> Result<Response> {
        segment("a webhook id", id)?;
        required("a webhook url", url)?;
        let options = RequestOptions::new()
            .domain(domain)
            .field("id", id)
            .field("url", url);
        self.send("add_webhook", "/domains/<>/webhooks", HttpMethod::Post, options)
            .await
    }

    pub async fn update_webhook(&self, id: &str, url: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/domains/<>/webhooks/{}", segment("a webhook id", id)?);
        required("a webhook url", url)?;
        let options = RequestOptions::new().domain(domain).field("url", url);
        self.send("update_webhook", &path, HttpMethod::Put, options)
            .await
    }

    pub async fn delete_webhook(&self, id: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/domains/<>/webhooks/{}", segment("a webhook id", id)?);
        self.send(
            "delete_webhook",
            &path,
            HttpMethod::Delete,
            RequestOptions::new().domain(domain),
        )
        .await
    }
}
