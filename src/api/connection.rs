use crate::error::Result;
use crate::response::Response;
use crate::rest::{Mailgun, RequestOptions};
use crate::transport::HttpMethod;

impl Mailgun {
    pub async fn get_connection_settings(&self, domain: Option<&str>) -> Result<Response> {
        self.send(
            "get_connection_settings",
            "/domains/<>/connection",
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    /// Set whether delivery requires TLS and whether certificates are verified
    pub async fn update_connection_settings(
        &self,
        require_tls: bool,
        skip_verification: bool,
        domain: Option<&str>,
    ) -> Result<Response> {
        let options = RequestOptions::new()
            .domain(domain)
            .field("require_tls", require_tls)
            .field("skip_verification", skip_verification);
        self.send(
            "update_connection_settings",
            "/domains/<>/connection",
            HttpMethod::Put,
            options,
        )
        .await
    }
}
