use crate::error::{MailgunError, Result};
use crate::response::Response;
use crate::rest::{segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;

/// Settings for a newly created domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDomainOptions {
    /// `disable`, `tag` or `block`
    pub spam_action: String,
    pub wildcard: bool,
}

impl Default for NewDomainOptions {
    fn default() -> Self {
        NewDomainOptions {
            spam_action: "disable".to_string(),
            wildcard: false,
        }
    }
}

impl Mailgun {
    /// List all domains on the account
    pub async fn get_domains(&self) -> Result<Response> {
        self.send("get_domains", "/domains", HttpMethod::Get, RequestOptions::new())
            .await
    }

    pub async fn get_domain(&self, name: &str) -> Result<Response> {
        let path = format!("/domains/{}", segment("a domain", name)?);
        self.send("get_domain", &path, HttpMethod::Get, RequestOptions::new())
            .await
    }

    pub async fn add_domain(
        &self,
        name: &str,
        smtp_password: &str,
        options: NewDomainOptions,
    ) -> Result<Response> {
        segment("a domain", name)?;
        if smtp_password.is_empty() {
            return Err(MailgunError::argument(
                "an SMTP password is required for the new domain",
            ));
        }
        let options = RequestOptions::new()
            .field("name", name)
            .field("smtp_password", smtp_password)
            .field("spam_action", options.spam_action)
            .field("wildcard", options.wildcard);
        self.send("add_domain", "/domains", HttpMethod::Post, options)
            .await
    }

    pub async fn delete_domain(&self, name: &str) -> Result<Response> {
        let path = format!("/domains/{}", segment("a domain", name)?);
        self.send("delete_domain", &path, HttpMethod::Delete, RequestOptions::new())
            .await
    }
}
