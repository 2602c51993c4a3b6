use crate::error::Result;
use crate::response::Response;
use crate::rest::{required, Mailgun, RequestOptions};
use crate::transport::HttpMethod;

impl Mailgun {
    /// Validate a single address. Uses the public key.
    pub async fn validate_address(&self, address: &str) -> Result<Response> {
        required("an address to check", address)?;
        let options = RequestOptions::new().public_key().field("address", address);
        self.send("validate_address", "/address/validate", HttpMethod::Get, options)
            .await
    }

    /// Split a comma-separated address list into parsed and unparseable
    /// entries. `syntax_only` defaults to true. Uses the public key.
    pub async fn parse_addresses(&self, addresses: &str, syntax_only: Option<bool>) -> Result<Response> {
        required("addresses to parse", addresses)?;
        let options = RequestOptions::new()
            .public_key()
            .field("addresses", addresses)
            .field("syntax_only", syntax_only.unwrap_or(true));
        self.send("parse_addresses", "/address/parse", HttpMethod::Get, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::credentials::Credentials;
    use crate::testing::StubTransport;
    use crate::{Mailgun, MailgunError};
    use serde_json::json;

    #[tokio::test]
    async fn test_parse_addresses_uses_public_key() {
        let stub = StubTransport::ok(json!({"parsed": ["bob@example.com"], "unparseable": []}));
        let creds = Credentials::new(None, Some("pubkey-test".to_string())).unwrap();
        let mg = Mailgun::new(creds).unwrap().with_transport(stub.clone());

        let response = mg.parse_addresses("bob@example.com", None).await.unwrap();
        assert_eq!(response.get_string("parsed/0"), Some("bob@example.com".to_string()));

        let request = stub.last_request();
        assert_eq!(request.url, "https://api.mailgun.net/v3/address/parse");
        assert_eq!(
            request.header("Authorization"),
            Some(mg.credentials.basic_auth(true).as_str())
        );
        assert!(request.body_text().contains("name=\"syntax_only\"\r\n\r\ntrue\r\n"));

        let err = mg.validate_address("").await.unwrap_err();
        assert!(matches!(err, MailgunError::Argument(_)));
    }
}
