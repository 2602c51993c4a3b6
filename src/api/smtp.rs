use crate::error::{MailgunError, Result};
use crate::response::Response;
use crate::rest::{segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;

const PASSWORD_MIN: usize = 5;
const PASSWORD_MAX: usize = 32;

fn check_password(password: &str) -> Result<()> {
    let len = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
        return Err(MailgunError::argument(format!(
            "password needs to be between {} and {} characters long",
            PASSWORD_MIN, PASSWORD_MAX
        )));
    }
    Ok(())
}

impl Mailgun {
    /// List SMTP credentials for a domain
    pub async fn get_smtp_users(&self, domain: Option<&str>) -> Result<Response> {
        self.send(
            "get_smtp_users",
            "/domains/<>/credentials",
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    pub async fn add_smtp_user(
        &self,
        login: &str,
        password: &str,
        domain: Option<&str>,
    ) -> Result<Response> {
        segment("a login", login)?;
        check_password(password)?;
        let options = RequestOptions::new()
            .domain(domain)
            .field("login", login)
            .field("password", password);
        self.send("add_smtp_user", "/domains/<>/credentials", HttpMethod::Post, options)
            .await
    }

    /// Change an SMTP user's password
    pub async fn update_smtp_user(
        &self,
        login: &str,
        password: &str,
        domain: Option<&str>,
    ) -> Result<Response> {
        let path = format!("/domains/<>/credentials/{}", segment("a login", login)?);
        check_password(password)?;
        let options = RequestOptions::new()
            .domain(domain)
            .field("password", password);
        self.send("update_smtp_user", &path, HttpMethod::Put, options)
            .await
    }

    pub async fn delete_smtp_user(&self, login: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/domains/<>/credentials/{}", segment("a login", login)?);
        self.send(
            "delete_smtp_user",
            &path,
            HttpMethod::Delete,
            RequestOptions::new().domain(domain),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use crate::testing::StubTransport;
    use serde_json::json;

    fn mailgun(stub: &StubTransport) -> Mailgun {
        let creds = Credentials::private("key-test").unwrap().with_domain("testDomain.com");
        Mailgun::new(creds).unwrap().with_transport(stub.clone())
    }

    #[test]
    fn test_password_length() {
        assert!(check_password("1234").is_err());
        assert!(check_password("12345").is_ok());
        assert!(check_password(&"x".repeat(32)).is_ok());
        assert!(check_password(&"x".repeat(33)).is_err());
    }

    #[tokio::test]
    async fn test_update_smtp_user() {
        let stub = StubTransport::ok(json!({"message": "Password changed"}));
        let mg = mailgun(&stub);
        mg.update_smtp_user("postmaster", "newpassword", None).await.unwrap();

        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(
            request.url,
            "https://api.mailgun.net/v3/domains/testDomain.com/credentials/postmaster"
        );
        assert!(request.body_text().contains("name=\"password\"\r\n\r\nnewpassword\r\n"));
    }

    #[tokio::test]
    async fn test_short_password_rejected_before_sending() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(&stub);
        let err = mg.add_smtp_user("postmaster", "abc", None).await.unwrap_err();
        assert!(matches!(err, MailgunError::Argument(_)));
        assert_eq!(stub.request_count(), 0);
    }
}
