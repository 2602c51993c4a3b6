use crate::error::{MailgunError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Credentials holds the API key pair and the optional default domain.
/// Users are expected to know which key each endpoint needs; the private key
/// is used unless an endpoint asks for the public one.
#[derive(Clone)]
pub struct Credentials {
    private_key: Option<String>,
    public_key: Option<String>,
    domain: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("private_key", &self.private_key.as_ref().map(|_| "***"))
            .field("public_key", &self.public_key.as_ref().map(|_| "***"))
            .field("domain", &self.domain)
            .finish()
    }
}

impl Credentials {
    /// Create credentials from an optional private and public key.
    ///
    /// At least one key must be present.
    pub fn new(private_key: Option<String>, public_key: Option<String>) -> Result<Self> {
        let private_key = private_key.filter(|k| !k.is_empty());
        let public_key = public_key.filter(|k| !k.is_empty());
        if private_key.is_none() && public_key.is_none() {
            return Err(MailgunError::Configuration(
                "a private or public API key is required".to_string(),
            ));
        }

        Ok(Credentials {
            private_key,
            public_key,
            domain: None,
        })
    }

    /// Credentials with only a private key
    pub fn private(key: impl Into<String>) -> Result<Self> {
        Self::new(Some(key.into()), None)
    }

    /// Set the default domain used when a call omits one
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into()).filter(|d| !d.is_empty());
        self
    }

    /// Set the public key
    pub fn with_public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = Some(key.into()).filter(|k| !k.is_empty());
        self
    }

    pub fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    pub fn default_domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Build the `Authorization` header value: Basic with user `api`.
    /// A missing key is sent as an empty password and left for the server to reject.
    pub fn basic_auth(&self, use_public_key: bool) -> String {
        let key = if use_public_key {
            self.public_key()
        } else {
            self.private_key()
        };
        let token = STANDARD.encode(format!("api:{}", key.unwrap_or_default()));
        format!("Basic {}", token)
    }
}
