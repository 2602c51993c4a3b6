use crate::client::Config;
use crate::credentials::Credentials;
use crate::error::{MailgunError, Result};
use crate::form::{FileAttachment, FormData};
use crate::response::Response;
use crate::transport::{HttpMethod, HttpRequest, RequestBody, ReqwestTransport, Transport};
use futures::StreamExt;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Placeholder in resource paths that is replaced by the effective domain
pub const DOMAIN_PLACEHOLDER: &str = "<>";

/// API version prefix prepended to every resource path
pub const API_PREFIX: &str = "/v3";

/// Value of one form field
#[derive(Debug, Clone)]
pub enum FormValue {
    Text(String),
    /// One part per element, all under the same name
    List(Vec<String>),
    File(FileAttachment),
    Files(Vec<FileAttachment>),
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for FormValue {
    fn from(values: Vec<String>) -> Self {
        FormValue::List(values)
    }
}

impl From<FileAttachment> for FormValue {
    fn from(file: FileAttachment) -> Self {
        FormValue::File(file)
    }
}

impl From<Vec<FileAttachment>> for FormValue {
    fn from(files: Vec<FileAttachment>) -> Self {
        FormValue::Files(files)
    }
}

/// Per-request options for [`Mailgun::send`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Substituted for `<>` in the path; falls back to the default domain
    pub domain: Option<String>,
    /// Authenticate with the public key instead of the private one
    pub use_public_key: bool,
    /// Multipart fields in emission order; names may repeat
    pub form_data: Option<Vec<(String, FormValue)>>,
    /// JSON body, used only when there is no form data
    pub json: Option<Value>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn domain(mut self, domain: Option<&str>) -> Self {
        self.domain = domain.map(str::to_string);
        self
    }

    pub fn public_key(mut self) -> Self {
        self.use_public_key = true;
        self
    }

    /// Append a form field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<FormValue>) -> Self {
        self.form_data
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    /// Append a form field when a value is present
    pub fn optional_field<V: Into<FormValue>>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub fn json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }

    /// Read options from a loosely typed configuration object.
    ///
    /// Recognized keys: `domain`, `usePublicKey`, `formData`, `json`. Null means
    /// no options; any other non-object value is rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(MailgunError::argument(format!(
                    "options must be an object, got {}",
                    other
                )))
            }
        };

        let mut options = RequestOptions::default();
        match map.get("domain") {
            None | Some(Value::Null) => {}
            Some(Value::String(domain)) => options.domain = Some(domain.clone()),
            Some(_) => return Err(MailgunError::argument("`domain` must be a string")),
        }
        match map.get("usePublicKey") {
            None | Some(Value::Null) => {}
            Some(Value::Bool(flag)) => options.use_public_key = *flag,
            Some(_) => return Err(MailgunError::argument("`usePublicKey` must be a boolean")),
        }
        match map.get("formData") {
            None | Some(Value::Null) => {}
            Some(Value::Object(fields)) => {
                let mut form = Vec::with_capacity(fields.len());
                for (name, value) in fields {
                    form.push((name.clone(), form_value_from_json(name, value)?));
                }
                options.form_data = Some(form);
            }
            Some(_) => return Err(MailgunError::argument("`formData` must be an object")),
        }
        if let Some(json) = map.get("json").filter(|v| !v.is_null()) {
            options.json = Some(json.clone());
        }

        Ok(options)
    }
}

fn form_value_from_json(name: &str, value: &Value) -> Result<FormValue> {
    match value {
        Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => items
            .iter()
            .map(|item| file_from_json(name, item))
            .collect::<Result<Vec<_>>>()
            .map(FormValue::Files),
        Value::Array(items) => items
            .iter()
            .map(|item| text_from_json(name, item))
            .collect::<Result<Vec<_>>>()
            .map(FormValue::List),
        Value::Object(_) => file_from_json(name, value).map(FormValue::File),
        other => text_from_json(name, other).map(FormValue::Text),
    }
}

fn text_from_json(name: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(MailgunError::InvalidField(format!(
            "`{}` must be a string, number or boolean",
            name
        ))),
    }
}

/// File descriptor: `{ "contentType", "path" | "data", "filename"? }`
fn file_from_json(name: &str, value: &Value) -> Result<FileAttachment> {
    let media_type = value
        .get("contentType")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            MailgunError::InvalidField(format!("file `{}` needs a contentType", name))
        })?;
    let file_name = value.get("filename").and_then(Value::as_str);

    let attachment = if let Some(path) = value.get("path").and_then(Value::as_str) {
        FileAttachment::from_path(path, media_type)
    } else if let Some(data) = value.get("data").and_then(Value::as_str) {
        FileAttachment::from_bytes(data.to_string().into_bytes(), media_type, name)
    } else {
        return Err(MailgunError::InvalidField(format!(
            "file `{}` needs a path or data",
            name
        )));
    };

    Ok(match file_name {
        Some(file_name) => attachment.with_file_name(file_name),
        None => attachment,
    })
}

/// Context for Mailgun API requests
#[derive(Clone)]
pub struct Mailgun {
    /// Configuration
    pub config: Config,
    /// API keys and default domain
    pub credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Mailgun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailgun")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl Mailgun {
    /// Create a new context with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, Config::default())
    }

    /// Create a new context with custom configuration
    pub fn with_config(credentials: Credentials, config: Config) -> Result<Self> {
        let transport = ReqwestTransport::from_config(&config)?;
        Ok(Mailgun {
            config,
            credentials,
            transport: Arc::new(transport),
        })
    }

    /// Replace the transport requests are executed on
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Pick the domain for a call: the explicit one, else the configured default
    pub fn resolve_domain<'a>(&'a self, explicit: Option<&'a str>) -> Result<&'a str> {
        let domain = explicit
            .filter(|d| !d.is_empty())
            .or_else(|| self.credentials.default_domain())
            .ok_or(MailgunError::DomainRequired)?;
        segment("a domain", domain)
    }

    /// Versioned path with the domain placeholder filled in.
    ///
    /// Only the first `<>` before any query string is substituted.
    pub fn resolve_path(&self, path: &str, domain: Option<&str>) -> Result<String> {
        if path.is_empty() {
            return Err(MailgunError::argument("a resource path is required"));
        }
        let (template, query) = path.split_at(path.find('?').unwrap_or(path.len()));
        if template.contains(DOMAIN_PLACEHOLDER) {
            let domain = self.resolve_domain(domain)?;
            return Ok(format!(
                "{}{}{}",
                API_PREFIX,
                template.replacen(DOMAIN_PLACEHOLDER, domain, 1),
                query
            ));
        }
        Ok(format!("{}{}", API_PREFIX, path))
    }

    /// Build the outbound request without sending it
    pub async fn build_request(
        &self,
        path: &str,
        method: HttpMethod,
        options: RequestOptions,
    ) -> Result<HttpRequest> {
        let path = self.resolve_path(path, options.domain.as_deref())?;
        let url = format!("{}{}", self.config.base_url(), path);

        let mut headers = vec![(
            "Authorization".to_string(),
            self.credentials.basic_auth(options.use_public_key),
        )];

        let body = if let Some(fields) = options.form_data {
            let form = encode_form(fields).await?;
            headers.push(("Content-Type".to_string(), form.content_type()));
            RequestBody::Form(form.into_stream())
        } else if let Some(json) = options.json {
            let json = serde_json::to_string(&json)?;
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
            headers.push(("Content-Length".to_string(), json.len().to_string()));
            RequestBody::Json(json)
        } else {
            RequestBody::Empty
        };

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Execute one API request.
    ///
    /// `operation` names the calling endpoint in connection errors. A 200
    /// status resolves with the parsed body; any other status fails with
    /// [`MailgunError::Api`] carrying the parsed error body.
    pub async fn send(
        &self,
        operation: &str,
        path: &str,
        method: HttpMethod,
        options: RequestOptions,
    ) -> Result<Response> {
        let request = self.build_request(path, method, options).await?;
        let target = request.url.clone();

        debug!(operation, %method, url = %target, "sending request");
        let start = Instant::now();

        let response = self.transport.execute(request).await.map_err(|e| {
            warn!(operation, url = %target, error = %e, "connection failed");
            MailgunError::transport(operation, e)
        })?;
        let status = response.status;

        let mut body = Vec::new();
        let mut chunks = response.body;
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(|e| {
                warn!(operation, url = %target, error = %e, "connection lost while reading body");
                MailgunError::transport(operation, e)
            })?;
            body.extend_from_slice(&chunk);
        }

        debug!(
            operation,
            status,
            elapsed = ?start.elapsed(),
            "received response"
        );
        if self.config.debug {
            debug!(operation, body = %String::from_utf8_lossy(&body), "response body");
        }

        let parsed: Value = serde_json::from_slice(&body)?;
        if status == 200 {
            Ok(Response::new(status, parsed))
        } else {
            warn!(operation, status, "request rejected");
            Err(MailgunError::Api {
                status,
                body: parsed,
            })
        }
    }

    /// [`send`](Self::send) with a string method and a loosely typed options object
    pub async fn send_raw(
        &self,
        operation: &str,
        path: &str,
        method: &str,
        options: &Value,
    ) -> Result<Response> {
        let method: HttpMethod = method.parse()?;
        let options = RequestOptions::from_value(options)?;
        self.send(operation, path, method, options).await
    }
}

async fn encode_form(fields: Vec<(String, FormValue)>) -> Result<FormData> {
    let mut form = FormData::new();
    for (name, value) in fields {
        match value {
            FormValue::Text(text) => form.add_field(&name, text)?,
            FormValue::List(values) => {
                for text in values {
                    form.add_field(&name, text)?;
                }
            }
            FormValue::File(file) => add_attachment(&mut form, &name, &file).await?,
            FormValue::Files(files) => {
                for file in &files {
                    add_attachment(&mut form, &name, file).await?;
                }
            }
        }
    }
    Ok(form)
}

async fn add_attachment(form: &mut FormData, name: &str, file: &FileAttachment) -> Result<()> {
    let content = file.load().await?;
    form.add_file(name, content, &file.media_type, &file.file_name)
}

/// Check a caller-supplied path segment
pub(crate) fn segment<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(MailgunError::argument(format!("{} is required", what)));
    }
    if value.contains(['/', '?', '#', '<', '>']) || value.chars().any(char::is_whitespace) {
        return Err(MailgunError::argument(format!(
            "{} contains characters not allowed in a path: {:?}",
            what, value
        )));
    }
    Ok(value)
}

/// Check a required free-text argument
pub(crate) fn required<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(MailgunError::argument(format!("{} is required", what)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::tests::parse_multipart;
    use crate::testing::{boundary_of, StubTransport};
    use serde_json::json;

    fn mailgun(domain: Option<&str>, stub: &StubTransport) -> Mailgun {
        let mut creds = Credentials::private("KEY-PRIVATEAPI")
            .unwrap()
            .with_public_key("KEY-PUBLICAPI");
        if let Some(domain) = domain {
            creds = creds.with_domain(domain);
        }
        Mailgun::new(creds).unwrap().with_transport(stub.clone())
    }

    #[test]
    fn test_resolve_domain() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(Some("d.com"), &stub);
        assert_eq!(mg.resolve_domain(None).unwrap(), "d.com");
        assert_eq!(mg.resolve_domain(Some("e.com")).unwrap(), "e.com");

        let mg = mailgun(None, &stub);
        assert_eq!(mg.resolve_domain(Some("e.com")).unwrap(), "e.com");
        assert!(matches!(mg.resolve_domain(None), Err(MailgunError::DomainRequired)));
    }

    #[test]
    fn test_resolve_path() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(None, &stub);
        assert_eq!(mg.resolve_path("/resource", None).unwrap(), "/v3/resource");
        assert_eq!(
            mg.resolve_path("/<>/messages", Some("example.com")).unwrap(),
            "/v3/example.com/messages"
        );
        assert!(matches!(
            mg.resolve_path("/<>/messages", None),
            Err(MailgunError::DomainRequired)
        ));
        assert!(matches!(mg.resolve_path("", None), Err(MailgunError::Argument(_))));
    }

    #[tokio::test]
    async fn test_resolves_on_200() {
        let stub = StubTransport::ok(json!({"message": "ok"}));
        let mg = mailgun(Some("d.com"), &stub);
        let response = mg
            .send("test", "/domains", HttpMethod::Get, RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(response.body, json!({"message": "ok"}));
    }

    #[tokio::test]
    async fn test_rejects_other_status_with_body() {
        let stub = StubTransport::with_status(500, json!({"message": "bad"}));
        let mg = mailgun(Some("d.com"), &stub);
        let err = mg
            .send("test", "/domains", HttpMethod::Get, RequestOptions::new())
            .await
            .unwrap_err();
        match err {
            MailgunError::Api { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, json!({"message": "bad"}));
            }
            other => panic!("expected Api error, got {:?}", other),
        }

        // 2xx other than 200 is still a rejection
        let stub = StubTransport::with_status(202, json!({"message": "accepted"}));
        let mg = mailgun(Some("d.com"), &stub);
        let err = mg
            .send("test", "/domains", HttpMethod::Get, RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(202));
    }

    #[tokio::test]
    async fn test_domain_substitution_and_auth() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(None, &stub);
        mg.send(
            "test",
            "/<>/messages",
            HttpMethod::Post,
            RequestOptions::new().domain(Some("example.com")),
        )
        .await
        .unwrap();

        let request = stub.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.mailgun.net/v3/example.com/messages");
        assert_eq!(
            request.header("Authorization"),
            Some(mg.credentials.basic_auth(false).as_str())
        );
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_public_key_auth() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(None, &stub);
        mg.send(
            "test",
            "/address/validate",
            HttpMethod::Get,
            RequestOptions::new().public_key(),
        )
        .await
        .unwrap();
        assert_eq!(
            stub.last_request().header("Authorization"),
            Some(mg.credentials.basic_auth(true).as_str())
        );
    }

    #[tokio::test]
    async fn test_missing_domain_makes_no_request() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(None, &stub);
        let err = mg
            .send("test", "/<>/stats", HttpMethod::Get, RequestOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MailgunError::DomainRequired));
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_form_array_expansion() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(Some("d.com"), &stub);
        let tags: Vec<String> = vec!["x".into(), "y".into(), "z".into()];
        mg.send(
            "test",
            "/<>/messages",
            HttpMethod::Post,
            RequestOptions::new().field("tag", tags),
        )
        .await
        .unwrap();

        let request = stub.last_request();
        let content_type = request.header("Content-Type").unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));
        let fields = parse_multipart(&request.body_text(), boundary_of(content_type));
        assert_eq!(
            fields,
            vec![
                ("tag".to_string(), "x".to_string()),
                ("tag".to_string(), "y".to_string()),
                ("tag".to_string(), "z".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_json_body() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(Some("d.com"), &stub);
        mg.send(
            "test",
            "/<>/bounces",
            HttpMethod::Post,
            RequestOptions::new().json(json!([{"address": "bob@example.com"}])),
        )
        .await
        .unwrap();

        let request = stub.last_request();
        let expected = r#"[{"address":"bob@example.com"}]"#;
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(
            request.header("Content-Length"),
            Some(expected.len().to_string().as_str())
        );
        assert_eq!(request.body_text(), expected);
    }

    #[tokio::test]
    async fn test_form_wins_over_json() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(Some("d.com"), &stub);
        mg.send(
            "test",
            "/<>/messages",
            HttpMethod::Post,
            RequestOptions::new().field("a", "1").json(json!({"ignored": true})),
        )
        .await
        .unwrap();
        let request = stub.last_request();
        assert!(request
            .header("Content-Type")
            .unwrap()
            .starts_with("multipart/form-data"));
        assert!(!request.body_text().contains("ignored"));
    }

    #[tokio::test]
    async fn test_transport_failure_shape() {
        let stub = StubTransport::failing("connection refused");
        let mg = mailgun(Some("d.com"), &stub);
        let err = mg
            .send("get_stats", "/<>/stats", HttpMethod::Get, RequestOptions::new())
            .await
            .unwrap_err();
        assert!(err.is_transport());
        let message = err.to_string();
        assert!(message.contains("Problem connecting"));
        assert!(message.contains("get_stats"));
        assert!(message.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_failure_while_reading_body() {
        let stub = StubTransport::broken_body(200, "{\"mess", "connection reset");
        let mg = mailgun(Some("d.com"), &stub);
        let err = mg
            .send("test", "/domains", HttpMethod::Get, RequestOptions::new())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_invalid_json_is_propagated() {
        let stub = StubTransport::raw(200, vec!["<html>", "oops</html>"]);
        let mg = mailgun(Some("d.com"), &stub);
        let err = mg
            .send("test", "/domains", HttpMethod::Get, RequestOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, MailgunError::Json(_)));
    }

    #[tokio::test]
    async fn test_body_assembled_from_chunks() {
        let stub = StubTransport::raw(200, vec!["{\"mess", "age\":", "\"ok\"}"]);
        let mg = mailgun(Some("d.com"), &stub);
        let response = mg
            .send("test", "/domains", HttpMethod::Get, RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(response.message(), Some("ok"));
    }

    #[tokio::test]
    async fn test_send_raw_validates_arguments() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(Some("d.com"), &stub);

        let err = mg.send_raw("test", "/domains", "GET", &json!(true)).await.unwrap_err();
        assert!(matches!(err, MailgunError::Argument(_)));

        let err = mg.send_raw("test", "/domains", "", &Value::Null).await.unwrap_err();
        assert!(matches!(err, MailgunError::Argument(_)));

        let err = mg.send_raw("test", "", "GET", &Value::Null).await.unwrap_err();
        assert!(matches!(err, MailgunError::Argument(_)));
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_send_raw_with_options_object() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(None, &stub);
        mg.send_raw(
            "test",
            "/<>/messages",
            "post",
            &json!({
                "domain": "example.com",
                "usePublicKey": true,
                "formData": {
                    "to": "bob@example.com",
                    "o:tag": ["a", "b"],
                    "attachment": {"contentType": "text/plain", "data": "hello", "filename": "hello.txt"}
                }
            }),
        )
        .await
        .unwrap();

        let request = stub.last_request();
        assert_eq!(request.url, "https://api.mailgun.net/v3/example.com/messages");
        assert_eq!(
            request.header("Authorization"),
            Some(mg.credentials.basic_auth(true).as_str())
        );
        let body = request.body_text();
        let fields = parse_multipart(&body, boundary_of(request.header("Content-Type").unwrap()));
        assert_eq!(
            fields,
            vec![
                ("to".to_string(), "bob@example.com".to_string()),
                ("o:tag".to_string(), "a".to_string()),
                ("o:tag".to_string(), "b".to_string()),
                ("attachment".to_string(), "hello".to_string()),
            ]
        );
        assert!(body.contains("filename=\"hello.txt\"\r\nContent-Type: text/plain"));
    }

    #[test]
    fn test_segment_validation() {
        assert_eq!(segment("an id", "abc").unwrap(), "abc");
        assert!(segment("an id", "").is_err());
        assert!(segment("an id", "a/b").is_err());
        assert!(segment("an id", "a b").is_err());
        assert!(segment("an id", "<>").is_err());
    }

    #[test]
    fn test_placeholder_only_in_template() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(Some("d.com"), &stub);
        assert_eq!(
            mg.resolve_path("/<>/events?subject=<>", None).unwrap(),
            "/v3/d.com/events?subject=<>"
        );
        assert_eq!(
            mg.resolve_path("/domains?name=<>", None).unwrap(),
            "/v3/domains?name=<>"
        );
    }

    #[test]
    fn test_domain_is_checked_as_segment() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(None, &stub);
        for bad in ["a.com/../../lists", "a.com?x=1", "a com", "<>"] {
            assert!(
                matches!(mg.resolve_domain(Some(bad)), Err(MailgunError::Argument(_))),
                "{} should be rejected",
                bad
            );
        }

        let mg = mailgun(Some("bad/domain"), &stub);
        assert!(matches!(mg.resolve_domain(None), Err(MailgunError::Argument(_))));
    }

    #[tokio::test]
    async fn test_unsafe_domain_makes_no_request() {
        let stub = StubTransport::ok(json!({}));
        let mg = mailgun(Some("d.com"), &stub);
        let err = mg
            .get_smtp_users(Some("a.com/../../lists"))
            .await
            .unwrap_err();
        assert!(matches!(err, MailgunError::Argument(_)));

        let err = mg.get_domain("<>").await.unwrap_err();
        assert!(matches!(err, MailgunError::Argument(_)));
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_query_placeholder_left_alone() {
        let stub = StubTransport::ok(json!({"items": []}));
        let mg = mailgun(Some("d.com"), &stub);
        mg.get_events("subject=<>", None).await.unwrap();
        assert_eq!(
            stub.last_request().url,
            "https://api.mailgun.net/v3/d.com/events?subject=<>"
        );
    }
}
