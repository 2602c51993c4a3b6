use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Param is a convenience type for free-form form fields.
pub type Param = indexmap::IndexMap<String, String>;

/// Response represents a successful (HTTP 200) API response.
/// The body is kept as parsed JSON and can be read by path or deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Parsed JSON body
    pub body: Value,
}

impl Response {
    pub fn new(status: u16, body: Value) -> Self {
        Response { status, body }
    }

    /// Get the raw JSON body
    pub fn raw(&self) -> &Value {
        &self.body
    }

    /// Get the server's `message` field, present on most write operations
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// Apply unmarshals the response body into the provided type
    pub fn apply<T>(&self) -> Result<T, crate::error::MailgunError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value(self.body.clone()).map_err(|e| e.into())
    }

    /// Get a value from the body by a slash-separated path.
    /// For example, "items/0/event" reads the `event` field of the first item.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.body;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(arr) => {
                    let index: usize = part.parse().ok()?;
                    arr.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string value from the body by a slash-separated path
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path).and_then(|v| v.as_str().map(|s| s.to_string()))
    }
}
