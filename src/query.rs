use crate::error::{MailgunError, Result};
use crate::time::convert_begin;
use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded;

/// Build the `?...` suffix for a request path.
///
/// Accepts nothing (unit or `None`), a query string with or without its
/// leading `?`, or a map of parameters. Array values repeat their key.
pub fn build_query_string<Q: Serialize>(raw: Q) -> Result<String> {
    let raw = serde_json::to_value(raw)?;
    match raw {
        Value::Null => Ok(String::new()),
        Value::String(s) if s.is_empty() => Ok(String::new()),
        Value::String(s) if s.starts_with('?') => Ok(s),
        Value::String(s) => Ok(format!("?{}", s)),
        Value::Object(map) => {
            if map.is_empty() {
                return Ok(String::new());
            }
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (key, value) in &map {
                match value {
                    Value::Array(items) => {
                        for item in items {
                            serializer.append_pair(key, &scalar_to_string(key, item)?);
                        }
                    }
                    other => {
                        serializer.append_pair(key, &scalar_to_string(key, other)?);
                    }
                }
            }
            Ok(format!("?{}", serializer.finish()))
        }
        other => Err(MailgunError::argument(format!(
            "query must be a string or an object, got {}",
            other
        ))),
    }
}

/// Query string for event searches; a `begin` parameter is converted first.
pub fn build_event_query<Q: Serialize>(raw: Q) -> Result<String> {
    let mut raw = serde_json::to_value(raw)?;
    if let Value::Object(map) = &mut raw {
        if let Some(begin) = map.get_mut("begin") {
            *begin = convert_begin(begin)?;
        }
    }
    build_query_string(raw)
}

fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(MailgunError::argument(format!(
            "query parameter `{}` must be a scalar or a list of scalars",
            key
        ))),
    }
}
