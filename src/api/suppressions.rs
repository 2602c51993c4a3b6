//! Bounces, unsubscribes and complaints.
//!
//! The three suppression lists share one shape: list or look up by address,
//! add records as a JSON array, delete by address.

use super::{ListOptions, DEFAULT_LIMIT};
use crate::error::{MailgunError, Result};
use crate::response::Response;
use crate::rest::{segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    Bounces,
    Unsubscribes,
    Complaints,
}

impl Suppression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Suppression::Bounces => "bounces",
            Suppression::Unsubscribes => "unsubscribes",
            Suppression::Complaints => "complaints",
        }
    }
}

/// A single record becomes a one-element array; arrays pass through
fn records_array(records: Value) -> Result<Value> {
    match records {
        Value::Array(items) if items.is_empty() => {
            Err(MailgunError::argument("at least one record is required"))
        }
        Value::Array(items) => Ok(Value::Array(items)),
        Value::Object(record) => Ok(Value::Array(vec![Value::Object(record)])),
        other => Err(MailgunError::argument(format!(
            "records must be an object or an array of objects, got {}",
            other
        ))),
    }
}

impl Mailgun {
    /// List a suppression table, or fetch one address from it
    pub async fn get_suppressions(
        &self,
        kind: Suppression,
        options: ListOptions,
        operation: &str,
    ) -> Result<Response> {
        let mut path = format!("/<>/{}", kind.as_str());
        if let Some(address) = &options.address {
            path.push('/');
            path.push_str(segment("an address", address)?);
        }
        path.push_str(&format!("?limit={}", options.limit.unwrap_or(DEFAULT_LIMIT)));

        self.send(
            operation,
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(options.domain.as_deref()),
        )
        .await
    }

    /// Add records (`address` plus kind-specific fields) to a suppression table
    pub async fn add_suppressions(
        &self,
        kind: Suppression,
        records: Value,
        domain: Option<&str>,
        operation: &str,
    ) -> Result<Response> {
        let options = RequestOptions::new()
            .domain(domain)
            .json(records_array(records)?);
        let path = format!("/<>/{}", kind.as_str());
        self.send(operation, &path, HttpMethod::Post, options).await
    }

    pub async fn delete_suppression(
        &self,
        kind: Suppression,
        address: &str,
        domain: Option<&str>,
        operation: &str,
    ) -> Result<Response> {
        let path = format!("/<>/{}/{}", kind.as_str(), segment("an address", address)?);
        self.send(
            operation,
            &path,
            HttpMethod::Delete,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    pub async fn get_bounces(&self, options: ListOptions) -> Result<Response> {
        self.get_suppressions(Suppression::Bounces, options, "get_bounces")
            .await
    }

    pub async fn add_bounces(&self, records: Value, domain: Option<&str>) -> Result<Response> {
        self.add_suppressions(Suppression::Bounces, records, domain, "add_bounces")
            .await
    }

    pub async fn delete_bounce(&self, address: &str, domain: Option<&str>) -> Result<Response> {
        self.delete_suppression(Suppression::Bounces, address, domain, "delete_bounce")
            .await
    }

    pub async fn get_unsubscribes(&self, options: ListOptions) -> Result<Response> {
        self.get_suppressions(Suppression::Unsubscribes, options, "get_unsubscribes")
            .await
    }

    pub async fn add_unsubscribes(&self, records: Value, domain: Option<&str>) -> Result<Response> {
        self.add_suppressions(Suppression::Unsubscribes, records, domain, "add_unsubscribes")
            .await
    }

    pub async fn delete_unsubscribe(&self, address: &str, domain: Option<&str>) -> Result<Response> {
        self.delete_suppression(Suppression::Unsubscribes, address, domain, "delete_unsubscribe")
            .await
    }

    pub async fn get_complaints(&self, options: ListOptions) -> Result<Response> {
        self.get_suppressions(Suppression::Complaints, options, "get_complaints")
            .await
    }

    pub async fn add_complaints(&self, records: Value, domain: Option<&str>) -> Result<Response> {
        self.add_suppressions(Suppression::Complaints, records, domain, "add_complaints")
            .await
    }

    pub async fn delete_complaint(&self, address: &str, domain: Option<&str>) -> Result<Response> {
        self.delete_suppression(Suppression::Complaints, address, domain, "delete_complaint")
            .await
    }
}
