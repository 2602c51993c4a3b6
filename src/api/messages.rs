use crate::error::{MailgunError, Result};
use crate::form::FileAttachment;
use crate::query::build_event_query;
use crate::response::Response;
use crate::rest::{segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;
use serde_json::json;

/// An outgoing message
#[derive(Debug, Clone, Default)]
pub struct Message {
    pub from: String,
    pub to: Vec<String>,
    pub cc: Vec<String>,
    pub bcc: Vec<String>,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
    /// Sent as repeated `o:tag` fields
    pub tags: Vec<String>,
    /// Any other API field (`o:*`, `h:*`, `v:*`) in insertion order
    pub extra: Vec<(String, String)>,
    pub attachments: Vec<FileAttachment>,
    pub inline: Vec<FileAttachment>,
}

impl Message {
    pub fn new(from: impl Into<String>, to: impl Into<String>, subject: impl Into<String>) -> Self {
        Message {
            from: from.into(),
            to: vec![to.into()],
            subject: subject.into(),
            ..Default::default()
        }
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to.push(to.into());
        self
    }

    pub fn cc(mut self, cc: impl Into<String>) -> Self {
        self.cc.push(cc.into());
        self
    }

    pub fn bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc.push(bcc.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    pub fn attach(mut self, file: FileAttachment) -> Self {
        self.attachments.push(file);
        self
    }

    pub fn inline(mut self, file: FileAttachment) -> Self {
        self.inline.push(file);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.from.is_empty() {
            return Err(MailgunError::argument("a sender (`from`) is required"));
        }
        if self.to.iter().all(String::is_empty) {
            return Err(MailgunError::argument("at least one recipient (`to`) is required"));
        }
        if self.subject.is_empty() {
            return Err(MailgunError::argument("a subject is required"));
        }
        if self.text.is_none() && self.html.is_none() {
            return Err(MailgunError::argument("a text or html body is required"));
        }
        Ok(())
    }

    fn into_options(self) -> RequestOptions {
        let mut options = RequestOptions::new()
            .field("from", self.from)
            .field("to", non_empty(self.to))
            .field("subject", self.subject)
            .optional_field("text", self.text)
            .optional_field("html", self.html);

        for (name, list) in [("cc", self.cc), ("bcc", self.bcc), ("o:tag", self.tags)] {
            if !list.is_empty() {
                options = options.field(name, list);
            }
        }
        for (name, value) in self.extra {
            options = options.field(name, value);
        }
        if !self.attachments.is_empty() {
            options = options.field("attachment", self.attachments);
        }
        if !self.inline.is_empty() {
            options = options.field("inline", self.inline);
        }
        options
    }
}

fn non_empty(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter(|v| !v.is_empty()).collect()
}

impl Mailgun {
    /// Send a message. POST /<domain>/messages
    pub async fn send_message(&self, message: Message, domain: Option<&str>) -> Result<Response> {
        message.validate()?;
        let options = message.into_options().domain(domain);
        self.send("send_message", "/<>/messages", HttpMethod::Post, options)
            .await
    }

    /// Retrieve one stored message by its storage key
    pub async fn get_stored_message(&self, id: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/domains/<>/messages/{}", segment("a message id", id)?);
        self.send(
            "get_stored_message",
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    /// List stored messages through the events API
    pub async fn get_stored_messages(&self, domain: Option<&str>) -> Result<Response> {
        let path = format!("/<>/events{}", build_event_query(json!({"event": "stored"}))?);
        self.send(
            "get_stored_messages",
            &path,
            HttpMethod::Get,
            RequestOptions::new().domain(domain),
        )
        .await
    }

    pub async fn delete_stored_message(&self, id: &str, domain: Option<&str>) -> Result<Response> {
        let path = format!("/domains/<>/messages/{}", segment("a message id", id)?);
        self.send(
            "delete_stored_message",
            &path,
            HttpMethod::Delete,
            RequestOptions::new().domain(domain),
        )
        .await
    }
}
