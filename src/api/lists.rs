use crate::error::{MailgunError, Result};
use crate::response::{Param, Response};
use crate::rest::{required, segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;
use std::fmt;

/// Who may post to a mailing list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    ReadOnly,
    Members,
    Everyone,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::ReadOnly => "readonly",
            AccessLevel::Members => "members",
            AccessLevel::Everyone => "everyone",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailingList {
    pub address: String,
    pub name: String,
    pub description: String,
    pub access_level: AccessLevel,
}

/// Fields to change on an existing list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailingListUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub access_level: Option<AccessLevel>,
}

fn member_options(fields: &Param) -> RequestOptions {
    fields
        .iter()
        .fold(RequestOptions::new(), |options, (name, value)| {
            options.field(name.as_str(), value.as_str())
        })
}

impl Mailgun {
    pub async fn get_mailing_lists(&self) -> Result<Response> {
        self.send("get_mailing_lists", "/lists", HttpMethod::Get, RequestOptions::new())
            .await
    }

    pub async fn get_mailing_list(&self, address: &str) -> Result<Response> {
        let path = format!("/lists/{}", segment("a list address", address)?);
        self.send("get_mailing_list", &path, HttpMethod::Get, RequestOptions::new())
            .await
    }

    pub async fn add_mailing_list(&self, list: MailingList) -> Result<Response> {
        segment("a list address", &list.address)?;
        required("a list name", &list.name)?;
        required("a list description", &list.description)?;
        let options = RequestOptions::new()
            .field("address", list.address)
            .field("name", list.name)
            .field("description", list.description)
            .field("access_level", list.access_level.as_str());
        self.send("add_mailing_list", "/lists", HttpMethod::Post, options)
            .await
    }

    pub async fn update_mailing_list(
        &self,
        address: &str,
        update: MailingListUpdate,
    ) -> Result<Response> {
        let path = format!("/lists/{}", segment("a list address", address)?);
        if update == MailingListUpdate::default() {
            return Err(MailgunError::argument("no updates were given for the mailing list"));
        }
        let options = RequestOptions::new()
            .optional_field("name", update.name)
            .optional_field("description", update.description)
            .optional_field("access_level", update.access_level.map(|a| a.as_str()));
        self.send("update_mailing_list", &path, HttpMethod::Put, options)
            .await
    }

    pub async fn delete_mailing_list(&self, address: &str) -> Result<Response> {
        let path = format!("/lists/{}", segment("a list address", address)?);
        self.send("delete_mailing_list", &path, HttpMethod::Delete, RequestOptions::new())
            .await
    }

    pub async fn get_list_members(&self, list: &str) -> Result<Response> {
        let path = format!("/lists/{}/members", segment("a list address", list)?);
        self.send("get_list_members", &path, HttpMethod::Get, RequestOptions::new())
            .await
    }

    pub async fn get_list_member(&self, list: &str, member: &str) -> Result<Response> {
        let path = format!(
            "/lists/{}/members/{}",
            segment("a list address", list)?,
            segment("a member address", member)?
        );
        self.send("get_list_member", &path, HttpMethod::Get, RequestOptions::new())
            .await
    }

    /// Add a member. `fields` holds `address` plus any of `name`, `vars`,
    /// `subscribed` and `upsert`, sent in the given order.
    pub async fn add_list_member(&self, list: &str, fields: &Param) -> Result<Response> {
        let path = format!("/lists/{}/members", segment("a list address", list)?);
        self.send("add_list_member", &path, HttpMethod::Post, member_options(fields))
            .await
    }

    pub async fn update_list_member(
        &self,
        list: &str,
        member: &str,
        fields: &Param,
    ) -> Result<Response> {
        let path = format!(
            "/lists/{}/members/{}",
            segment("a list address", list)?,
            segment("a member address", member)?
        );
        if fields.is_empty() {
            return Err(MailgunError::argument("no updates were given for the member"));
        }
        self.send("update_list_member", &path, HttpMethod::Put, member_options(fields))
            .await
    }

    pub async fn delete_list_member(&self, list: &str, member: &str) -> Result<Response> {
        let path = format!(
            "/lists/{}/members/{}",
            segment("a list address", list)?,
            segment("a member address", member)?
        );
        self.send("delete_list_member", &path, HttpMethod::Delete, RequestOptions::new())
            .await
    }
}
