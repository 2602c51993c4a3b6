use super::PageOptions;
use crate::error::{MailgunError, Result};
use crate::response::Response;
use crate::rest::{segment, Mailgun, RequestOptions};
use crate::transport::HttpMethod;

/// An inbound route: a filter expression and the actions to run on a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub priority: i32,
    pub description: Option<String>,
    /// e.g. `match_recipient(".*@example.com")`
    pub filter: String,
    /// e.g. `forward("https://example.com/inbound")`; one field per action
    pub actions: Vec<String>,
}

impl Route {
    pub fn new(priority: i32, filter: impl Into<String>, action: impl Into<String>) -> Self {
        Route {
            priority,
            description: None,
            filter: filter.into(),
            actions: vec![action.into()],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }
}

/// Fields to change on an existing route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteUpdate {
    pub priority: Option<i32>,
    pub description: Option<String>,
    pub filter: Option<String>,
    pub actions: Vec<String>,
}

impl RouteUpdate {
    fn is_empty(&self) -> bool {
        self.priority.is_none()
            && self.description.is_none()
            && self.filter.is_none()
            && self.actions.is_empty()
    }
}

impl Mailgun {
    pub async fn get_routes(&self, page: PageOptions) -> Result<Response> {
        let path = format!("/routes{}", page.query());
        self.send("get_routes", &path, HttpMethod::Get, RequestOptions::new())
            .await
    }

    pub async fn get_route(&self, id: &str) -> Result<Response> {
        let path = format!("/routes/{}", segment("a route id", id)?);
        self.send("get_route", &path, HttpMethod::Get, RequestOptions::new())
            .await
    }

    pub async fn add_route(&self, route: Route) -> Result<Response> {
        if route.filter.is_empty() || route.actions.is_empty() {
            return Err(MailgunError::argument(
                "priority, filter and at least one action must all be set",
            ));
        }
        let options = RequestOptions::new()
            .field("priority", route.priority.to_string())
            .field("description", route.description.unwrap_or_default())
            .field("expression", route.filter)
            .field("action", route.actions);
        self.send("add_route", "/routes", HttpMethod::Post, options)
            .await
    }

    pub async fn update_route(&self, id: &str, update: RouteUpdate) -> Result<Response> {
        let path = format!("/routes/{}", segment("a route id", id)?);
        if update.is_empty() {
            return Err(MailgunError::argument(
                "some information about the route must be specified to update",
            ));
        }
        let mut options = RequestOptions::new()
            .optional_field("priority", update.priority.map(|p| p.to_string()))
            .optional_field("description", update.description)
            .optional_field("expression", update.filter);
        if !update.actions.is_empty() {
            options = options.field("action", update.actions);
        }
        self.send("update_route", &path, HttpMethod::Put, options)
            .await
    }

    pub async fn delete_route(&self, id: &str) -> Result<Response> {
        let path = format!("/routes/{}", segment("a route id", id)?);
        self.send("delete_route", &path, HttpMethod::Delete, RequestOptions::new())
            .await
    }
}
