//! HTTP access to the activities backend.

use reqwest::{Client, Method};
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::models::ActivitySet;

/// What the server said about a sign-up or unregister request.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionReply {
    /// 2xx with the server's `message`.
    Accepted { message: String },
    /// Any other status, with the server's `detail` when it sent a usable one.
    Rejected { detail: Option<String> },
}

#[derive(Clone, Debug)]
pub struct ActivityClient {
    http: Client,
    base_url: String,
}

impl PartialEq for ActivityClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ActivityClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self { http: Client::new(), base_url: config.api_base_url.clone() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_activities(&self) -> Result<ActivitySet> {
        let url = format!("{}/activities", self.base_url);
        debug!(%url, "fetching activities");
        let set = self.http.get(&url).send().await?.json::<ActivitySet>().await?;
        debug!(count = set.len(), "activities loaded");
        Ok(set)
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<ActionReply> {
        self.send_action(Method::POST, &self.action_url(activity, "signup", email)).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<ActionReply> {
        self.send_action(Method::DELETE, &self.action_url(activity, "unregister", email)).await
    }

    fn action_url(&self, activity: &str, verb: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{verb}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }

    async fn send_action(&self, method: Method, url: &str) -> Result<ActionReply> {
        debug!(%method, %url, "sending action");
        let response = self.http.request(method, url).send().await?;
        let status = response.status();
        // The body is decoded before the status is looked at: a non-JSON body
        // fails the action even on an error status.
        let body: Value = response.json().await?;
        debug!(%status, "action response");
        Ok(reply_from(status.is_success(), &body))
    }
}

fn reply_from(ok: bool, body: &Value) -> ActionReply {
    if ok {
        let message = body.get("message").map(text_of).unwrap_or_default();
        ActionReply::Accepted { message }
    } else {
        let detail = body.get("detail").map(text_of).filter(|d| !d.is_empty());
        ActionReply::Rejected { detail }
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn client(base: &str) -> ActivityClient {
        let config = ClientConfig::default().with_base_url(base).unwrap();
        ActivityClient::new(&config)
    }

    #[test]
    fn action_urls_are_percent_encoded() {
        let c = client("http://localhost:8000/");
        assert_eq!(
            c.action_url("Art & Craft/2", "signup", "kid+1@school.edu"),
            "http://localhost:8000/activities/Art%20%26%20Craft%2F2/signup?email=kid%2B1%40school.edu"
        );
    }

    #[test]
    fn success_reply_uses_message() {
        assert_eq!(
            reply_from(true, &json!({"message": "Signed up!"})),
            ActionReply::Accepted { message: "Signed up!".into() }
        );
        assert_eq!(reply_from(true, &json!("ok")), ActionReply::Accepted { message: String::new() });
    }

    #[test]
    fn rejection_detail_is_optional() {
        assert_eq!(
            reply_from(false, &json!({"detail": "Already registered"})),
            ActionReply::Rejected { detail: Some("Already registered".into()) }
        );
        assert_eq!(reply_from(false, &json!({})), ActionReply::Rejected { detail: None });
        assert_eq!(reply_from(false, &json!({"detail": ""})), ActionReply::Rejected { detail: None });
        assert_eq!(reply_from(false, &json!({"detail": null})), ActionReply::Rejected { detail: None });
    }
}
