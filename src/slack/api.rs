//! Thin client for the handful of Web API methods the bot needs.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{ApiError, ChatApi};

const API_BASE: &str = "https://slack.com/api";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SlackClient {
    http: reqwest::Client,
    token: String,
}

#[derive(Deserialize)]
struct Envelope {
    ok: bool,
    error: Option<String>,
}

#[derive(Deserialize)]
struct AuthTest {
    ok: bool,
    error: Option<String>,
    user_id: Option<String>,
}

#[derive(Deserialize)]
struct RtmConnect {
    ok: bool,
    error: Option<String>,
    url: Option<String>,
}

#[derive(Deserialize)]
struct UsersList {
    ok: bool,
    error: Option<String>,
    members: Option<Vec<Member>>,
}

#[derive(Deserialize)]
struct Member {
    id: String,
    #[serde(default)]
    is_bot: bool,
}

impl SlackClient {
    pub fn new(token: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            http,
            token: token.to_string(),
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, method: &str) -> Result<T, ApiError> {
        Ok(self
            .http
            .get(format!("{API_BASE}/{method}"))
            .bearer_auth(&self.token)
            .send()
            .await?
            .json::<T>()
            .await?)
    }

    /// The bot's own user id, from `auth.test`.
    pub async fn self_id(&self) -> Result<String, ApiError> {
        let resp: AuthTest = self.get("auth.test").await?;
        if !resp.ok {
            return Err(platform_err(resp.error, "auth.test"));
        }
        resp.user_id
            .ok_or_else(|| ApiError::Platform("auth.test returned no user_id".into()))
    }

    /// Ids of every bot user in the workspace, from `users.list`.
    pub async fn bot_ids(&self) -> Result<HashSet<String>, ApiError> {
        let resp: UsersList = self.get("users.list").await?;
        if !resp.ok {
            return Err(platform_err(resp.error, "users.list"));
        }
        Ok(resp
            .members
            .unwrap_or_default()
            .into_iter()
            .filter(|m| m.is_bot)
            .map(|m| m.id)
            .collect())
    }

    /// Websocket URL for the real-time stream, from `rtm.connect`.
    pub async fn rtm_url(&self) -> Result<String, ApiError> {
        let resp: RtmConnect = self.get("rtm.connect").await?;
        if !resp.ok {
            return Err(platform_err(resp.error, "rtm.connect"));
        }
        resp.url
            .ok_or_else(|| ApiError::Platform("rtm.connect returned no url".into()))
    }
}

#[async_trait]
impl ChatApi for SlackClient {
    async fn post_message(
        &self,
        target: &str,
        text: &str,
        username: &str,
        icon_emoji: &str,
    ) -> Result<bool, ApiError> {
        let resp: Envelope = self
            .http
            .post(format!("{API_BASE}/chat.postMessage"))
            .bearer_auth(&self.token)
            .json(&serde_json::json!({
                "channel": target,
                "text": text,
                "username": username,
                "icon_emoji": icon_emoji,
            }))
            .send()
            .await?
            .json()
            .await?;
        if let Some(error) = resp.error {
            return Err(ApiError::Platform(error));
        }
        Ok(resp.ok)
    }
}

fn platform_err(error: Option<String>, method: &str) -> ApiError {
    ApiError::Platform(error.unwrap_or_else(|| format!("{method} failed")))
}
