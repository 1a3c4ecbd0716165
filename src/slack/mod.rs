//! The Slack surface: the Web API client, the real-time event stream, and
//! the outbound trait the rest of the bot consumes.

pub mod api;
pub mod rtm;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("websocket error: {0}")]
    Socket(#[from] tokio_tungstenite::tungstenite::Error),
    #[error("slack api error: {0}")]
    Platform(String),
}

/// Outbound message send. The engine and the dispatcher only ever talk to
/// Slack through this, so tests can swap in a recording implementation.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// Post one message as the given persona to a channel or user id.
    /// Returns the platform's ok flag.
    async fn post_message(
        &self,
        target: &str,
        text: &str,
        username: &str,
        icon_emoji: &str,
    ) -> Result<bool, ApiError>;
}
