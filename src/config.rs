//! Process configuration, read from the environment exactly once at startup
//! and passed by reference into the components that need it.

use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{0} must be an integer, got `{1}`")]
    InvalidInteger(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    /// Maximum increments one giver may award per calendar day.
    pub daily_cap: i64,
    pub scoreboard_url: String,
    pub bot_name: String,
    pub in_channel_notification: bool,
    pub dm_notification: bool,
    /// Raw token lists; `EmojiRegistry::from_lists` does the splitting.
    pub emoji_inc: String,
    pub emoji_dec: String,
    /// Postgres connection string. Absent selects the in-memory store.
    pub database_url: Option<String>,
}

impl Config {
    /// Read every setting. The daily cap has no usable default: a bot with an
    /// undefined quota must not start, so a missing or unparseable value is
    /// an error here and fatal in `main`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cap_raw = env::var("SLACK_DAILY_CAP").map_err(|_| ConfigError::Missing("SLACK_DAILY_CAP"))?;
        let daily_cap = cap_raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidInteger("SLACK_DAILY_CAP", cap_raw.clone()))?;

        Ok(Self {
            api_token: env::var("SLACK_API_TOKEN").map_err(|_| ConfigError::Missing("SLACK_API_TOKEN"))?,
            daily_cap,
            scoreboard_url: env::var("SCOREBOARD_URL").unwrap_or_default(),
            bot_name: env::var("BOT_NAME").unwrap_or_else(|_| "burritobot".to_string()),
            in_channel_notification: flag("IN_CHANNEL_NOTIFICATION_ENABLED"),
            dm_notification: flag("DM_NOTIFICATION_ENABLED"),
            emoji_inc: env::var("SLACK_EMOJI_INC").unwrap_or_default(),
            emoji_dec: env::var("SLACK_EMOJI_DEC").unwrap_or_default(),
            database_url: env::var("DATABASE_URL").ok(),
        })
    }
}

/// `"true"` enables; any other value, or absence, disables.
fn flag(name: &str) -> bool {
    env::var(name).map(|v| v == "true").unwrap_or(false)
}
