//! Typed inbound events, decoded from the platform's real-time stream.
//!
//! Frames are classified into a tagged enum at this boundary; anything
//! missing a field its variant needs is rejected here, so the rest of the
//! pipeline never inspects optional fields.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("frame is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{kind}` event is missing field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

/// A plain user message posted to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    pub channel: String,
    pub user: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Message(MessageEvent),
    /// The bot was added to a channel. Logged only, never parsed.
    ChannelJoin { channel: String },
    /// A recognised frame the bot has no behavior for.
    Ignored { kind: String },
}

/// The wire shape: everything optional, classification happens below.
#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: Option<String>,
    subtype: Option<String>,
    channel: Option<String>,
    user: Option<String>,
    text: Option<String>,
}

impl ChatEvent {
    pub fn decode(frame: &str) -> Result<ChatEvent, EventError> {
        let raw: RawEvent = serde_json::from_str(frame)?;
        let kind = raw.kind.unwrap_or_default();
        match kind.as_str() {
            "message" => match raw.subtype.as_deref() {
                Some("channel_join") => Ok(ChatEvent::ChannelJoin {
                    channel: required(raw.channel, "channel_join", "channel")?,
                }),
                // Edits, thread broadcasts, bot_message and friends carry a
                // subtype; none of them are giving messages.
                Some(subtype) => Ok(ChatEvent::Ignored {
                    kind: format!("message.{subtype}"),
                }),
                None => Ok(ChatEvent::Message(MessageEvent {
                    channel: required(raw.channel, "message", "channel")?,
                    user: required(raw.user, "message", "user")?,
                    text: required(raw.text, "message", "text")?,
                })),
            },
            other => Ok(ChatEvent::Ignored {
                kind: other.to_string(),
            }),
        }
    }
}

fn required(
    value: Option<String>,
    kind: &'static str,
    field: &'static str,
) -> Result<String, EventError> {
    value.ok_or(EventError::MissingField { kind, field })
}
