//! Eligibility checks that run before any parsing.

use std::collections::HashSet;

use crate::emoji::EmojiRegistry;
use crate::event::MessageEvent;

/// A message is worth parsing when a human wrote it and it contains at least
/// one recognised token. Bot-authored messages are rejected outright so the
/// bot can never feed itself (or another bot) burritos.
pub fn is_eligible(
    msg: &MessageEvent,
    registry: &EmojiRegistry,
    known_bot_ids: &HashSet<String>,
) -> bool {
    if known_bot_ids.contains(&msg.user) {
        return false;
    }
    registry.has_any_token(&msg.text)
}

/// True when the message addresses the bot itself rather than a peer, e.g. to
/// ask for personal stats. Such messages must never reach the engine.
pub fn is_bot_mention(msg: &MessageEvent, self_id: &str) -> bool {
    !self_id.is_empty() && msg.text.contains(&format!("<@{self_id}>"))
}
