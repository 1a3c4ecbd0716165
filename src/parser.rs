//! Turns an eligible message into an ordered list of give/revoke updates.

use std::sync::OnceLock;

use regex::Regex;

use crate::emoji::EmojiRegistry;
use crate::event::MessageEvent;
use crate::model::{Effect, ParseResult, Update};

/// Slack user mentions: `<@U12345>` or the display form `<@U12345|name>`.
fn mention_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<@([A-Z0-9]+)(?:\|[^>]*)?>").expect("mention pattern compiles"))
}

/// Scan the text for every occurrence of a recognised token and pair each one
/// with the nearest user mention, measured in characters (the preceding
/// mention wins a tie). Updates come out in the order the tokens appear.
/// Self-targeted updates are dropped. `None` when no valid pair exists.
pub fn parse(msg: &MessageEvent, registry: &EmojiRegistry) -> Option<ParseResult> {
    let giver = msg.user.clone();

    // (position, recipient) of every mention in the text.
    let mentions: Vec<(usize, String)> = mention_re()
        .captures_iter(&msg.text)
        .filter_map(|caps| caps.get(1).map(|g| (g.start(), g.as_str().to_string())))
        .collect();

    // (position, effect) of every token occurrence, sorted into text order.
    let mut occurrences: Vec<(usize, Effect)> = Vec::new();
    for descriptor in registry.descriptors() {
        let mut from = 0;
        while let Some(found) = msg.text[from..].find(&descriptor.token) {
            let pos = from + found;
            occurrences.push((pos, descriptor.effect));
            from = pos + descriptor.token.len();
        }
    }
    occurrences.sort_by_key(|&(pos, _)| pos);

    let mut updates = Vec::new();
    for (pos, effect) in occurrences {
        let nearest = mentions
            .iter()
            .min_by_key(|(mention_pos, _)| (pos.abs_diff(*mention_pos), *mention_pos > pos));
        let Some((_, recipient)) = nearest else {
            continue;
        };
        if *recipient == giver {
            // No awarding burritos to yourself.
            continue;
        }
        updates.push(Update {
            effect,
            recipient: recipient.clone(),
        });
    }

    if updates.is_empty() {
        None
    } else {
        Some(ParseResult { giver, updates })
    }
}
