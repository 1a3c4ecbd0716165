use std::collections::HashSet;

use burrito_bot::emoji::EmojiRegistry;
use burrito_bot::event::MessageEvent;
use burrito_bot::validator::{is_bot_mention, is_eligible};

fn registry() -> EmojiRegistry {
    EmojiRegistry::from_lists(":taco:", ":poop:")
}

fn msg(user: &str, text: &str) -> MessageEvent {
    MessageEvent {
        channel: "C1".to_string(),
        user: user.to_string(),
        text: text.to_string(),
    }
}

fn bots(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn human_message_with_token_is_eligible() {
    assert!(is_eligible(
        &msg("U1", "<@U2> :taco:"),
        &registry(),
        &bots(&["B1"])
    ));
}

#[test]
fn bot_authored_message_is_rejected() {
    assert!(!is_eligible(
        &msg("B1", "<@U2> :taco:"),
        &registry(),
        &bots(&["B1"])
    ));
}

#[test]
fn message_without_tokens_is_rejected() {
    assert!(!is_eligible(
        &msg("U1", "great work <@U2>!"),
        &registry(),
        &bots(&["B1"])
    ));
}

#[test]
fn decrement_token_alone_is_eligible() {
    assert!(is_eligible(
        &msg("U1", "<@U2> :poop:"),
        &registry(),
        &bots(&[])
    ));
}

#[test]
fn bot_mention_detected() {
    assert!(is_bot_mention(&msg("U1", "<@BSELF> stats please"), "BSELF"));
    assert!(!is_bot_mention(&msg("U1", "<@U2> :taco:"), "BSELF"));
}

#[test]
fn empty_self_id_never_matches() {
    // An unresolved identity must not make every mention look like the bot.
    assert!(!is_bot_mention(&msg("U1", "<@U2> hello"), ""));
}
