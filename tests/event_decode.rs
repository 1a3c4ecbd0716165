use burrito_bot::event::{ChatEvent, MessageEvent};

#[test]
fn plain_message_decodes() {
    let frame = r#"{"type":"message","channel":"C1","user":"U1","text":"<@U2> :taco:"}"#;
    assert_eq!(
        ChatEvent::decode(frame).expect("well-formed frame"),
        ChatEvent::Message(MessageEvent {
            channel: "C1".to_string(),
            user: "U1".to_string(),
            text: "<@U2> :taco:".to_string(),
        })
    );
}

#[test]
fn channel_join_is_its_own_variant() {
    let frame = r#"{"type":"message","subtype":"channel_join","channel":"C1","user":"U1","text":"<@U1> has joined"}"#;
    assert_eq!(
        ChatEvent::decode(frame).expect("well-formed frame"),
        ChatEvent::ChannelJoin {
            channel: "C1".to_string()
        }
    );
}

#[test]
fn other_message_subtypes_are_ignored() {
    let frame = r#"{"type":"message","subtype":"bot_message","channel":"C1","text":"beep"}"#;
    assert_eq!(
        ChatEvent::decode(frame).expect("well-formed frame"),
        ChatEvent::Ignored {
            kind: "message.bot_message".to_string()
        }
    );
}

#[test]
fn non_message_events_are_ignored() {
    let frame = r#"{"type":"user_typing","channel":"C1","user":"U1"}"#;
    assert_eq!(
        ChatEvent::decode(frame).expect("well-formed frame"),
        ChatEvent::Ignored {
            kind: "user_typing".to_string()
        }
    );
}

#[test]
fn message_missing_text_is_rejected() {
    let frame = r#"{"type":"message","channel":"C1","user":"U1"}"#;
    assert!(ChatEvent::decode(frame).is_err());
}

#[test]
fn message_missing_user_is_rejected() {
    let frame = r#"{"type":"message","channel":"C1","text":"hi"}"#;
    assert!(ChatEvent::decode(frame).is_err());
}

#[test]
fn garbage_is_rejected() {
    assert!(ChatEvent::decode("not json at all").is_err());
}

#[test]
fn untyped_frame_is_ignored_not_fatal() {
    // Slack's confirmation frames (`{"ok":true,...}`) carry no type.
    assert_eq!(
        ChatEvent::decode(r#"{"ok":true,"reply_to":1}"#).expect("well-formed frame"),
        ChatEvent::Ignored {
            kind: String::new()
        }
    );
}
