use burrito_bot::emoji::EmojiRegistry;
use burrito_bot::model::Effect;

#[test]
fn round_trip_with_spaced_list() {
    let registry = EmojiRegistry::from_lists(":taco:, :star:", ":poop:");
    let tokens: Vec<_> = registry
        .descriptors()
        .iter()
        .map(|d| (d.effect, d.token.as_str()))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (Effect::Increment, ":taco:"),
            (Effect::Increment, ":star:"),
            (Effect::Decrement, ":poop:"),
        ]
    );
}

#[test]
fn both_delimiter_styles_load_identically() {
    let spaced = EmojiRegistry::from_lists(":taco:, :star:", "");
    let tight = EmojiRegistry::from_lists(":taco:,:star:", "");
    assert_eq!(spaced.descriptors(), tight.descriptors());
}

#[test]
fn empty_entries_are_dropped() {
    let registry = EmojiRegistry::from_lists(" :taco: ,, ", "");
    assert_eq!(registry.descriptors().len(), 1);
    assert_eq!(registry.descriptors()[0].token, ":taco:");
}

#[test]
fn absent_lists_yield_empty_registry() {
    let registry = EmojiRegistry::from_lists("", "");
    assert!(registry.is_empty());
    assert_eq!(registry.primary_token(), None);
}

#[test]
fn primary_token_is_first_increment() {
    let registry = EmojiRegistry::from_lists(":taco:, :star:", ":poop:");
    assert_eq!(registry.primary_token(), Some(":taco:"));

    // Decrement-only configuration has no primary.
    let dec_only = EmojiRegistry::from_lists("", ":poop:");
    assert_eq!(dec_only.primary_token(), None);
}

#[test]
fn has_any_token_is_exact_substring_match() {
    let registry = EmojiRegistry::from_lists(":taco:", "");
    assert!(registry.has_any_token("here, have a :taco: friend"));
    assert!(!registry.has_any_token("no taco for you"));
}
