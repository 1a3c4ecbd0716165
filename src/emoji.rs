//! The emoji registry: which message tokens give a burrito and which take one away.
//!
//! Built once from configuration at startup and read-only afterwards. Both
//! configured lists are split on `,` with surrounding whitespace trimmed and
//! empty entries dropped, so `":taco:, :star:"` and `":taco:,:star:"` load
//! identically. An unset list simply leaves that effect with no tokens, which
//! means those give/revoke attempts never parse.

use crate::model::Effect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiDescriptor {
    pub effect: Effect,
    pub token: String,
}

#[derive(Debug, Clone, Default)]
pub struct EmojiRegistry {
    descriptors: Vec<EmojiDescriptor>,
}

impl EmojiRegistry {
    /// Build the registry from the increment and decrement token lists.
    pub fn from_lists(inc: &str, dec: &str) -> Self {
        let mut descriptors = Vec::new();
        for token in split_tokens(inc) {
            descriptors.push(EmojiDescriptor {
                effect: Effect::Increment,
                token,
            });
        }
        for token in split_tokens(dec) {
            descriptors.push(EmojiDescriptor {
                effect: Effect::Decrement,
                token,
            });
        }
        Self { descriptors }
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptors(&self) -> &[EmojiDescriptor] {
        &self.descriptors
    }

    /// Does the text contain at least one recognised token? Exact substring
    /// match per token, same as the parser uses.
    pub fn has_any_token(&self, text: &str) -> bool {
        self.descriptors.iter().any(|d| text.contains(&d.token))
    }

    /// The first increment token. Doubles as the bot's icon and as the emoji
    /// shown in the channel notice; `None` when no increment emoji is
    /// configured.
    pub fn primary_token(&self) -> Option<&str> {
        self.descriptors
            .iter()
            .find(|d| d.effect == Effect::Increment)
            .map(|d| d.token.as_str())
    }
}

fn split_tokens(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}
