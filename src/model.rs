//! Shared data structures used throughout the application.

use std::collections::HashSet;

/// What a recognised emoji does to the recipient's tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Increment,
    Decrement,
}

/// One give or revoke parsed out of a message, in text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub effect: Effect,
    pub recipient: String,
}

/// A message understood as a giving message: who wrote it and what they asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub giver: String,
    pub updates: Vec<Update>,
}

/// The recipients who actually received an increment in one engine run.
/// Duplicates are preserved here; the notification dispatcher deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionOutcome {
    pub recipients: Vec<String>,
}

/// Workspace identities resolved from the platform at startup.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    /// The bot's own user id.
    pub self_id: String,
    /// Every bot user in the workspace, this bot included.
    pub bot_ids: HashSet<String>,
}
