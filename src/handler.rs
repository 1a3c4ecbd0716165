//! Per-event orchestration: gate, parse, distribute, notify.

use crate::emoji::EmojiRegistry;
use crate::engine::Distributor;
use crate::event::{ChatEvent, MessageEvent};
use crate::model::Workspace;
use crate::notify::Notifier;
use crate::{parser, validator};

pub struct Handler {
    registry: EmojiRegistry,
    workspace: Workspace,
    distributor: Distributor,
    notifier: Notifier,
}

impl Handler {
    pub fn new(
        registry: EmojiRegistry,
        workspace: Workspace,
        distributor: Distributor,
        notifier: Notifier,
    ) -> Self {
        Self {
            registry,
            workspace,
            distributor,
            notifier,
        }
    }

    pub async fn handle_event(&self, event: ChatEvent) {
        match event {
            ChatEvent::ChannelJoin { channel } => {
                tracing::info!(%channel, "joined channel");
            }
            ChatEvent::Ignored { kind } => {
                tracing::debug!(%kind, "ignoring event");
            }
            ChatEvent::Message(msg) => self.handle_message(msg).await,
        }
    }

    async fn handle_message(&self, msg: MessageEvent) {
        if !validator::is_eligible(&msg, &self.registry, &self.workspace.bot_ids) {
            return;
        }
        if validator::is_bot_mention(&msg, &self.workspace.self_id) {
            // A direct address of the bot is a stats query, not a give.
            // Nothing answers it yet; it must never reach the engine.
            tracing::debug!(user = %msg.user, "bot addressed directly");
            return;
        }
        let Some(parsed) = parser::parse(&msg, &self.registry) else {
            return;
        };
        if parsed.updates.is_empty() {
            return;
        }

        match self.distributor.distribute(&parsed.giver, &parsed.updates).await {
            Ok(outcome) if !outcome.recipients.is_empty() => {
                self.notifier.notify_channel(&msg.channel).await;
                self.notifier.notify_recipients(&outcome.recipients).await;
            }
            Ok(_) => {
                // Rejected batch or decrements only: nobody to congratulate.
            }
            Err(err) => {
                tracing::error!(giver = %parsed.giver, error = %err, "batch aborted by store error");
            }
        }
    }
}
