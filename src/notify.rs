//! Outbound notifications: the bot persona, the channel notice, and the
//! per-recipient DMs. Everything here is fire-and-forget relative to the
//! ledger; a failed send is logged and changes nothing.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::Config;
use crate::slack::ChatApi;

/// Posts as the bot persona (display name + icon emoji). Shared by the
/// engine, which DMs quota shortfalls, and the dispatcher below.
pub struct Messenger {
    api: Arc<dyn ChatApi>,
    bot_name: String,
    icon: String,
}

impl Messenger {
    pub fn new(api: Arc<dyn ChatApi>, bot_name: String, icon: String) -> Self {
        Self { api, bot_name, icon }
    }

    /// Best-effort send to a user or channel id.
    pub async fn send_to_user(&self, target: &str, text: &str) {
        match self
            .api
            .post_message(target, text, &self.bot_name, &self.icon)
            .await
        {
            Ok(true) => tracing::info!(user = %target, "notified user"),
            Ok(false) => tracing::warn!(user = %target, "send rejected by the platform"),
            Err(err) => tracing::warn!(user = %target, error = %err, "send failed"),
        }
    }
}

/// The notification dispatcher: one channel-wide notice plus one DM per
/// unique recipient, each behind its own configuration flag.
pub struct Notifier {
    messenger: Arc<Messenger>,
    in_channel: bool,
    dm: bool,
    scoreboard_url: String,
    emoji: String,
}

impl Notifier {
    pub fn new(messenger: Arc<Messenger>, config: &Config, emoji: Option<&str>) -> Self {
        Self {
            messenger,
            in_channel: config.in_channel_notification,
            dm: config.dm_notification,
            scoreboard_url: config.scoreboard_url.clone(),
            emoji: emoji.unwrap_or_default().to_string(),
        }
    }

    /// Announce in the originating channel that somebody was recognised.
    pub async fn notify_channel(&self, channel: &str) {
        if !self.in_channel {
            return;
        }
        let text = format!(
            "Awesome! Someone just got some {} gratitude and love! Checkout the <{}|karma board>.",
            self.emoji, self.scoreboard_url
        );
        self.messenger.send_to_user(channel, &text).await;
    }

    /// DM every unique recipient, first appearance first. Duplicates within
    /// one outcome collapse to a single notification.
    pub async fn notify_recipients(&self, recipients: &[String]) {
        if !self.dm {
            return;
        }
        tracing::info!(count = recipients.len(), "notifying recipients");
        let mut seen = HashSet::new();
        for recipient in recipients {
            if !seen.insert(recipient.as_str()) {
                continue;
            }
            let text = format!(
                "Congrats! You've been recognized for doing something great! Checkout the scoreboard here: {}",
                self.scoreboard_url
            );
            self.messenger.send_to_user(recipient, &text).await;
        }
    }
}
