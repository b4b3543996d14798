//! Announcement dispatch service
//!
//! Delivers a message to every user in the directory, tolerating
//! per-recipient failures: a blocked bot or deactivated account is logged
//! and skipped, never aborting the batch. The same service carries the
//! admin relay sends used by the fallback flow.

use std::time::Duration;

use teloxide::{
    Bot,
    payloads::SendMessageSetters,
    prelude::Request,
    requests::Requester,
    types::{ChatId, MessageId, ParseMode},
};
use tracing::{debug, info, warn};

use super::directory::UserDirectory;

/// Delay between consecutive sends to stay inside flood limits
const SEND_PACING: Duration = Duration::from_millis(50);

/// Outcome of one broadcast pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub attempted: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// Broadcast and relay sender
#[derive(Clone)]
pub struct Broadcaster {
    bot: Bot,
    directory: UserDirectory,
    admin_ids: Vec<i64>,
}

impl Broadcaster {
    /// Create a new Broadcaster instance
    pub fn new(bot: Bot, directory: UserDirectory, admin_ids: Vec<i64>) -> Self {
        Self {
            bot,
            directory,
            admin_ids,
        }
    }

    /// Send an announcement to every known user
    pub async fn broadcast_text(&self, text: &str) -> DeliveryReport {
        self.send_to_all("📢 <b>Announcement:</b>", text).await
    }

    /// Send a scheduled announcement to every known user. Same delivery
    /// semantics as [`broadcast_text`], distinct heading.
    ///
    /// [`broadcast_text`]: Broadcaster::broadcast_text
    pub async fn broadcast_scheduled_text(&self, text: &str) -> DeliveryReport {
        self.send_to_all("📢 <b>Scheduled announcement:</b>", text)
            .await
    }

    async fn send_to_all(&self, heading: &str, text: &str) -> DeliveryReport {
        let recipients = self.directory.all().await;
        let body = format!("{heading}\n{}", teloxide::utils::html::escape(text));
        let mut report = DeliveryReport {
            attempted: recipients.len(),
            ..Default::default()
        };

        info!(count = recipients.len(), "Broadcasting text announcement");

        for user in recipients {
            let Some(chat_id) = user.chat_id() else {
                warn!(user_id = %user.id, "Skipping recipient with malformed id");
                report.failed += 1;
                continue;
            };

            match self
                .bot
                .send_message(ChatId(chat_id), body.clone())
                .parse_mode(ParseMode::Html)
                .send()
                .await
            {
                Ok(_) => {
                    debug!(user_id = %user.id, "Announcement delivered");
                    report.delivered += 1;
                }
                Err(e) => {
                    warn!(user_id = %user.id, error = %e, "Failed to deliver announcement");
                    report.failed += 1;
                }
            }

            tokio::time::sleep(SEND_PACING).await;
        }

        info!(
            attempted = report.attempted,
            delivered = report.delivered,
            failed = report.failed,
            "Text broadcast completed"
        );
        report
    }

    /// Re-deliver a referenced message to every known user by forwarding,
    /// without re-uploading its payload
    pub async fn broadcast_forward(
        &self,
        source_chat: i64,
        source_message_id: i32,
    ) -> DeliveryReport {
        let recipients = self.directory.all().await;
        let mut report = DeliveryReport {
            attempted: recipients.len(),
            ..Default::default()
        };

        info!(
            count = recipients.len(),
            source_chat = source_chat,
            source_message_id = source_message_id,
            "Broadcasting forwarded message"
        );

        for user in recipients {
            let Some(chat_id) = user.chat_id() else {
                warn!(user_id = %user.id, "Skipping recipient with malformed id");
                report.failed += 1;
                continue;
            };

            match self
                .bot
                .forward_message(
                    ChatId(chat_id),
                    ChatId(source_chat),
                    MessageId(source_message_id),
                )
                .send()
                .await
            {
                Ok(_) => {
                    debug!(user_id = %user.id, "Forward delivered");
                    report.delivered += 1;
                }
                Err(e) => {
                    warn!(user_id = %user.id, error = %e, "Failed to deliver forward");
                    report.failed += 1;
                }
            }

            tokio::time::sleep(SEND_PACING).await;
        }

        info!(
            attempted = report.attempted,
            delivered = report.delivered,
            failed = report.failed,
            "Forward broadcast completed"
        );
        report
    }

    /// Send a text to every configured admin; failures are logged and
    /// skipped. Returns the number of admins actually reached.
    pub async fn notify_admins(&self, text: &str) -> usize {
        if self.admin_ids.is_empty() {
            warn!("No admin IDs configured for admin notifications");
            return 0;
        }

        let mut delivered = 0;
        for &admin_id in &self.admin_ids {
            match self.bot.send_message(ChatId(admin_id), text).send().await {
                Ok(_) => {
                    debug!(admin_id = admin_id, "Admin notification sent");
                    delivered += 1;
                }
                Err(e) => {
                    warn!(admin_id = admin_id, error = %e, "Failed to notify admin");
                }
            }
        }

        delivered
    }

    /// Forward a message to every configured admin
    pub async fn forward_to_admins(&self, from_chat: ChatId, message_id: MessageId) -> usize {
        let mut delivered = 0;
        for &admin_id in &self.admin_ids {
            match self
                .bot
                .forward_message(ChatId(admin_id), from_chat, message_id)
                .send()
                .await
            {
                Ok(_) => delivered += 1,
                Err(e) => {
                    warn!(admin_id = admin_id, error = %e, "Failed to forward to admin");
                }
            }
        }

        delivered
    }
}
