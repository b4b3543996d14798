//! Scheduled announcement model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// A deferred broadcast. `sent` flips false to true exactly once, when the
/// scheduler fires the item; fired items are kept as a historical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledAnnouncement {
    pub id: String,
    #[serde(flatten)]
    pub payload: AnnouncementPayload,
    pub due_at: DateTime<Utc>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub sent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
}

/// What a scheduled announcement delivers when it fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnnouncementPayload {
    Text { text: String },
    ForwardReference { source_chat: i64, source_message_id: i32 },
}

impl ScheduledAnnouncement {
    /// Whether the item should fire at the given clock reading
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        !self.sent && self.due_at <= now
    }

    /// Mark the item fired
    pub fn mark_fired(&mut self, now: DateTime<Utc>) {
        self.sent = true;
        self.sent_at = Some(now);
    }
}
