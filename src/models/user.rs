//! User directory record model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// One end user known to the bot, keyed by the string form of their
/// Telegram id. Records are created on first contact and never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub messages: u64,
    #[serde(default)]
    pub forwarded_from: Vec<ForwardOrigin>,
}

/// Provenance of a message the user forwarded to the bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardOrigin {
    pub date: DateTime<Utc>,
    pub from: String,
}

/// Profile fields taken from an inbound Telegram update
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: Option<String>,
}

impl From<&teloxide::types::User> for UserProfile {
    fn from(user: &teloxide::types::User) -> Self {
        Self {
            id: user.id.0 as i64,
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

impl UserRecord {
    /// Chat id to use when sending to this user
    pub fn chat_id(&self) -> Option<i64> {
        self.id.parse().ok()
    }

    /// Readable name for admin-facing output
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}
