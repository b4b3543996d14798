//! User directory service
//!
//! Owns the persistent map of everyone who has ever messaged the bot.
//! Every mutation rewrites the backing store before returning, so a reader
//! never observes state the file does not (eventually) have; a failed write
//! is logged and the in-memory map stays authoritative for the running
//! process.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::models::{ForwardOrigin, UserProfile, UserRecord};
use crate::storage::UserStore;
use crate::utils::errors::Result;

/// Directory totals for the admin stats reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub active_in_window: usize,
}

/// User directory backed by the JSON user store
#[derive(Clone)]
pub struct UserDirectory {
    store: UserStore,
    users: Arc<Mutex<BTreeMap<String, UserRecord>>>,
}

impl UserDirectory {
    /// Load the directory from the store, creating it when absent
    pub fn new(store: UserStore) -> Result<Self> {
        let users = store.load()?;
        info!(count = users.len(), "User directory loaded");

        Ok(Self {
            store,
            users: Arc::new(Mutex::new(users)),
        })
    }

    /// Create or refresh the record for an inbound event sender.
    ///
    /// `first_seen` and the name fields are fixed at creation; the username
    /// is refreshed when the sender still has one, `last_seen` moves to
    /// `now` and `messages` grows by exactly one.
    pub async fn upsert(&self, profile: &UserProfile, now: DateTime<Utc>) -> UserRecord {
        let mut users = self.users.lock().await;
        let key = profile.id.to_string();

        let record = users.entry(key.clone()).or_insert_with(|| {
            info!(user_id = profile.id, "New user registered");
            UserRecord {
                id: key,
                username: None,
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
                first_seen: now,
                last_seen: now,
                messages: 0,
                forwarded_from: Vec::new(),
            }
        });

        if profile.username.is_some() {
            record.username = profile.username.clone();
        }
        record.last_seen = now;
        record.messages += 1;

        let snapshot = record.clone();
        self.persist(&users);
        snapshot
    }

    /// Append a forward-provenance entry. No-op when the identifier is
    /// unknown; callers upsert the sender first.
    pub async fn record_forward(&self, user_id: i64, provenance: ForwardOrigin) {
        let mut users = self.users.lock().await;

        match users.get_mut(&user_id.to_string()) {
            Some(record) => {
                debug!(user_id = user_id, from = %provenance.from, "Forward provenance recorded");
                record.forwarded_from.push(provenance);
                self.persist(&users);
            }
            None => {
                debug!(user_id = user_id, "Forward provenance for unknown user ignored");
            }
        }
    }

    /// Stable snapshot of every record
    pub async fn all(&self) -> Vec<UserRecord> {
        self.users.lock().await.values().cloned().collect()
    }

    /// Look up one record by id
    pub async fn get(&self, user_id: i64) -> Option<UserRecord> {
        self.users.lock().await.get(&user_id.to_string()).cloned()
    }

    /// Case-insensitive username lookup, first match in key order
    pub async fn find_by_username(&self, username: &str) -> Option<UserRecord> {
        let needle = username.to_lowercase();
        self.users
            .lock()
            .await
            .values()
            .find(|record| {
                record
                    .username
                    .as_deref()
                    .is_some_and(|u| u.to_lowercase() == needle)
            })
            .cloned()
    }

    /// Directory totals; `active_in_window` counts records whose `last_seen`
    /// falls within the trailing window from now
    pub async fn stats(&self, activity_window_days: i64) -> DirectoryStats {
        let users = self.users.lock().await;
        let cutoff = Utc::now() - Duration::days(activity_window_days);

        DirectoryStats {
            total: users.len(),
            active_in_window: users.values().filter(|u| u.last_seen >= cutoff).count(),
        }
    }

    /// Number of known users
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    /// Rewrite the store from current in-memory state
    pub async fn flush(&self) -> Result<()> {
        let users = self.users.lock().await;
        self.store.save(&users)
    }

    fn persist(&self, users: &BTreeMap<String, UserRecord>) {
        if let Err(e) = self.store.save(users) {
            error!(error = %e, "Failed to persist user store, in-memory state kept");
        }
    }
}
