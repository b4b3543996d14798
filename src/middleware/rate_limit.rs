//! Rate limiting middleware
//!
//! A sliding-window spam guard keyed by user id. Windows live only in
//! process memory; a restart resets every counter. Admins bypass the guard
//! at the call site, so this type knows nothing about the allow-list.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use crate::config::SpamConfig;

/// Sliding-window rate limiter
#[derive(Clone)]
pub struct SpamGuard {
    window: Duration,
    limit: usize,
    entries: Arc<Mutex<HashMap<i64, Vec<DateTime<Utc>>>>>,
}

impl SpamGuard {
    /// Create a new SpamGuard instance
    pub fn new(config: &SpamConfig) -> Self {
        Self {
            window: Duration::seconds(config.window_seconds as i64),
            limit: config.limit,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Record an inbound message and decide whether to process it.
    ///
    /// The window is mutated even when the message is rejected, so a
    /// flooding user keeps pushing their own cooldown out.
    pub fn allow(&self, user_id: i64, now: DateTime<Utc>) -> bool {
        let mut entries = self.entries.lock().unwrap();
        let window = entries.entry(user_id).or_default();

        window.retain(|&t| now.signed_duration_since(t) < self.window);
        window.push(now);

        if window.len() > self.limit {
            warn!(user_id = user_id, count = window.len(), "Rate limit exceeded");
            false
        } else {
            debug!(user_id = user_id, count = window.len(), "Rate limit check passed");
            true
        }
    }

    /// Number of users with a live window, for health reporting
    pub fn tracked_users(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}
