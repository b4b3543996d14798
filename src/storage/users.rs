//! User store
//!
//! Persists the directory as a JSON object keyed by the string user id.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::models::UserRecord;
use crate::utils::errors::Result;

use super::json;

/// File-backed store for the user directory
#[derive(Debug, Clone)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the directory, creating an empty store file when absent
    pub fn load(&self) -> Result<BTreeMap<String, UserRecord>> {
        json::load_or_init(&self.path)
    }

    /// Rewrite the whole store
    pub fn save(&self, users: &BTreeMap<String, UserRecord>) -> Result<()> {
        json::write_atomic(&self.path, users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForwardOrigin;
    use chrono::{TimeZone, Utc};

    fn sample_record(id: i64) -> UserRecord {
        let seen = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        UserRecord {
            id: id.to_string(),
            username: Some("espresso_fan".to_string()),
            first_name: "Ada".to_string(),
            last_name: Some("L".to_string()),
            first_seen: seen,
            last_seen: seen,
            messages: 3,
            forwarded_from: vec![ForwardOrigin {
                date: seen,
                from: "channel:roastery".to_string(),
            }],
        }
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().join("users.json"));

        let mut users = BTreeMap::new();
        users.insert("42".to_string(), sample_record(42));
        users.insert("7".to_string(), sample_record(7));
        store.save(&users).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, users);
    }

    #[test]
    fn test_load_missing_creates_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path().join("users.json"));

        let users = store.load().unwrap();
        assert!(users.is_empty());
        assert!(dir.path().join("users.json").exists());
    }
}
