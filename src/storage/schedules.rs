//! Schedule store
//!
//! Persists scheduled announcements as an ordered JSON array.

use std::path::PathBuf;

use crate::models::ScheduledAnnouncement;
use crate::utils::errors::Result;

use super::json;

/// File-backed store for the announcement schedule
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    path: PathBuf,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the schedule list, creating an empty store file when absent
    pub fn load(&self) -> Result<Vec<ScheduledAnnouncement>> {
        json::load_or_init(&self.path)
    }

    /// Rewrite the whole list
    pub fn save(&self, schedules: &[ScheduledAnnouncement]) -> Result<()> {
        json::write_atomic(&self.path, &schedules)
    }
}
