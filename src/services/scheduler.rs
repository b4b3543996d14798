//! Announcement scheduler
//!
//! Holds the persisted schedule list in memory and fires due items on a
//! fixed poll interval. Each item moves pending -> fired exactly once per
//! process lifetime; the list is persisted after every mutation so a
//! restart picks up where the previous run stopped.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info};

use crate::models::{AnnouncementPayload, ScheduledAnnouncement};
use crate::storage::ScheduleStore;
use crate::utils::errors::{BrewBuddyError, Result};
use crate::utils::helpers;

use super::broadcast::Broadcaster;

/// Accepted `!schedule` timestamp layout, interpreted as UTC
const DUE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Scheduled announcement service
#[derive(Clone)]
pub struct ScheduleService {
    store: ScheduleStore,
    schedules: Arc<Mutex<Vec<ScheduledAnnouncement>>>,
    broadcaster: Broadcaster,
}

impl ScheduleService {
    /// Load the schedule list from the store
    pub fn new(store: ScheduleStore, broadcaster: Broadcaster) -> Result<Self> {
        let schedules = store.load()?;
        info!(count = schedules.len(), "Loaded announcement schedule");
        Ok(Self {
            store,
            schedules: Arc::new(Mutex::new(schedules)),
            broadcaster,
        })
    }

    /// Append a new pending announcement and persist the list
    pub async fn create(
        &self,
        due_at: DateTime<Utc>,
        payload: AnnouncementPayload,
        created_by: i64,
    ) -> Result<ScheduledAnnouncement> {
        let item = ScheduledAnnouncement {
            id: helpers::generate_uuid(),
            payload,
            due_at,
            created_by,
            created_at: Utc::now(),
            sent: false,
            sent_at: None,
        };

        let mut schedules = self.schedules.lock().await;
        schedules.push(item.clone());
        self.store.save(&schedules)?;
        info!(id = %item.id, due_at = %item.due_at, "Announcement scheduled");
        Ok(item)
    }

    /// Parse a full `!schedule YYYY-MM-DD HH:MM text` command and create the
    /// announcement. Date and time are mandatory, the trailing text may be
    /// empty.
    pub async fn create_from_command(
        &self,
        text: &str,
        created_by: i64,
    ) -> Result<ScheduledAnnouncement> {
        let mut parts = text.splitn(4, ' ');
        let _command = parts.next();
        let (Some(date), Some(time)) = (parts.next(), parts.next()) else {
            return Err(BrewBuddyError::InvalidScheduleFormat(text.to_string()));
        };
        let due_at = NaiveDateTime::parse_from_str(&format!("{date} {time}"), DUE_FORMAT)
            .map_err(|_| BrewBuddyError::InvalidScheduleFormat(format!("{date} {time}")))?
            .and_utc();
        let body = parts.next().unwrap_or("").to_string();

        self.create(due_at, AnnouncementPayload::Text { text: body }, created_by)
            .await
    }

    /// Fire every due pending item in list order. Returns the number fired.
    pub async fn tick(&self, now: DateTime<Utc>) -> usize {
        let mut schedules = self.schedules.lock().await;
        let mut fired = 0;

        for index in 0..schedules.len() {
            if !schedules[index].is_due(now) {
                continue;
            }

            let id = schedules[index].id.clone();
            let report = match schedules[index].payload.clone() {
                AnnouncementPayload::Text { text } => {
                    self.broadcaster.broadcast_scheduled_text(&text).await
                }
                AnnouncementPayload::ForwardReference {
                    source_chat,
                    source_message_id,
                } => {
                    self.broadcaster
                        .broadcast_forward(source_chat, source_message_id)
                        .await
                }
            };

            schedules[index].mark_fired(now);
            fired += 1;
            info!(
                id = %id,
                delivered = report.delivered,
                failed = report.failed,
                "Scheduled announcement fired"
            );

            // In-memory state stays authoritative when the disk write fails
            if let Err(e) = self.store.save(&schedules) {
                error!(error = %e, "Failed to persist schedule state after firing");
            }
        }

        fired
    }

    /// Number of not-yet-fired items
    pub async fn pending_count(&self) -> usize {
        self.schedules.lock().await.iter().filter(|s| !s.sent).count()
    }

    /// Persist current schedule state, used on shutdown
    pub async fn flush(&self) -> Result<()> {
        let schedules = self.schedules.lock().await;
        self.store.save(&schedules)
    }

    /// Run the poll loop on its own task until the shutdown signal fires
    pub fn spawn_poller(
        &self,
        poll_interval: Duration,
        mut shutdown: broadcast::Receiver<()>,
    ) -> JoinHandle<()> {
        let service = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!(
                interval_seconds = poll_interval.as_secs(),
                "Schedule poller started"
            );

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let fired = service.tick(Utc::now()).await;
                        if fired > 0 {
                            debug!(fired = fired, "Schedule tick fired announcements");
                        }
                    }
                    _ = shutdown.recv() => {
                        info!("Schedule poller stopping");
                        break;
                    }
                }
            }
        })
    }
}
