//! Services module
//!
//! This module contains business logic services

pub mod broadcast;
pub mod directory;
pub mod faq;
pub mod scheduler;

// Re-export commonly used services
pub use broadcast::{Broadcaster, DeliveryReport};
pub use directory::{DirectoryStats, UserDirectory};
pub use faq::FaqMatcher;
pub use scheduler::ScheduleService;

use teloxide::Bot;

use crate::config::Settings;
use crate::middleware::{AuthMiddleware, SpamGuard};
use crate::storage::{ScheduleStore, UserStore};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub directory: UserDirectory,
    pub faq: FaqMatcher,
    pub broadcaster: Broadcaster,
    pub scheduler: ScheduleService,
    pub auth: AuthMiddleware,
    pub guard: SpamGuard,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(bot: Bot, settings: &Settings) -> Result<Self> {
        let directory = UserDirectory::new(UserStore::new(&settings.storage.users_path))?;
        let faq = FaqMatcher::new(settings.faq.entries.clone());
        let broadcaster = Broadcaster::new(bot, directory.clone(), settings.bot.admin_ids.clone());
        let scheduler = ScheduleService::new(
            ScheduleStore::new(&settings.storage.schedules_path),
            broadcaster.clone(),
        )?;
        let auth = AuthMiddleware::new(&settings.bot.admin_ids);
        let guard = SpamGuard::new(&settings.spam);

        Ok(Self {
            directory,
            faq,
            broadcaster,
            scheduler,
            auth,
            guard,
        })
    }

    /// Flush persisted state before shutdown
    pub async fn flush(&self) -> Result<()> {
        self.directory.flush().await?;
        self.scheduler.flush().await?;
        Ok(())
    }
}
