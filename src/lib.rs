//! BrewBuddy Telegram Bot
//!
//! A Telegram bot for small-business customer engagement. This library
//! provides modular components for user tracking, FAQ auto-replies,
//! admin-to-customer messaging, broadcasts and scheduled announcements.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BrewBuddyError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use storage::{ScheduleStore, UserStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
