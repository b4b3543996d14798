//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod schedule;

// Re-export commonly used models
pub use user::{UserRecord, ForwardOrigin, UserProfile};
pub use schedule::{ScheduledAnnouncement, AnnouncementPayload};
