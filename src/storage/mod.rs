//! Persistence layer
//!
//! Two JSON stores back the bot's durable state: the user directory and the
//! announcement schedule. Every mutation rewrites the whole file atomically;
//! there is no incremental or append format.

pub mod json;
pub mod users;
pub mod schedules;

pub use users::UserStore;
pub use schedules::ScheduleStore;
