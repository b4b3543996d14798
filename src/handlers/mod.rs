//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for text and media messages, including admin routing

pub mod callbacks;
pub mod commands;
pub mod messages;
pub mod routing;

// Re-export commonly used handler functions
pub use callbacks::handle_callback_query;
pub use commands::{handle_command, Command};
pub use messages::handle_message;
pub use routing::{parse_admin_action, AdminAction};
