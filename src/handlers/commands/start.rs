//! Start command handler

use teloxide::{Bot, types::Message};
use tracing::info;

use crate::utils::errors::Result;

use super::menu;

const GREETING: &str =
    "🤖 Welcome to BrewBuddy! Tap the Menu button below to browse our products.";

/// Handle /start command: greet and show the main menu keyboard
pub async fn handle_start(bot: Bot, msg: Message) -> Result<()> {
    if let Some(user) = msg.from.as_ref() {
        info!(user_id = user.id.0 as i64, "User started the bot");
    }
    menu::send_main_menu(bot, msg.chat.id, GREETING).await
}
