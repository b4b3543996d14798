//! Admin command handlers

use teloxide::{
    Bot,
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, Message},
};
use tracing::info;
use url::Url;

use crate::config::Settings;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Window used by the /users activity count
pub const ACTIVITY_WINDOW_DAYS: i64 = 30;

/// Handle the admin /users request: directory stats reply
pub async fn handle_users_stats(bot: Bot, msg: &Message, services: &ServiceFactory) -> Result<()> {
    let stats = services.directory.stats(ACTIVITY_WINDOW_DAYS).await;
    info!(
        total = stats.total,
        active = stats.active_in_window,
        "Admin requested user statistics"
    );

    let text = format!(
        "📊 User statistics:\nTotal: {}\nActive in the last {} days: {}",
        stats.total, ACTIVITY_WINDOW_DAYS, stats.active_in_window
    );
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Handle the admin /inline request: demo keyboard with a register
/// callback button and an Instagram link button
pub async fn handle_inline_demo(bot: Bot, msg: &Message, settings: &Settings) -> Result<()> {
    let instagram = Url::parse(&settings.showcase.instagram_url)?;
    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "📝 Register",
            "action:register",
        )],
        vec![InlineKeyboardButton::url("📸 Instagram", instagram)],
    ]);

    bot.send_message(msg.chat.id, "Use the inline buttons below:")
        .reply_markup(keyboard)
        .await?;
    Ok(())
}
