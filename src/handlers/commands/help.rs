//! Help and contact command handlers

use teloxide::{Bot, types::Message, prelude::*};

use crate::config::ContactConfig;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

/// Handle /help command; admins get the extended variant
pub async fn handle_help(bot: Bot, msg: Message, services: &ServiceFactory) -> Result<()> {
    let is_admin = msg
        .from
        .as_ref()
        .is_some_and(|u| services.auth.is_admin(u.id.0 as i64));

    bot.send_message(msg.chat.id, help_text(is_admin)).await?;
    Ok(())
}

fn help_text(is_admin: bool) -> String {
    let mut text = String::from(
        "🤖 BrewBuddy Help\n\n\
         /help - show this help message\n\
         /start - start the bot and show the main menu\n\
         /menu - show the main menu keyboard\n\
         /contact - contact details\n",
    );

    if is_admin {
        text.push_str(
            "\nAdmin commands:\n\
             /users - user statistics\n\
             /inline - inline keyboard demo\n\
             Reply to a user with @@ID or @username followed by your text.\n\
             Broadcast by sending media (photo/video/document/audio), \
             or by wrapping text in parentheses: (your announcement).\n\
             !schedule YYYY-MM-DD HH:MM text - schedule an announcement, times are UTC\n",
        );
    }

    text
}

/// Handle /contact command
pub async fn handle_contact(bot: Bot, msg: Message, contact: &ContactConfig) -> Result<()> {
    let text = format!(
        "☎️ Contact us\nPhone: {}\nAddress: {}\nHours: {}\n\n\
         Or just send your question here and an admin will reply.",
        contact.phone, contact.address, contact.hours
    );
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}
