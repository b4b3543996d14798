//! Main menu keyboard and product showcase

use teloxide::{
    Bot,
    prelude::*,
    types::{
        ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, KeyboardButton,
        KeyboardMarkup, Message, ParseMode,
    },
};
use tracing::{debug, warn};
use url::Url;

use crate::config::ShowcaseConfig;
use crate::utils::errors::Result;

/// Label of the single main-menu button
pub const MENU_BUTTON_LABEL: &str = "Menu";

/// Default prompt shown with the main menu keyboard
pub const MENU_PROMPT: &str = "Choose an option from the menu:";

/// Reply keyboard with the single Menu button
pub fn main_menu_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![KeyboardButton::new(MENU_BUTTON_LABEL)]]).resize_keyboard()
}

/// Send the main menu keyboard with the given text
pub async fn send_main_menu(bot: Bot, chat_id: ChatId, text: &str) -> Result<()> {
    bot.send_message(chat_id, text)
        .reply_markup(main_menu_keyboard())
        .await?;
    Ok(())
}

/// Handle /menu command
pub async fn handle_menu(bot: Bot, msg: Message) -> Result<()> {
    send_main_menu(bot, msg.chat.id, MENU_PROMPT).await
}

/// Send the product showcase: one photo card per product, each with an
/// Instagram link button. A failed card is logged and skipped so the rest
/// of the showcase still goes out.
pub async fn send_showcase(bot: Bot, chat_id: ChatId, showcase: &ShowcaseConfig) -> Result<()> {
    let instagram = Url::parse(&showcase.instagram_url)?;
    let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        "📸 Instagram",
        instagram,
    )]]);

    for card in &showcase.cards {
        let photo = match Url::parse(&card.image_url) {
            Ok(url) => InputFile::url(url),
            Err(e) => {
                warn!(card = %card.title, error = %e, "Skipping card with invalid image URL");
                continue;
            }
        };

        let caption = format!(
            "<b>{}</b>\n{}",
            teloxide::utils::html::escape(&card.title),
            teloxide::utils::html::escape(&card.caption)
        );
        match bot
            .send_photo(chat_id, photo)
            .caption(caption)
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard.clone())
            .await
        {
            Ok(_) => debug!(card = %card.title, "Showcase card sent"),
            Err(e) => warn!(card = %card.title, error = %e, "Failed to send showcase card"),
        }
    }

    Ok(())
}
