//! Command handlers module
//!
//! This module contains handlers for the public bot commands

pub mod admin;
pub mod help;
pub mod menu;
pub mod start;

use teloxide::{Bot, types::Message, utils::command::BotCommands};

use crate::config::Settings;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

use super::messages;

/// Public bot commands
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "BrewBuddy commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the main menu")]
    Start,
    #[command(description = "Show the main menu keyboard")]
    Menu,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Show contact details")]
    Contact,
}

/// Main command dispatcher. Commands go through the same tracking and
/// spam gate as free-form messages.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: ServiceFactory,
    settings: Settings,
) -> Result<()> {
    let Some(_profile) = messages::preprocess(&bot, &msg, &services).await? else {
        return Ok(());
    };

    match cmd {
        Command::Start => start::handle_start(bot, msg).await,
        Command::Menu => menu::handle_menu(bot, msg).await,
        Command::Help => help::handle_help(bot, msg, &services).await,
        Command::Contact => help::handle_contact(bot, msg, &settings.contact).await,
    }
}
