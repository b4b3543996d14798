//! Admin message routing
//!
//! Maps free-form admin text onto the reply and broadcast actions. Parsing
//! is a separate step from execution so the precedence rules stay testable
//! without a live bot.

use regex::Regex;
use teloxide::{
    Bot,
    prelude::*,
    types::{ChatId, Message, ParseMode},
};
use tracing::warn;

use crate::config::Settings;
use crate::services::{DeliveryReport, ServiceFactory};
use crate::utils::errors::{BrewBuddyError, Result};
use crate::utils::helpers;
use crate::utils::logging::log_admin_action;

use super::commands::admin;

/// Reply body used when an addressing token is sent with no text
const EMPTY_REPLY_PLACEHOLDER: &str = "(Message from admin)";

/// Parsed admin intent, listed in precedence order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    UserStats,
    Schedule { command: String },
    InlineDemo,
    ReplyById { target: i64, body: String },
    ReplyByUsername { username: String, body: String },
    BroadcastMedia,
    BroadcastText { body: String },
    NoOp,
}

/// True when the message carries a broadcastable attachment
pub fn has_media(msg: &Message) -> bool {
    msg.photo().is_some()
        || msg.video().is_some()
        || msg.document().is_some()
        || msg.audio().is_some()
}

/// Map admin text to an action. The first matching rule wins; unmatched
/// text is an explicit no-op.
pub fn parse_admin_action(text: &str, has_media: bool) -> Result<AdminAction> {
    if text == "/users" {
        return Ok(AdminAction::UserStats);
    }
    if text.starts_with("!schedule ") {
        return Ok(AdminAction::Schedule {
            command: text.to_string(),
        });
    }
    if text == "/inline" {
        return Ok(AdminAction::InlineDemo);
    }

    let id_pattern = Regex::new(r"@@(\d{5,})\b")
        .map_err(|_| BrewBuddyError::Config("Invalid id reply pattern".to_string()))?;
    if let Some(captures) = id_pattern.captures(text) {
        if let Ok(target) = captures[1].parse::<i64>() {
            let body = text.replacen(&captures[0], "", 1).trim().to_string();
            return Ok(AdminAction::ReplyById { target, body });
        }
    }

    let username_pattern = Regex::new(r"@([A-Za-z0-9_]+)\b")
        .map_err(|_| BrewBuddyError::Config("Invalid username reply pattern".to_string()))?;
    if let Some(captures) = username_pattern.captures(text) {
        let username = captures[1].to_string();
        let body = text.replacen(&captures[0], "", 1).trim().to_string();
        return Ok(AdminAction::ReplyByUsername { username, body });
    }

    if has_media {
        return Ok(AdminAction::BroadcastMedia);
    }

    let broadcast_pattern = Regex::new(r"(?s)\((.*?)\)")
        .map_err(|_| BrewBuddyError::Config("Invalid broadcast pattern".to_string()))?;
    if let Some(captures) = broadcast_pattern.captures(text) {
        let body = captures[1].trim().to_string();
        if !body.is_empty() {
            return Ok(AdminAction::BroadcastText { body });
        }
    }

    Ok(AdminAction::NoOp)
}

/// Execute a parsed admin action, reporting the outcome back to the admin
pub async fn execute_admin_action(
    bot: Bot,
    msg: &Message,
    action: AdminAction,
    services: &ServiceFactory,
    settings: &Settings,
) -> Result<()> {
    let admin_chat = msg.chat.id;
    let admin_id = admin_chat.0;

    match action {
        AdminAction::UserStats => {
            log_admin_action(admin_id, "users_stats", None, None);
            admin::handle_users_stats(bot, msg, services).await
        }
        AdminAction::Schedule { command } => {
            match services.scheduler.create_from_command(&command, admin_id).await {
                Ok(item) => {
                    log_admin_action(admin_id, "schedule_created", Some(&item.id), None);
                    let text = format!(
                        "📆 Announcement scheduled for {} (ID: {})",
                        helpers::format_timestamp(item.due_at),
                        item.id
                    );
                    bot.send_message(admin_chat, text).await?;
                    Ok(())
                }
                Err(BrewBuddyError::InvalidScheduleFormat(_)) => {
                    bot.send_message(admin_chat, "❗ Format: !schedule YYYY-MM-DD HH:MM text")
                        .await?;
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        AdminAction::InlineDemo => {
            log_admin_action(admin_id, "inline_demo", None, None);
            admin::handle_inline_demo(bot, msg, settings).await
        }
        AdminAction::ReplyById { target, body } => {
            log_admin_action(admin_id, "reply_by_id", Some(&target.to_string()), None);
            match deliver_reply(&bot, msg, ChatId(target), &body).await {
                Ok(()) => {
                    bot.send_message(admin_chat, format!("📤 Message sent to ID {target}."))
                        .await?;
                }
                Err(e) => {
                    warn!(target = target, error = %e, "Admin reply delivery failed");
                    bot.send_message(
                        admin_chat,
                        "❗ Delivery failed: user not found or has blocked the bot.",
                    )
                    .await?;
                }
            }
            Ok(())
        }
        AdminAction::ReplyByUsername { username, body } => {
            // A missing username aborts here; it never becomes a broadcast
            let Some(record) = services.directory.find_by_username(&username).await else {
                bot.send_message(admin_chat, format!("⚠️ Username @{username} not found."))
                    .await?;
                return Ok(());
            };
            let Some(target) = record.chat_id() else {
                warn!(username = %username, record_id = %record.id, "Stored user id is not numeric");
                bot.send_message(admin_chat, format!("⚠️ Username @{username} not found."))
                    .await?;
                return Ok(());
            };

            log_admin_action(admin_id, "reply_by_username", Some(&username), None);
            match deliver_reply(&bot, msg, ChatId(target), &body).await {
                Ok(()) => {
                    bot.send_message(admin_chat, format!("📬 Message sent to @{username}."))
                        .await?;
                }
                Err(e) => {
                    warn!(username = %username, error = %e, "Admin reply delivery failed");
                    bot.send_message(admin_chat, format!("❗ Delivery failed: {e}"))
                        .await?;
                }
            }
            Ok(())
        }
        AdminAction::BroadcastMedia => {
            log_admin_action(admin_id, "broadcast_media", None, None);
            let report = services
                .broadcaster
                .broadcast_forward(admin_chat.0, msg.id.0)
                .await;
            send_broadcast_confirmation(&bot, admin_chat, report).await
        }
        AdminAction::BroadcastText { body } => {
            log_admin_action(
                admin_id,
                "broadcast_text",
                None,
                Some(&helpers::truncate_text(&body, 64)),
            );
            let report = services.broadcaster.broadcast_text(&body).await;
            send_broadcast_confirmation(&bot, admin_chat, report).await
        }
        AdminAction::NoOp => Ok(()),
    }
}

/// Send the admin's reply to one target, forwarding when the admin's own
/// message carried media
async fn deliver_reply(bot: &Bot, msg: &Message, target: ChatId, body: &str) -> Result<()> {
    if has_media(msg) {
        bot.forward_message(target, msg.chat.id, msg.id).await?;
    } else {
        let body = if body.is_empty() {
            EMPTY_REPLY_PLACEHOLDER
        } else {
            body
        };
        bot.send_message(
            target,
            format!(
                "💼 <b>Reply from admin:</b>\n{}",
                teloxide::utils::html::escape(body)
            ),
        )
        .parse_mode(ParseMode::Html)
        .await?;
    }
    Ok(())
}

async fn send_broadcast_confirmation(
    bot: &Bot,
    admin_chat: ChatId,
    report: DeliveryReport,
) -> Result<()> {
    let text = format!(
        "📡 Announcement delivered to {} of {} users.",
        report.delivered, report.attempted
    );
    bot.send_message(admin_chat, text).await?;
    Ok(())
}
