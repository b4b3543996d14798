//! Message handlers module
//!
//! Central flow for free-form private messages: user tracking, spam guard,
//! the menu button, admin routing, FAQ auto-replies and the admin relay.

use chrono::{DateTime, Utc};
use teloxide::{
    Bot,
    prelude::*,
    types::{Message, MessageOrigin},
};
use tracing::debug;

use crate::config::Settings;
use crate::models::{ForwardOrigin, UserProfile};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

use super::commands::menu;
use super::routing;

const THROTTLE_NOTICE: &str =
    "⚠️ You are sending messages too quickly. Please wait a moment.";
const RELAY_ACK: &str = "📥 Your message has been received! An admin will reply soon.";

/// Substrings that re-show the main menu keyboard
const MENU_TRIGGERS: [&str; 3] = ["menu", "button", "tugma"];

/// Track the sender and apply the spam gate. Returns `None` when the
/// message should not be processed further: group chats, senderless
/// updates, and throttled users.
pub async fn preprocess(
    bot: &Bot,
    msg: &Message,
    services: &ServiceFactory,
) -> Result<Option<UserProfile>> {
    if !msg.chat.id.is_user() {
        debug!(chat_id = ?msg.chat.id, "Ignoring non-private chat message");
        return Ok(None);
    }
    let Some(user) = msg.from.as_ref() else {
        return Ok(None);
    };

    let profile = UserProfile::from(user);
    let now = Utc::now();
    services.directory.upsert(&profile, now).await;

    if let Some(origin) = msg.forward_origin() {
        services
            .directory
            .record_forward(profile.id, forward_provenance(origin, now))
            .await;
    }

    // Admins are exempt from the spam gate
    if !services.auth.is_admin(profile.id) && !services.guard.allow(profile.id, now) {
        bot.send_message(msg.chat.id, THROTTLE_NOTICE).await?;
        return Ok(None);
    }

    Ok(Some(profile))
}

/// Handle a free-form message
pub async fn handle_message(
    bot: Bot,
    msg: Message,
    services: ServiceFactory,
    settings: Settings,
) -> Result<()> {
    let Some(profile) = preprocess(&bot, &msg, &services).await? else {
        return Ok(());
    };
    let text = msg.text().unwrap_or_default();

    // The Menu button works for everyone, admins included
    if text == menu::MENU_BUTTON_LABEL {
        log_user_action(profile.id, "showcase_opened", None);
        return menu::send_showcase(bot, msg.chat.id, &settings.showcase).await;
    }

    if services.auth.is_admin(profile.id) {
        // Captions take part in admin routing so media can carry
        // addressing tokens
        let routed = msg.text().or_else(|| msg.caption()).unwrap_or_default();
        let action = routing::parse_admin_action(routed, routing::has_media(&msg))?;
        return routing::execute_admin_action(bot, &msg, action, &services, &settings).await;
    }

    if let Some(response) = services.faq.match_text(text) {
        log_user_action(profile.id, "faq_reply", Some(text));
        bot.send_message(msg.chat.id, response).await?;
        return Ok(());
    }

    let lowered = text.to_lowercase();
    if MENU_TRIGGERS.iter().any(|k| lowered.contains(k)) {
        return menu::send_main_menu(bot, msg.chat.id, menu::MENU_PROMPT).await;
    }

    relay_to_admins(bot, msg, &profile, &services).await
}

/// Provenance entry for a forwarded message, mirroring what the origin
/// exposes: a user's first name, a hidden sender's display name, or a
/// chat title
fn forward_provenance(origin: &MessageOrigin, now: DateTime<Utc>) -> ForwardOrigin {
    let from = match origin {
        MessageOrigin::User { sender_user, .. } => sender_user.first_name.clone(),
        MessageOrigin::HiddenUser {
            sender_user_name, ..
        } => sender_user_name.clone(),
        MessageOrigin::Chat { sender_chat, .. } => sender_chat
            .title()
            .unwrap_or("unknown")
            .to_string(),
        MessageOrigin::Channel { chat, .. } => {
            chat.title().unwrap_or("unknown").to_string()
        }
    };

    ForwardOrigin { date: now, from }
}

/// Fallback for unmatched non-admin messages: send the details to every
/// admin, forward any media, then acknowledge the sender once
async fn relay_to_admins(
    bot: Bot,
    msg: Message,
    profile: &UserProfile,
    services: &ServiceFactory,
) -> Result<()> {
    let text = msg.text().unwrap_or_default();
    let username = profile.username.as_deref().unwrap_or("none");
    let shown = if text.is_empty() { "(media)" } else { text };

    let details = format!(
        "📩 New message!\n\
         👤 {}\n\
         🆔 ID: {}\n\
         🌐 Username: @{}\n\
         ✉️ {}\n\n\
         Reply:\n\
         • By ID: @@{}\n\
         • By username: @{}",
        profile.first_name, profile.id, username, shown, profile.id, username
    );

    let reached = services.broadcaster.notify_admins(&details).await;
    if routing::has_media(&msg) {
        services
            .broadcaster
            .forward_to_admins(msg.chat.id, msg.id)
            .await;
    }

    log_user_action(profile.id, "relayed_to_admins", Some(shown));
    debug!(
        user_id = profile.id,
        admins_reached = reached,
        "Message relayed to admins"
    );

    bot.send_message(msg.chat.id, RELAY_ACK).await?;
    Ok(())
}
