//! Callback query handlers module
//!
//! Handles inline keyboard button presses

use chrono::Utc;
use teloxide::{Bot, types::CallbackQuery, prelude::*};
use tracing::{debug, info, warn};

use crate::models::UserProfile;
use crate::services::ServiceFactory;
use crate::utils::errors::Result;

const REGISTER_ACK: &str = "You are registered!";
const REGISTER_CONFIRMATION: &str =
    "✅ Your registration has been received. An admin will contact you soon.";

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: ServiceFactory,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;
    debug!(user_id = user_id, callback_data = ?query.data, "Processing callback query");

    let Some(data) = query.data.as_deref() else {
        bot.answer_callback_query(query.id.clone()).await?;
        return Ok(());
    };

    let parts: Vec<&str> = data.split(':').collect();
    match parts.as_slice() {
        ["action", "register"] => {
            // Answer first to clear the button loading state
            bot.answer_callback_query(query.id.clone())
                .text(REGISTER_ACK)
                .await?;

            let profile = UserProfile::from(&query.from);
            services.directory.upsert(&profile, Utc::now()).await;
            info!(user_id = user_id, "User registered through inline button");

            bot.send_message(ChatId(user_id), REGISTER_CONFIRMATION)
                .await?;
        }
        _ => {
            warn!(data = %data, "Unknown callback action");
            bot.answer_callback_query(query.id.clone())
                .text("Button pressed.")
                .await?;
        }
    }

    Ok(())
}
