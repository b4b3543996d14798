//! Test data helpers for creating test objects
//!
//! This module provides helper functions for creating test Telegram messages,
//! callback queries, users, and seeded configuration and directory data.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use teloxide::types::{
    CallbackQuery, Chat, ChatId, ChatKind, ChatPrivate, ChatPublic, MediaKind, MediaText,
    Message, MessageCommon, MessageId, MessageKind, PublicChatKind, PublicChatSupergroup,
    User, UserId,
};

use BrewBuddy::config::Settings;
use BrewBuddy::models::UserRecord;
use BrewBuddy::storage::UserStore;

use super::telegram_mock::{test_admin_id, test_bot_token};

/// Helper function to create a test Telegram user
pub fn create_test_user(
    user_id: i64,
    username: Option<&str>,
    first_name: &str,
    last_name: Option<&str>,
    language_code: Option<&str>,
) -> User {
    User {
        id: UserId(user_id as u64),
        is_bot: false,
        first_name: first_name.to_string(),
        last_name: last_name.map(|s| s.to_string()),
        username: username.map(|s| s.to_string()),
        language_code: language_code.map(|s| s.to_string()),
        is_premium: false,
        added_to_attachment_menu: false,
    }
}

/// Helper function to create a test private chat
pub fn create_test_private_chat(
    chat_id: i64,
    username: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Chat {
    Chat {
        id: ChatId(chat_id),
        kind: ChatKind::Private(ChatPrivate {
            username: username.map(|s| s.to_string()),
            first_name: first_name.map(|s| s.to_string()),
            last_name: last_name.map(|s| s.to_string()),
        }),
    }
}

/// Helper function to create a test group chat
pub fn create_test_group_chat(chat_id: i64, title: &str) -> Chat {
    Chat {
        id: ChatId(chat_id),
        kind: ChatKind::Public(ChatPublic {
            title: Some(title.to_string()),
            kind: PublicChatKind::Supergroup(PublicChatSupergroup {
                username: None,
                is_forum: false,
            }),
        }),
    }
}

/// Helper function to create a test Telegram message
pub fn create_test_message(
    user_id: i64,
    chat_id: i64,
    text: &str,
    username: Option<&str>,
    first_name: &str,
    last_name: Option<&str>,
) -> Message {
    let user = create_test_user(user_id, username, first_name, last_name, Some("en"));

    let chat = if chat_id > 0 {
        create_test_private_chat(chat_id, username, Some(first_name), last_name)
    } else {
        create_test_group_chat(chat_id, "Test Group")
    };

    Message {
        id: MessageId(1),
        thread_id: None,
        from: Some(user),
        sender_chat: None,
        sender_business_bot: None,
        date: Utc::now(),
        chat,
        is_topic_message: false,
        via_bot: None,
        kind: MessageKind::Common(MessageCommon {
            author_signature: None,
            forward_origin: None,
            external_reply: None,
            quote: None,
            reply_to_story: None,
            edit_date: None,
            media_kind: MediaKind::Text(MediaText {
                text: text.to_string(),
                entities: vec![],
                link_preview_options: None,
            }),
            reply_markup: None,
            effect_id: None,
            reply_to_message: None,
            sender_boost_count: None,
            is_automatic_forward: false,
            has_protected_content: false,
            is_from_offline: false,
            business_connection_id: None,
        }),
    }
}

/// Helper function to create a simple test message with default user data
pub fn create_simple_test_message(user_id: i64, chat_id: i64, text: &str) -> Message {
    create_test_message(user_id, chat_id, text, Some("testuser"), "Test", Some("User"))
}

/// Helper function to create a message from the configured admin
pub fn create_admin_test_message(text: &str) -> Message {
    create_test_message(
        test_admin_id(),
        test_admin_id(),
        text,
        Some("brewbuddy_admin"),
        "Admin",
        None,
    )
}

/// Helper function to create a test callback query
pub fn create_test_callback_query(
    user_id: i64,
    chat_id: i64,
    data: &str,
    username: Option<&str>,
    first_name: &str,
    last_name: Option<&str>,
) -> CallbackQuery {
    let user = create_test_user(user_id, username, first_name, last_name, Some("en"));
    let message =
        create_test_message(user_id, chat_id, "Test message", username, first_name, last_name);

    CallbackQuery {
        id: format!("callback_{}", user_id),
        from: user,
        message: Some(teloxide::types::MaybeInaccessibleMessage::Regular(Box::new(message))),
        inline_message_id: None,
        data: Some(data.to_string()),
        game_short_name: None,
        chat_instance: "test_chat_instance".to_string(),
    }
}

/// Helper function to create a simple callback query with default user data
pub fn create_simple_test_callback_query(user_id: i64, data: &str) -> CallbackQuery {
    create_test_callback_query(user_id, user_id, data, Some("testuser"), "Test", Some("User"))
}

/// Settings pointing the stores into a per-test directory.
///
/// The token matches the hardcoded mock server paths and the admin list
/// contains exactly `test_admin_id()`.
pub fn test_settings(storage_dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = test_bot_token();
    settings.bot.admin_ids = vec![test_admin_id()];
    settings.storage.users_path = storage_dir
        .join("users.json")
        .to_string_lossy()
        .into_owned();
    settings.storage.schedules_path = storage_dir
        .join("schedules.json")
        .to_string_lossy()
        .into_owned();
    settings
}

/// Helper function to create a directory record for seeding
pub fn create_user_record(user_id: i64, username: Option<&str>, first_name: &str) -> UserRecord {
    let now = Utc::now();
    UserRecord {
        id: user_id.to_string(),
        username: username.map(|s| s.to_string()),
        first_name: first_name.to_string(),
        last_name: None,
        first_seen: now,
        last_seen: now,
        messages: 1,
        forwarded_from: vec![],
    }
}

/// Helper function to create multiple directory records
pub fn create_multiple_user_records(count: usize, base_id: i64) -> Vec<UserRecord> {
    (0..count)
        .map(|i| {
            let id = base_id + i as i64;
            create_user_record(id, Some(&format!("customer{}", i + 1)), &format!("Customer{}", i + 1))
        })
        .collect()
}

/// Write records into the user store the settings point at
pub fn seed_user_store(settings: &Settings, records: &[UserRecord]) {
    let store = UserStore::new(&settings.storage.users_path);
    let mut users = BTreeMap::new();
    for record in records {
        users.insert(record.id.clone(), record.clone());
    }
    store.save(&users).expect("Failed to seed user store");
}
