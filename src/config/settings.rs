//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub storage: StorageConfig,
    pub spam: SpamConfig,
    pub scheduler: SchedulerConfig,
    pub faq: FaqConfig,
    pub showcase: ShowcaseConfig,
    pub contact: ContactConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    // `config::Config::try_from` drops empty-array keys, so the seeded
    // default `[]` would otherwise come back as "missing field".
    #[serde(default)]
    pub admin_ids: Vec<i64>,
}

/// Persistent store locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub users_path: String,
    pub schedules_path: String,
}

/// Sliding-window rate limit configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpamConfig {
    pub window_seconds: u64,
    pub limit: usize,
}

/// Scheduled-announcement polling configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulerConfig {
    pub poll_interval_seconds: u64,
}

/// FAQ keyword table, matched in order
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FaqConfig {
    pub entries: Vec<FaqEntry>,
}

/// One FAQ entry: any keyword substring triggers the response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FaqEntry {
    pub keywords: Vec<String>,
    pub response: String,
}

/// Product showcase sent for the Menu button
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShowcaseConfig {
    pub instagram_url: String,
    pub cards: Vec<ShowcaseCard>,
}

/// One product card: photo with caption
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShowcaseCard {
    pub title: String,
    pub caption: String,
    pub image_url: String,
}

/// Business contact details shown by /contact
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactConfig {
    pub phone: String,
    pub address: String,
    pub hours: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables.
    ///
    /// Environment variables use the `BREWBUDDY_` prefix with `__` between
    /// nested keys, e.g. `BREWBUDDY_BOT__TOKEN`.
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("BREWBUDDY")
                    // Without this, the prefix separator falls back to the
                    // nesting separator and only `BREWBUDDY__*` keys match.
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::BrewBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                admin_ids: vec![],
            },
            storage: StorageConfig {
                users_path: "users.json".to_string(),
                schedules_path: "schedules.json".to_string(),
            },
            spam: SpamConfig {
                window_seconds: 60,
                limit: 6,
            },
            scheduler: SchedulerConfig {
                poll_interval_seconds: 30,
            },
            faq: FaqConfig {
                entries: vec![
                    FaqEntry {
                        keywords: vec!["narx".to_string(), "price".to_string()],
                        response: "A full price list is on the menu card. Tap the Menu \
                                   button below; lattes start at $3.50."
                            .to_string(),
                    },
                    FaqEntry {
                        keywords: vec![
                            "qachon".to_string(),
                            "vaqt".to_string(),
                            "when".to_string(),
                        ],
                        response: "We are open every day from 08:00 to 20:00.".to_string(),
                    },
                    FaqEntry {
                        keywords: vec!["manzil".to_string(), "address".to_string()],
                        response: "You can find us at 12 Roast Street, right by the old \
                                   clock tower."
                            .to_string(),
                    },
                ],
            },
            showcase: ShowcaseConfig {
                instagram_url: "https://instagram.com/brewbuddy.cafe".to_string(),
                cards: vec![
                    ShowcaseCard {
                        title: "Espresso".to_string(),
                        caption: "☕ Espresso - double shot of our house blend, $2.50"
                            .to_string(),
                        image_url: "https://picsum.photos/seed/espresso/600/400".to_string(),
                    },
                    ShowcaseCard {
                        title: "Cappuccino".to_string(),
                        caption: "☕ Cappuccino - oat or whole milk, $3.80".to_string(),
                        image_url: "https://picsum.photos/seed/cappuccino/600/400".to_string(),
                    },
                    ShowcaseCard {
                        title: "Croissant".to_string(),
                        caption: "🥐 Butter croissant - baked every morning, $2.20".to_string(),
                        image_url: "https://picsum.photos/seed/croissant/600/400".to_string(),
                    },
                    ShowcaseCard {
                        title: "Cheesecake".to_string(),
                        caption: "🍰 Basque cheesecake - weekend special, $4.50".to_string(),
                        image_url: "https://picsum.photos/seed/cheesecake/600/400".to_string(),
                    },
                ],
            },
            contact: ContactConfig {
                phone: "+1 555 0123".to_string(),
                address: "12 Roast Street".to_string(),
                hours: "08:00-20:00, every day".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
