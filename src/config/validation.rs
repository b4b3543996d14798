//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{BrewBuddyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_storage_config(&settings.storage)?;
    validate_spam_config(&settings.spam)?;
    validate_scheduler_config(&settings.scheduler)?;
    validate_faq_config(&settings.faq)?;
    validate_showcase_config(&settings.showcase)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(BrewBuddyError::Config(
            "Bot token is required".to_string()
        ));
    }

    if config.admin_ids.is_empty() {
        return Err(BrewBuddyError::Config(
            "At least one admin ID must be configured".to_string()
        ));
    }

    Ok(())
}

/// Validate store locations
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.users_path.is_empty() {
        return Err(BrewBuddyError::Config(
            "User store path is required".to_string()
        ));
    }

    if config.schedules_path.is_empty() {
        return Err(BrewBuddyError::Config(
            "Schedule store path is required".to_string()
        ));
    }

    if config.users_path == config.schedules_path {
        return Err(BrewBuddyError::Config(
            "User and schedule stores cannot share a file".to_string()
        ));
    }

    Ok(())
}

/// Validate rate limit configuration
fn validate_spam_config(config: &super::SpamConfig) -> Result<()> {
    if config.window_seconds == 0 {
        return Err(BrewBuddyError::Config(
            "Spam window must be greater than 0".to_string()
        ));
    }

    if config.limit == 0 {
        return Err(BrewBuddyError::Config(
            "Spam limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate scheduler configuration
fn validate_scheduler_config(config: &super::SchedulerConfig) -> Result<()> {
    if config.poll_interval_seconds == 0 {
        return Err(BrewBuddyError::Config(
            "Scheduler poll interval must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate the FAQ table
fn validate_faq_config(config: &super::FaqConfig) -> Result<()> {
    for (index, entry) in config.entries.iter().enumerate() {
        if entry.keywords.is_empty() || entry.keywords.iter().any(|k| k.is_empty()) {
            return Err(BrewBuddyError::Config(
                format!("FAQ entry {} needs at least one non-empty keyword", index)
            ));
        }

        if entry.response.is_empty() {
            return Err(BrewBuddyError::Config(
                format!("FAQ entry {} needs a response", index)
            ));
        }
    }

    Ok(())
}

/// Validate showcase card URLs
fn validate_showcase_config(config: &super::ShowcaseConfig) -> Result<()> {
    url::Url::parse(&config.instagram_url).map_err(|e| {
        BrewBuddyError::Config(format!("Invalid Instagram URL: {}", e))
    })?;

    for card in &config.cards {
        url::Url::parse(&card.image_url).map_err(|e| {
            BrewBuddyError::Config(format!("Invalid image URL for card '{}': {}", card.title, e))
        })?;
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(BrewBuddyError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(BrewBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
