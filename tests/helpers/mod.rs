//! Test helpers module
//!
//! This module provides utilities and helpers for testing the BrewBuddy application.
//! It includes a mocked Telegram Bot API server and factories for Telegram
//! objects and domain records.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod test_data;

pub use telegram_mock::*;
pub use test_data::*;
