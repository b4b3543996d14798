//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
    pub custom_response: Option<Value>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
            custom_response: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = format!("{}/bot{{token}}", server.uri());

        Self { server, base_url }
    }

    /// Get the mock server URL for a given bot token
    pub fn get_api_url(&self, token: &str) -> String {
        self.base_url.replace("{token}", token)
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({
                    "ok": true,
                    "result": {
                        "message_id": 123,
                        "from": {
                            "id": 12345,
                            "is_bot": true,
                            "first_name": "TestBot",
                            "username": "test_bot"
                        },
                        "chat": {
                            "id": 987654321_i64,
                            "first_name": "Test",
                            "type": "private"
                        },
                        "date": 1640995200,
                        "text": "Test message"
                    }
                })
            } else {
                json!({
                    "ok": false,
                    "error_code": 403,
                    "description": "Forbidden: bot was blocked by the user"
                })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 403 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path("/bot12345:test_token/SendMessage"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup a sendMessage mock that rejects exactly one call.
    ///
    /// Mount this before the success mock; the first send fails with a
    /// blocked-user error and later sends fall through to the success mock.
    pub async fn mock_send_message_blocked_once(&self) {
        let response_body = json!({
            "ok": false,
            "error_code": 403,
            "description": "Forbidden: bot was blocked by the user"
        });

        Mock::given(method("POST"))
            .and(path("/bot12345:test_token/SendMessage"))
            .respond_with(ResponseTemplate::new(403).set_body_json(response_body))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for forwardMessage endpoint
    pub async fn mock_forward_message(&self, config: MockResponseConfig) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({
                    "ok": true,
                    "result": {
                        "message_id": 124,
                        "from": {
                            "id": 12345,
                            "is_bot": true,
                            "first_name": "TestBot",
                            "username": "test_bot"
                        },
                        "chat": {
                            "id": 987654321_i64,
                            "first_name": "Test",
                            "type": "private"
                        },
                        "date": 1640995200,
                        "text": "Forwarded message"
                    }
                })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: message to forward not found"
                })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path("/bot12345:test_token/ForwardMessage"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for sendPhoto endpoint
    pub async fn mock_send_photo(&self, config: MockResponseConfig) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({
                    "ok": true,
                    "result": {
                        "message_id": 125,
                        "from": {
                            "id": 12345,
                            "is_bot": true,
                            "first_name": "TestBot",
                            "username": "test_bot"
                        },
                        "chat": {
                            "id": 987654321_i64,
                            "first_name": "Test",
                            "type": "private"
                        },
                        "date": 1640995200,
                        "photo": [
                            {
                                "file_id": "AgACAgIAAxkDAAIBTest",
                                "file_unique_id": "AQADTest",
                                "file_size": 8192,
                                "width": 600,
                                "height": 400
                            }
                        ],
                        "caption": "Test caption"
                    }
                })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: wrong file identifier"
                })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path("/bot12345:test_token/SendPhoto"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self, config: MockResponseConfig) {
        let response_body = config.custom_response.unwrap_or_else(|| {
            if config.success {
                json!({
                    "ok": true,
                    "result": true
                })
            } else {
                json!({
                    "ok": false,
                    "error_code": 400,
                    "description": "Bad Request: query is too old"
                })
            }
        });

        let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        if let Some(delay) = config.delay_ms {
            response = response.set_delay(std::time::Duration::from_millis(delay));
        }

        Mock::given(method("POST"))
            .and(path("/bot12345:test_token/AnswerCallbackQuery"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for getMe endpoint
    pub async fn mock_get_me(&self) {
        let response_body = json!({
            "ok": true,
            "result": {
                "id": 12345,
                "is_bot": true,
                "first_name": "TestBot",
                "username": "test_bot",
                "can_join_groups": true,
                "can_read_all_group_messages": false,
                "supports_inline_queries": false
            }
        });

        Mock::given(method("POST"))
            .and(path("/bot12345:test_token/GetMe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(response_body))
            .mount(&self.server)
            .await;
    }

    /// Setup all common mocks with default success responses
    pub async fn setup_default_mocks(&self) {
        let config = MockResponseConfig::default();

        self.mock_get_me().await;
        self.mock_send_message(config.clone()).await;
        self.mock_forward_message(config.clone()).await;
        self.mock_send_photo(config.clone()).await;
        self.mock_answer_callback_query(config).await;
    }

    /// Setup mocks for error scenarios
    pub async fn setup_error_mocks(&self) {
        let config = MockResponseConfig {
            success: false,
            delay_ms: None,
            custom_response: None,
        };

        self.mock_send_message(config.clone()).await;
        self.mock_forward_message(config.clone()).await;
        self.mock_send_photo(config.clone()).await;
        self.mock_answer_callback_query(config).await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// Bodies of all requests made to an endpoint, as UTF-8 strings
    ///
    /// Matching is case-insensitive because teloxide requests PascalCase
    /// method paths while tests name endpoints in Telegram's camelCase.
    pub async fn request_bodies(&self, endpoint: &str) -> Vec<String> {
        let received_requests = self.server.received_requests().await.unwrap();
        let endpoint = endpoint.to_ascii_lowercase();
        received_requests
            .iter()
            .filter(|req| req.url.path().to_ascii_lowercase().contains(&endpoint))
            .map(|req| String::from_utf8_lossy(&req.body).into_owned())
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let received_requests = self.server.received_requests().await.unwrap();
        let matching_requests = received_requests
            .iter()
            .filter(|req| {
                req.url
                    .path()
                    .to_ascii_lowercase()
                    .contains(&endpoint.to_ascii_lowercase())
            })
            .count();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

/// Build a bot wired to the mock server
pub fn test_bot(mock: &TelegramMockServer) -> teloxide::Bot {
    let api_url = url::Url::parse(&mock.server.uri()).expect("mock server URI is a valid URL");
    teloxide::Bot::new(test_bot_token()).set_api_url(api_url)
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create a test end-user ID
pub fn test_user_id() -> i64 {
    987654321
}

/// Helper function to create a test admin ID
pub fn test_admin_id() -> i64 {
    555000111
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_telegram_mock_server_creation() {
        let mock_server = TelegramMockServer::new().await;
        assert!(!mock_server.base_url.is_empty());
        assert!(mock_server.base_url.contains("bot{token}"));
    }

    #[tokio::test]
    async fn test_get_api_url() {
        let mock_server = TelegramMockServer::new().await;
        let token = test_bot_token();
        let api_url = mock_server.get_api_url(&token);
        assert!(api_url.contains(&token));
        assert!(!api_url.contains("{token}"));
    }
}
