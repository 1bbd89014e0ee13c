//! Webhook dispatch client
//!
//! One-shot HTTP POST to a webhook endpoint, normalizing Discord's response
//! into a [`DispatchResult`]. Transport failures (timeout, refused
//! connection) stay typed as [`DispatchError`] for the tool layer to render;
//! non-2xx statuses are data, not errors, and land in the result.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::types::{DispatchResult, Embed};

/// Per-request timeout for webhook posts
pub const DISPATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport-level dispatch failures
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Request timed out. Discord may be experiencing issues. Please try again.")]
    Timeout,

    #[error("Could not connect to Discord. Check your internet connection.")]
    Connect,

    #[error("Request failed: {0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DispatchError::Timeout
        } else if err.is_connect() {
            DispatchError::Connect
        } else {
            DispatchError::Transport(err)
        }
    }
}

/// Outbound webhook payload; only non-absent fields are serialized
#[derive(Debug, Default, Serialize)]
pub struct OutboundMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
}

/// HTTP client for posting to webhook endpoints
#[derive(Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Post a message to a webhook endpoint
    ///
    /// Single POST, 30 second timeout, no retries. Discord returns
    /// 204 No Content on success; 200 with a body is possible and also
    /// success. Everything else maps to a failed result.
    pub async fn send(
        &self,
        webhook_url: &str,
        message: &OutboundMessage,
    ) -> Result<DispatchResult, DispatchError> {
        let response = self
            .http
            .post(webhook_url)
            .json(message)
            .timeout(DISPATCH_TIMEOUT)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, "webhook dispatch completed");

        Ok(map_response(status, &body))
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an HTTP status and response body into a [`DispatchResult`]
pub fn map_response(status: u16, body: &str) -> DispatchResult {
    match status {
        204 => DispatchResult {
            success: true,
            status_code: 204,
            message: Some("Message sent successfully".to_string()),
            error: None,
            response: None,
        },
        200 => DispatchResult {
            success: true,
            status_code: 200,
            message: Some("Message sent successfully".to_string()),
            error: None,
            response: if body.is_empty() {
                None
            } else {
                serde_json::from_str(body).ok()
            },
        },
        _ => {
            // Discord error bodies usually carry a "message" field
            let detail = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
                .unwrap_or_else(|| body.to_string());

            let error = if detail.is_empty() {
                describe_status(status)
            } else {
                format!("{} ({})", describe_status(status), detail)
            };

            DispatchResult {
                success: false,
                status_code: status,
                message: None,
                error: Some(error),
                response: None,
            }
        }
    }
}

/// Human-readable description for a failed webhook status
pub fn describe_status(status: u16) -> String {
    match status {
        400 => "Bad request. Check that the message content is valid and within Discord's limits."
            .to_string(),
        401 => "Unauthorized. The webhook URL may be invalid or expired.".to_string(),
        403 => "Forbidden. The webhook may have been deleted or you don't have permission."
            .to_string(),
        404 => "Webhook not found. The webhook URL may be invalid or deleted.".to_string(),
        429 => "Rate limited. Too many requests. Please wait before sending more messages."
            .to_string(),
        _ => format!("Discord API returned status {}", status),
    }
}
