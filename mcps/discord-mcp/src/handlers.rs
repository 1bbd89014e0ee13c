//! Handler implementations for discord-mcp tools
//!
//! Each handler validates its input, performs the effect (registry access
//! and/or webhook dispatch), and renders a final string. Every outcome -
//! success or failure - is returned as tool text; nothing raises past the
//! tool boundary.

use indexmap::IndexMap;
use mcp_common::{json_success, text_success, CallToolResult, McpResult};
use serde_json::json;

use crate::dispatch::{DispatchError, OutboundMessage, WebhookClient};
use crate::format;
use crate::params::*;
use crate::registry::WebhookRegistry;
use crate::types::{DispatchResult, Embed, ResponseFormat};
use crate::validate::{self, ValidationError, MESSAGE_LIMIT};

/// Default thumbnail for embed announcements when the caller supplies none
const DEFAULT_THUMBNAIL_URL: &str = "https://raw.githubusercontent.com/MoshPitCodes/hytale-livinglands/main/.github/assets/logo/hytale-livinglands-logo.png";

// ============================================================================
// Send Operations
// ============================================================================

pub async fn send_message(
    registry: &WebhookRegistry,
    client: &WebhookClient,
    params: SendMessageParams,
) -> McpResult<CallToolResult> {
    let input = match validate_message(&params) {
        Ok(input) => input,
        Err(e) => return Ok(validation_failure(e)),
    };

    let Some(webhook_url) = registry.get(&input.webhook_name).await else {
        return Ok(text_success(
            not_found_message(registry, &input.webhook_name).await,
        ));
    };

    let message = OutboundMessage {
        content: Some(input.content),
        username: input.username,
        avatar_url: params.avatar_url.clone(),
        embeds: None,
    };

    match client.send(&webhook_url, &message).await {
        Ok(result) => render_message_result(&result, &input.webhook_name, params.response_format),
        Err(e) => dispatch_failure(e, params.response_format),
    }
}

struct MessageInput {
    webhook_name: String,
    content: String,
    username: Option<String>,
}

fn validate_message(params: &SendMessageParams) -> Result<MessageInput, ValidationError> {
    Ok(MessageInput {
        webhook_name: validate::required("webhook_name", &params.webhook_name, 50)?,
        content: validate::required("content", &params.content, MESSAGE_LIMIT)?,
        username: validate::optional("username", params.username.as_deref(), 80)?,
    })
}

fn render_message_result(
    result: &DispatchResult,
    webhook_name: &str,
    response_format: ResponseFormat,
) -> McpResult<CallToolResult> {
    match response_format {
        ResponseFormat::Json => json_success(result),
        ResponseFormat::Markdown => {
            if result.success {
                Ok(text_success(format!(
                    "Message sent successfully to '{}' webhook.",
                    webhook_name
                )))
            } else {
                Ok(text_success(format!(
                    "Error: Failed to send message. {}",
                    result.error.as_deref().unwrap_or("Unknown error")
                )))
            }
        }
    }
}

pub async fn send_announcement(
    registry: &WebhookRegistry,
    client: &WebhookClient,
    params: SendAnnouncementParams,
) -> McpResult<CallToolResult> {
    let input = match validate_announcement(&params) {
        Ok(input) => input,
        Err(e) => return Ok(validation_failure(e)),
    };

    let Some(webhook_url) = registry.get(&input.webhook_name).await else {
        return Ok(text_success(
            not_found_message(registry, &input.webhook_name).await,
        ));
    };

    if params.use_embed {
        let thumbnail = params
            .thumbnail_url
            .clone()
            .unwrap_or_else(|| DEFAULT_THUMBNAIL_URL.to_string());

        let embed = format::announcement_embed(
            &input.version,
            &input.headline,
            &input.changes,
            params.download_url.as_deref(),
            params.style,
            params.beta_warning,
            params.embed_color.as_deref(),
            Some(&thumbnail),
            input.footer_text.as_deref(),
        );

        let message = OutboundMessage {
            content: None,
            username: input.username,
            avatar_url: None,
            embeds: Some(vec![embed.clone()]),
        };

        match client.send(&webhook_url, &message).await {
            Ok(result) => render_embed_result(&result, &embed, params.response_format),
            Err(e) => dispatch_failure(e, params.response_format),
        }
    } else {
        let announcement = format::plain_announcement(
            &input.version,
            &input.headline,
            &input.changes,
            params.download_url.as_deref(),
            params.style,
            params.beta_warning,
        );

        // Rejected here, before any dispatch is attempted
        let length = announcement.chars().count();
        if length > MESSAGE_LIMIT {
            return Ok(text_success(format!(
                "Error: Announcement is too long ({} chars). Discord limit is {} characters. \
                 Reduce the number of changes or shorten descriptions.",
                length, MESSAGE_LIMIT
            )));
        }

        let message = OutboundMessage {
            content: Some(announcement.clone()),
            username: input.username,
            avatar_url: None,
            embeds: None,
        };

        match client.send(&webhook_url, &message).await {
            Ok(result) => render_plain_result(&result, &announcement, params.response_format),
            Err(e) => dispatch_failure(e, params.response_format),
        }
    }
}

struct AnnouncementInput {
    webhook_name: String,
    version: String,
    headline: String,
    changes: Vec<String>,
    username: Option<String>,
    footer_text: Option<String>,
}

fn validate_announcement(
    params: &SendAnnouncementParams,
) -> Result<AnnouncementInput, ValidationError> {
    Ok(AnnouncementInput {
        webhook_name: validate::required("webhook_name", &params.webhook_name, 50)?,
        version: validate::required("version", &params.version, 30)?,
        headline: validate::required("headline", &params.headline, 256)?,
        changes: validate::changes(&params.changes)?,
        username: validate::optional("username", params.username.as_deref(), 80)?,
        footer_text: validate::optional("footer_text", params.footer_text.as_deref(), 100)?,
    })
}

fn render_embed_result(
    result: &DispatchResult,
    embed: &Embed,
    response_format: ResponseFormat,
) -> McpResult<CallToolResult> {
    match response_format {
        ResponseFormat::Json => json_success(&json!({
            "result": result,
            "embed": embed,
            "format": "embed",
        })),
        ResponseFormat::Markdown => {
            if result.success {
                let mut preview = vec![
                    format!("**{}**", embed.title),
                    embed.description.clone(),
                    String::new(),
                ];
                for field in &embed.fields {
                    preview.push(format!("**{}**", field.name));
                    preview.push(field.value.clone());
                    preview.push(String::new());
                }
                Ok(text_success(format!(
                    "Embed announcement sent successfully!\n\n**Preview:**\n{}",
                    preview.join("\n")
                )))
            } else {
                Ok(text_success(format!(
                    "Error: Failed to send announcement. {}",
                    result.error.as_deref().unwrap_or("Unknown error")
                )))
            }
        }
    }
}

fn render_plain_result(
    result: &DispatchResult,
    announcement: &str,
    response_format: ResponseFormat,
) -> McpResult<CallToolResult> {
    match response_format {
        ResponseFormat::Json => json_success(&json!({
            "result": result,
            "announcement_preview": announcement,
            "character_count": announcement.chars().count(),
            "format": "plain_text",
        })),
        ResponseFormat::Markdown => {
            if result.success {
                Ok(text_success(format!(
                    "Announcement sent successfully!\n\n**Preview:**\n```\n{}\n```",
                    announcement
                )))
            } else {
                Ok(text_success(format!(
                    "Error: Failed to send announcement. {}",
                    result.error.as_deref().unwrap_or("Unknown error")
                )))
            }
        }
    }
}

// ============================================================================
// Webhook Management
// ============================================================================

pub async fn add_webhook(
    registry: &WebhookRegistry,
    params: AddWebhookParams,
) -> McpResult<CallToolResult> {
    let (name, url, description) = match validate_new_webhook(&params) {
        Ok(validated) => validated,
        Err(e) => return Ok(validation_failure(e)),
    };

    match registry.upsert(&name, &url, description).await {
        Ok(existed) => {
            let action = if existed { "updated" } else { "added" };
            Ok(text_success(format!(
                "Webhook '{}' {} successfully. You can now use it with \
                 discord_send_message or discord_send_announcement.",
                name, action
            )))
        }
        Err(e) => Ok(text_success(format!(
            "Error: Failed to save webhook configuration: {}",
            e
        ))),
    }
}

fn validate_new_webhook(
    params: &AddWebhookParams,
) -> Result<(String, String, Option<String>), ValidationError> {
    let name = validate::webhook_name(&params.name)?;
    let url = validate::webhook_url(&params.url)?;
    let description = validate::optional("description", params.description.as_deref(), 200)?;
    Ok((name, url, description))
}

pub async fn remove_webhook(
    registry: &WebhookRegistry,
    params: RemoveWebhookParams,
) -> McpResult<CallToolResult> {
    let name = match validate::required("name", &params.name, 50) {
        Ok(name) => name,
        Err(e) => return Ok(validation_failure(e)),
    };

    match registry.remove(&name).await {
        Ok(true) => Ok(text_success(format!(
            "Webhook '{}' removed successfully.",
            name
        ))),
        Ok(false) => {
            let names: Vec<String> = registry.list().await.keys().cloned().collect();
            let message = if names.is_empty() {
                format!("Error: Webhook '{}' not found. No webhooks configured.", name)
            } else {
                format!(
                    "Error: Webhook '{}' not found. Available webhooks: {}",
                    name,
                    names.join(", ")
                )
            };
            Ok(text_success(message))
        }
        Err(e) => Ok(text_success(format!(
            "Error: Failed to remove webhook: {}",
            e
        ))),
    }
}

pub async fn list_webhooks(
    registry: &WebhookRegistry,
    params: ListWebhooksParams,
) -> McpResult<CallToolResult> {
    let webhooks = registry.list().await;

    if webhooks.is_empty() {
        return Ok(text_success(
            "No webhooks configured. Use discord_add_webhook to add one.",
        ));
    }

    match params.response_format {
        ResponseFormat::Json => {
            let sanitized: IndexMap<&String, serde_json::Value> = webhooks
                .iter()
                .map(|(name, entry)| {
                    (
                        name,
                        json!({
                            "description": entry.description,
                            "url_hint": url_hint(&entry.url),
                            "added_at": entry.added_at,
                        }),
                    )
                })
                .collect();
            json_success(&sanitized)
        }
        ResponseFormat::Markdown => {
            let mut lines = vec!["# Configured Discord Webhooks".to_string(), String::new()];
            for (name, entry) in &webhooks {
                lines.push(format!("## {}", name));
                lines.push(format!(
                    "- **Description**: {}",
                    entry.description.as_deref().unwrap_or("No description")
                ));
                lines.push(format!("- **URL hint**: `{}`", url_hint(&entry.url)));
                lines.push(format!("- **Added**: {}", entry.added_at));
                lines.push(String::new());
            }
            Ok(text_success(lines.join("\n")))
        }
    }
}

// ============================================================================
// Shared Rendering
// ============================================================================

fn validation_failure(e: ValidationError) -> CallToolResult {
    text_success(format!("Error: {}", e))
}

async fn not_found_message(registry: &WebhookRegistry, name: &str) -> String {
    let names: Vec<String> = registry.list().await.keys().cloned().collect();
    if names.is_empty() {
        format!(
            "Error: Webhook '{}' not found. No webhooks configured. \
             Use discord_add_webhook to add one first.",
            name
        )
    } else {
        format!(
            "Error: Webhook '{}' not found. Available webhooks: {}. \
             Use discord_add_webhook to add a new one.",
            name,
            names.join(", ")
        )
    }
}

fn dispatch_failure(
    err: DispatchError,
    response_format: ResponseFormat,
) -> McpResult<CallToolResult> {
    match response_format {
        ResponseFormat::Json => json_success(&json!({
            "success": false,
            "error": err.to_string(),
        })),
        ResponseFormat::Markdown => Ok(text_success(format!("Error: {}", err))),
    }
}

/// Redacted identification hint - never more than the URL's last 8 characters
fn url_hint(url: &str) -> String {
    let chars: Vec<char> = url.chars().collect();
    if chars.len() <= 8 {
        return url.to_string();
    }
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_hint_redacts_all_but_tail() {
        let url = "https://discord.com/api/webhooks/123456789012345678/secret-token";
        assert_eq!(url_hint(url), "...et-token");
        assert_eq!(url_hint("short"), "short");
    }
}
