//! Parameter definitions for discord-mcp tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{AnnouncementStyle, ResponseFormat};

// ============================================================================
// Send Operations
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SendMessageParams {
    #[schemars(description = "Name of the configured webhook to use (e.g., 'releases', 'announcements')")]
    pub webhook_name: String,

    #[schemars(description = "Message content to send (max 2000 characters)")]
    pub content: String,

    #[schemars(description = "Override the webhook's default username")]
    pub username: Option<String>,

    #[schemars(description = "Override the webhook's default avatar URL")]
    pub avatar_url: Option<String>,

    #[schemars(description = "Output format for the response: 'markdown' or 'json'")]
    #[serde(default)]
    pub response_format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SendAnnouncementParams {
    #[schemars(description = "Name of the configured webhook to use")]
    pub webhook_name: String,

    #[schemars(description = "Version number (e.g., 'v2.6.0-beta', '1.0.0')")]
    pub version: String,

    #[schemars(description = "Main headline/feature announcement (e.g., 'The Claims Module is here!')")]
    pub headline: String,

    #[schemars(description = "List of changes/features to highlight (1-10 entries)")]
    pub changes: Vec<String>,

    #[schemars(description = "URL to download/learn more")]
    pub download_url: Option<String>,

    #[schemars(description = "Announcement style preset: 'release', 'hotfix', 'beta', or 'custom'")]
    #[serde(default)]
    pub style: AnnouncementStyle,

    #[schemars(description = "Include beta warning message")]
    #[serde(default)]
    pub beta_warning: bool,

    #[schemars(description = "Use rich embed format (recommended) or plain text")]
    #[serde(default = "default_use_embed")]
    pub use_embed: bool,

    #[schemars(description = "Custom hex color for embed (e.g., '#5865F2'). If not set, uses style default.")]
    pub embed_color: Option<String>,

    #[schemars(description = "URL for thumbnail image in embed")]
    pub thumbnail_url: Option<String>,

    #[schemars(description = "Custom footer text")]
    pub footer_text: Option<String>,

    #[schemars(description = "Override webhook username for this message")]
    pub username: Option<String>,

    #[schemars(description = "Output format for the response: 'markdown' or 'json'")]
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_use_embed() -> bool {
    true
}

// ============================================================================
// Webhook Management
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AddWebhookParams {
    #[schemars(description = "Friendly name for this webhook (e.g., 'releases', 'general')")]
    pub name: String,

    #[schemars(description = "Discord webhook URL from Discord server settings")]
    pub url: String,

    #[schemars(description = "Optional description of what this webhook is for")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemoveWebhookParams {
    #[schemars(description = "Name of the webhook to remove")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListWebhooksParams {
    #[schemars(description = "Output format for the response: 'markdown' or 'json'")]
    #[serde(default)]
    pub response_format: ResponseFormat,
}
