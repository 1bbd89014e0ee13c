//! Type definitions for discord-mcp

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for tool responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Markdown,
    Json,
}

/// Style presets for release announcements
///
/// Each style carries a fixed embed color and title emoji; both builders in
/// the format module consult this table rather than branching on the style
/// at the call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementStyle {
    /// Standard release announcement
    #[default]
    Release,
    /// Urgent hotfix announcement
    Hotfix,
    /// Beta/preview release
    Beta,
    /// Custom format
    Custom,
}

impl AnnouncementStyle {
    /// Embed color for this style (Discord decimal color value)
    pub fn color(&self) -> u32 {
        match self {
            AnnouncementStyle::Release => 0x57F287, // Green
            AnnouncementStyle::Hotfix => 0xED4245,  // Red
            AnnouncementStyle::Beta => 0xFEE75C,    // Yellow
            AnnouncementStyle::Custom => 0x5865F2,  // Blurple
        }
    }

    /// Title emoji for this style
    pub fn emoji(&self) -> &'static str {
        match self {
            AnnouncementStyle::Release => "\u{1F4E6}", // Package
            AnnouncementStyle::Hotfix => "\u{1F6A8}",  // Rotating light
            AnnouncementStyle::Beta => "\u{1F9EA}",    // Test tube
            AnnouncementStyle::Custom => "\u{1F4E2}",  // Loudspeaker
        }
    }
}

/// A registered webhook, keyed by its lowercased name in the registry document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEntry {
    pub url: String,
    pub description: Option<String>,
    pub added_at: String,
}

/// Normalized outcome of a webhook dispatch
///
/// Success carries a short confirmation message (plus the parsed response
/// body when Discord returned one); failure carries the status code and a
/// human-readable error string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResult {
    pub success: bool,
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

/// A Discord rich embed, built fresh per announcement and never persisted
#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}
