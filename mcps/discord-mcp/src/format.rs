//! Announcement formatting
//!
//! Two independent builders over the same inputs: a plain-text message and a
//! rich embed. Both consult the style table on [`AnnouncementStyle`]; only
//! the embed path reads the wall clock (for its timestamp).

use chrono::{SecondsFormat, Utc};

use crate::types::{AnnouncementStyle, Embed, EmbedField, EmbedFooter, EmbedThumbnail};

/// Arrow glyph used to bullet change-list entries
pub const ARROW: &str = "\u{2192}";

const BETA_WARNING_LINE: &str =
    "\u{26A0}\u{FE0F} Beta \u{2014} back up your world before updating.";
const LINK_EMOJI: &str = "\u{1F517}";

/// Format a release announcement as plain text
///
/// The caller is responsible for checking the result against Discord's
/// message limit before dispatch; no truncation happens here.
pub fn plain_announcement(
    version: &str,
    headline: &str,
    changes: &[String],
    download_url: Option<&str>,
    style: AnnouncementStyle,
    beta_warning: bool,
) -> String {
    let mut lines = vec![format!("{} **{}** is live!", style.emoji(), version)];
    lines.push(String::new());
    lines.push(headline.to_string());
    lines.push(String::new());

    for change in changes {
        // Add arrow if not already present
        if change.starts_with(ARROW) || change.starts_with("->") {
            lines.push(change.replace("->", ARROW));
        } else {
            lines.push(format!("{} {}", ARROW, change));
        }
    }

    if beta_warning {
        lines.push(String::new());
        lines.push(BETA_WARNING_LINE.to_string());
    }

    if let Some(url) = download_url {
        lines.push(format!("{} {}", LINK_EMOJI, url));
    }

    lines.join("\n")
}

/// Build a Discord embed object for a release announcement
///
/// A custom hex color (with or without a leading `#`) overrides the style
/// default; unparseable colors fall back to the style default. Fields are
/// appended in fixed order: What's New, Warning, Download.
#[allow(clippy::too_many_arguments)]
pub fn announcement_embed(
    version: &str,
    headline: &str,
    changes: &[String],
    download_url: Option<&str>,
    style: AnnouncementStyle,
    beta_warning: bool,
    embed_color: Option<&str>,
    thumbnail_url: Option<&str>,
    footer_text: Option<&str>,
) -> Embed {
    let color = embed_color
        .and_then(parse_hex_color)
        .unwrap_or_else(|| style.color());

    let mut fields = Vec::new();

    if !changes.is_empty() {
        let changes_text = changes
            .iter()
            .map(|change| format!("{} {}", ARROW, change))
            .collect::<Vec<_>>()
            .join("\n");
        fields.push(EmbedField {
            name: "What's New".to_string(),
            value: changes_text,
            inline: false,
        });
    }

    if beta_warning {
        fields.push(EmbedField {
            name: "\u{26A0}\u{FE0F} Warning".to_string(),
            value: "This is a **beta release**. Back up your world before updating!".to_string(),
            inline: false,
        });
    }

    if let Some(url) = download_url {
        // The embed itself links to the download; the field keeps it visible
        fields.push(EmbedField {
            name: format!("{} Download", LINK_EMOJI),
            value: format!("[Get it here]({})", url),
            inline: false,
        });
    }

    Embed {
        title: format!("{} {} is live!", style.emoji(), version),
        description: headline.to_string(),
        color,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        fields,
        url: download_url.map(str::to_string),
        thumbnail: thumbnail_url.map(|url| EmbedThumbnail {
            url: url.to_string(),
        }),
        footer: EmbedFooter {
            text: footer_text.unwrap_or("Release Announcement").to_string(),
        },
    }
}

fn parse_hex_color(raw: &str) -> Option<u32> {
    u32::from_str_radix(raw.trim_start_matches('#'), 16).ok()
}
