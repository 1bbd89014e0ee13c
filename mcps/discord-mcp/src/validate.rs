//! Boundary validation for tool inputs
//!
//! Every tool validates its inputs here before touching the registry or the
//! network. Checks run in declaration order and stop at the first violated
//! constraint; the resulting [`ValidationError`] renders as a descriptive
//! string at the tool boundary.

use thiserror::Error;

/// Discord's message character limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Approved webhook URL prefixes (the two historical Discord domains)
pub const WEBHOOK_URL_PREFIXES: [&str; 2] = [
    "https://discord.com/api/webhooks/",
    "https://discordapp.com/api/webhooks/",
];

const WEBHOOK_URL_MIN: usize = 50;
const WEBHOOK_URL_MAX: usize = 300;

/// Input constraint violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters (got {len})")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("Invalid Discord webhook URL. Must start with 'https://discord.com/api/webhooks/' or 'https://discordapp.com/api/webhooks/'")]
    UrlPrefix,

    #[error("Webhook URL must be between 50 and 300 characters (got {len})")]
    UrlLength { len: usize },

    #[error("Webhook name must contain only alphanumeric characters and spaces/underscores")]
    NameCharacters,

    #[error("changes must contain between 1 and 10 entries (got {count})")]
    ChangeCount { count: usize },
}

/// Trim a required string field and enforce its length ceiling
pub fn required(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let len = trimmed.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, max, len });
    }
    Ok(trimmed.to_string())
}

/// Trim an optional string field and enforce its length ceiling
pub fn optional(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            let len = trimmed.chars().count();
            if len > max {
                return Err(ValidationError::TooLong { field, max, len });
            }
            Ok(Some(trimmed.to_string()))
        }
    }
}

/// Validate and normalize a webhook name
///
/// Names are stored lowercased with spaces converted to underscores; after
/// normalization only `[a-z0-9_]` is allowed, with at least one character
/// that is not an underscore.
pub fn webhook_name(raw: &str) -> Result<String, ValidationError> {
    let name = required("Webhook name", raw, 50)?;
    let normalized = name.to_lowercase().replace(' ', "_");

    let mut has_alnum = false;
    for c in normalized.chars() {
        match c {
            '_' => {}
            c if c.is_ascii_lowercase() || c.is_ascii_digit() => has_alnum = true,
            _ => return Err(ValidationError::NameCharacters),
        }
    }
    if !has_alnum {
        return Err(ValidationError::NameCharacters);
    }

    Ok(normalized)
}

/// Validate a webhook endpoint URL
///
/// The URL must start with one of the two approved HTTPS prefixes and fit
/// the length bounds. Anything else is rejected at the boundary.
pub fn webhook_url(raw: &str) -> Result<String, ValidationError> {
    let url = raw.trim().to_string();
    if !WEBHOOK_URL_PREFIXES.iter().any(|p| url.starts_with(p)) {
        return Err(ValidationError::UrlPrefix);
    }
    let len = url.chars().count();
    if !(WEBHOOK_URL_MIN..=WEBHOOK_URL_MAX).contains(&len) {
        return Err(ValidationError::UrlLength { len });
    }
    Ok(url)
}

/// Validate an announcement change list (1..=10 entries, each trimmed)
pub fn changes(raw: &[String]) -> Result<Vec<String>, ValidationError> {
    if raw.is_empty() || raw.len() > 10 {
        return Err(ValidationError::ChangeCount { count: raw.len() });
    }
    Ok(raw.iter().map(|c| c.trim().to_string()).collect())
}
