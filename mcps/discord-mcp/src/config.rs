//! Configuration for the Discord MCP server
//!
//! The config directory is resolved once at startup and passed into the
//! registry explicitly - there is no process-wide mutable state.

use std::path::PathBuf;

/// Configuration for the Discord MCP server
#[derive(Clone, Debug)]
pub struct DiscordConfig {
    /// Directory holding the webhook registry document
    pub config_dir: PathBuf,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
            .join("discord-mcp");

        Self { config_dir }
    }
}

impl DiscordConfig {
    /// Create config from environment variables
    ///
    /// `DISCORD_MCP_CONFIG_DIR` overrides the platform config directory.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("DISCORD_MCP_CONFIG_DIR") {
            config.config_dir = PathBuf::from(dir);
        }

        config
    }

    /// Path to the webhook registry document
    pub fn webhooks_path(&self) -> PathBuf {
        self.config_dir.join("webhooks.json")
    }

    /// Create the config directory if it does not exist
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)
    }
}
