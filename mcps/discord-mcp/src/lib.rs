//! Discord MCP Library
//!
//! Discord integration via webhooks: plain messages, formatted release
//! announcements, and local webhook registration management.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use discord_mcp::DiscordMcpServer;
//!
//! let server = DiscordMcpServer::new()?;
//! // Use with in-memory transport or serve via stdio
//! ```
//!
//! No bot token required - webhooks carry their own authorization. Webhook
//! URLs are stored in a local JSON document; set `DISCORD_MCP_CONFIG_DIR`
//! to override where it lives.

pub mod config;
pub mod dispatch;
pub mod format;
pub mod handlers;
pub mod params;
pub mod registry;
pub mod server;
#[cfg(test)]
mod tests;
pub mod types;
pub mod validate;

// Re-export main server type
pub use server::DiscordMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
