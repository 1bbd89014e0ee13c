//! Discord MCP - webhook messaging, release announcements, webhook management
//!
//! Webhook URLs are stored in a local JSON document under the platform
//! config directory (override with DISCORD_MCP_CONFIG_DIR).

mod config;
mod dispatch;
mod format;
mod handlers;
mod params;
mod registry;
mod server;
#[cfg(test)]
mod tests;
mod types;
mod validate;

use rmcp::{transport::io::stdio, ServiceExt};
use server::DiscordMcpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("discord_mcp")?;

    tracing::info!("Starting Discord MCP server");

    let server = DiscordMcpServer::new()?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Discord MCP server running");

    service.waiting().await?;

    tracing::info!("Discord MCP server stopped");

    Ok(())
}
