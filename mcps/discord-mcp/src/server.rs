//! MCP Server implementation for Discord webhooks
//!
//! This module defines the main MCP server that exposes the Discord
//! operations as tools. Handler implementations are in the handlers module.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::config::DiscordConfig;
use crate::dispatch::WebhookClient;
use crate::handlers;
use crate::params::*;
use crate::registry::WebhookRegistry;

/// The main Discord MCP Server
#[derive(Clone)]
pub struct DiscordMcpServer {
    registry: WebhookRegistry,
    client: WebhookClient,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl DiscordMcpServer {
    pub fn new() -> anyhow::Result<Self> {
        Self::from_config(DiscordConfig::from_env())
    }

    pub fn from_config(config: DiscordConfig) -> anyhow::Result<Self> {
        config.ensure_dir()?;

        Ok(Self {
            registry: WebhookRegistry::new(&config),
            client: WebhookClient::new(),
            tool_router: Self::tool_router(),
        })
    }

    // ========================================================================
    // Send Operations
    // ========================================================================

    #[tool(
        description = "Send a message to a Discord channel via a configured webhook. \
                       The webhook must be added first using discord_add_webhook."
    )]
    async fn discord_send_message(
        &self,
        Parameters(params): Parameters<SendMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::send_message(&self.registry, &self.client, params).await
    }

    #[tool(
        description = "Send a formatted release announcement to Discord with version, \
                       headline, change list, and optional download link. Supports rich \
                       embeds (default) or plain text."
    )]
    async fn discord_send_announcement(
        &self,
        Parameters(params): Parameters<SendAnnouncementParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::send_announcement(&self.registry, &self.client, params).await
    }

    // ========================================================================
    // Webhook Management
    // ========================================================================

    #[tool(
        description = "Add or update a Discord webhook configuration. Webhook URLs come \
                       from Discord: Server Settings > Integrations > Webhooks."
    )]
    async fn discord_add_webhook(
        &self,
        Parameters(params): Parameters<AddWebhookParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_webhook(&self.registry, params).await
    }

    #[tool(
        description = "Remove a saved webhook configuration. The webhook on Discord's \
                       side is not affected - only the local registration is removed."
    )]
    async fn discord_remove_webhook(
        &self,
        Parameters(params): Parameters<RemoveWebhookParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::remove_webhook(&self.registry, params).await
    }

    #[tool(
        description = "List all configured Discord webhooks without exposing the full \
                       webhook URLs."
    )]
    async fn discord_list_webhooks(
        &self,
        Parameters(params): Parameters<ListWebhooksParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::list_webhooks(&self.registry, params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for DiscordMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Discord MCP server for webhook messaging. Send plain messages and \
                 formatted release announcements to Discord channels through \
                 pre-registered webhooks, and manage the webhook registrations. \
                 Webhook URLs are stored locally; set DISCORD_MCP_CONFIG_DIR to \
                 override the config directory."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
