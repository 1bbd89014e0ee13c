//! Tests for discord-mcp tool handlers
//!
//! These run the handlers end to end against a registry in a temp config
//! dir. Paths that would reach Discord are only exercised up to the point
//! where the handler returns before dispatch.

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use tempfile::{tempdir, TempDir};

    use super::super::config::DiscordConfig;
    use super::super::dispatch::WebhookClient;
    use super::super::handlers;
    use super::super::params::*;
    use super::super::registry::WebhookRegistry;
    use super::super::types::ResponseFormat;

    use mcp_common::CallToolResult;

    fn setup() -> (TempDir, WebhookRegistry, WebhookClient) {
        let dir = tempdir().unwrap();
        let config = DiscordConfig {
            config_dir: dir.path().to_path_buf(),
        };
        (dir, WebhookRegistry::new(&config), WebhookClient::new())
    }

    fn valid_url(tag: &str) -> String {
        format!(
            "https://discord.com/api/webhooks/123456789012345678/token-{}",
            tag
        )
    }

    /// Extract the single text content item from a tool result
    fn result_text(result: &CallToolResult) -> String {
        let value = serde_json::to_value(result).unwrap();
        value["content"][0]["text"]
            .as_str()
            .expect("tool result should carry text content")
            .to_string()
    }

    async fn add(registry: &WebhookRegistry, name: &str, tag: &str) -> String {
        let result = handlers::add_webhook(
            registry,
            AddWebhookParams {
                name: name.to_string(),
                url: valid_url(tag),
                description: Some(format!("{} feed", name)),
            },
        )
        .await
        .unwrap();
        result_text(&result)
    }

    // ========================================================================
    // send_message
    // ========================================================================

    #[tokio::test]
    async fn test_send_message_empty_registry() {
        let (_dir, registry, client) = setup();

        let result = handlers::send_message(
            &registry,
            &client,
            SendMessageParams {
                webhook_name: "releases".to_string(),
                content: "hello".to_string(),
                username: None,
                avatar_url: None,
                response_format: ResponseFormat::Markdown,
            },
        )
        .await
        .unwrap();

        let text = result_text(&result);
        assert!(text.contains("No webhooks configured"));
        assert!(text.contains("'releases' not found"));
    }

    #[tokio::test]
    async fn test_send_message_unknown_lists_available() {
        let (_dir, registry, client) = setup();
        add(&registry, "general", "a").await;

        let result = handlers::send_message(
            &registry,
            &client,
            SendMessageParams {
                webhook_name: "releases".to_string(),
                content: "hello".to_string(),
                username: None,
                avatar_url: None,
                response_format: ResponseFormat::Markdown,
            },
        )
        .await
        .unwrap();

        let text = result_text(&result);
        assert!(text.contains("Available webhooks: general"));
    }

    #[tokio::test]
    async fn test_send_message_rejects_empty_content() {
        let (_dir, registry, client) = setup();

        let result = handlers::send_message(
            &registry,
            &client,
            SendMessageParams {
                webhook_name: "releases".to_string(),
                content: "   ".to_string(),
                username: None,
                avatar_url: None,
                response_format: ResponseFormat::Markdown,
            },
        )
        .await
        .unwrap();

        assert!(result_text(&result).contains("content must not be empty"));
    }

    #[tokio::test]
    async fn test_send_message_rejects_oversized_content() {
        let (_dir, registry, client) = setup();

        let result = handlers::send_message(
            &registry,
            &client,
            SendMessageParams {
                webhook_name: "releases".to_string(),
                content: "x".repeat(2001),
                username: None,
                avatar_url: None,
                response_format: ResponseFormat::Markdown,
            },
        )
        .await
        .unwrap();

        let text = result_text(&result);
        assert!(text.starts_with("Error:"));
        assert!(text.contains("2000"));
    }

    // ========================================================================
    // send_announcement
    // ========================================================================

    #[tokio::test]
    async fn test_plain_announcement_too_long_rejected_before_dispatch() {
        let (_dir, registry, client) = setup();
        add(&registry, "releases", "a").await;

        // Ten long change entries push the plain text past 2000 characters;
        // the handler must return the length error without attempting the
        // network call (the registered URL points nowhere reachable).
        let changes: Vec<String> = (0..10).map(|i| format!("change {}: {}", i, "x".repeat(220))).collect();

        let result = handlers::send_announcement(
            &registry,
            &client,
            SendAnnouncementParams {
                webhook_name: "releases".to_string(),
                version: "v9.9.9".to_string(),
                headline: "Big release".to_string(),
                changes,
                download_url: None,
                style: Default::default(),
                beta_warning: false,
                use_embed: false,
                embed_color: None,
                thumbnail_url: None,
                footer_text: None,
                username: None,
                response_format: ResponseFormat::Markdown,
            },
        )
        .await
        .unwrap();

        let text = result_text(&result);
        assert!(text.contains("Announcement is too long"));
        assert!(text.contains("2000"));
    }

    #[tokio::test]
    async fn test_announcement_rejects_empty_changes() {
        let (_dir, registry, client) = setup();

        let result = handlers::send_announcement(
            &registry,
            &client,
            SendAnnouncementParams {
                webhook_name: "releases".to_string(),
                version: "v1.0.0".to_string(),
                headline: "Headline".to_string(),
                changes: vec![],
                download_url: None,
                style: Default::default(),
                beta_warning: false,
                use_embed: true,
                embed_color: None,
                thumbnail_url: None,
                footer_text: None,
                username: None,
                response_format: ResponseFormat::Markdown,
            },
        )
        .await
        .unwrap();

        assert!(result_text(&result).contains("between 1 and 10"));
    }

    // ========================================================================
    // add_webhook / remove_webhook
    // ========================================================================

    #[tokio::test]
    async fn test_add_then_update_wording() {
        let (_dir, registry, _client) = setup();

        let text = add(&registry, "releases", "a").await;
        assert!(text.contains("'releases' added successfully"));

        let text = add(&registry, "releases", "b").await;
        assert!(text.contains("'releases' updated successfully"));
    }

    #[tokio::test]
    async fn test_add_normalizes_name() {
        let (_dir, registry, _client) = setup();

        let text = add(&registry, "My Hook", "a").await;
        assert!(text.contains("'my_hook' added successfully"));
        assert_eq!(registry.get("my_hook").await, Some(valid_url("a")));
    }

    #[tokio::test]
    async fn test_add_rejects_bad_url() {
        let (_dir, registry, _client) = setup();

        let result = handlers::add_webhook(
            &registry,
            AddWebhookParams {
                name: "releases".to_string(),
                url: "http://discord.com/api/webhooks/123456789012345678/token".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();

        let text = result_text(&result);
        assert!(text.contains("Invalid Discord webhook URL"));
        assert!(registry.get("releases").await.is_none());
    }

    #[tokio::test]
    async fn test_add_rejects_bad_name() {
        let (_dir, registry, _client) = setup();

        let result = handlers::add_webhook(
            &registry,
            AddWebhookParams {
                name: "bad!name".to_string(),
                url: valid_url("a"),
                description: None,
            },
        )
        .await
        .unwrap();

        assert!(result_text(&result).contains("alphanumeric"));
    }

    #[tokio::test]
    async fn test_remove_lifecycle() {
        let (_dir, registry, _client) = setup();
        add(&registry, "releases", "a").await;

        let result = handlers::remove_webhook(
            &registry,
            RemoveWebhookParams {
                name: "Releases".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(result_text(&result).contains("removed successfully"));
        assert!(registry.get("releases").await.is_none());

        let result = handlers::remove_webhook(
            &registry,
            RemoveWebhookParams {
                name: "releases".to_string(),
            },
        )
        .await
        .unwrap();
        assert!(result_text(&result).contains("not found"));
    }

    #[tokio::test]
    async fn test_remove_not_found_lists_names() {
        let (_dir, registry, _client) = setup();
        add(&registry, "general", "a").await;

        let result = handlers::remove_webhook(
            &registry,
            RemoveWebhookParams {
                name: "releases".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(result_text(&result).contains("Available webhooks: general"));
    }

    // ========================================================================
    // list_webhooks
    // ========================================================================

    #[tokio::test]
    async fn test_list_empty() {
        let (_dir, registry, _client) = setup();

        let result = handlers::list_webhooks(
            &registry,
            ListWebhooksParams {
                response_format: ResponseFormat::Markdown,
            },
        )
        .await
        .unwrap();

        assert!(result_text(&result).contains("No webhooks configured"));
    }

    #[tokio::test]
    async fn test_list_markdown_redacts_urls() {
        let (_dir, registry, _client) = setup();
        add(&registry, "releases", "abcdefgh").await;

        let result = handlers::list_webhooks(
            &registry,
            ListWebhooksParams {
                response_format: ResponseFormat::Markdown,
            },
        )
        .await
        .unwrap();

        let text = result_text(&result);
        assert!(text.contains("# Configured Discord Webhooks"));
        assert!(text.contains("## releases"));
        assert!(text.contains("releases feed"));
        // Only the last 8 characters of the URL appear
        assert!(text.contains("...abcdefgh"));
        assert!(!text.contains("discord.com"));
    }

    #[tokio::test]
    async fn test_list_json_redacts_urls() {
        let (_dir, registry, _client) = setup();
        add(&registry, "releases", "abcdefgh").await;

        let result = handlers::list_webhooks(
            &registry,
            ListWebhooksParams {
                response_format: ResponseFormat::Json,
            },
        )
        .await
        .unwrap();

        let text = result_text(&result);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["releases"]["url_hint"], "...abcdefgh");
        assert_eq!(parsed["releases"]["description"], "releases feed");
        assert!(parsed["releases"]["added_at"].is_string());
        // The full URL never leaves the registry
        assert!(!text.contains("discord.com"));
        assert!(parsed["releases"].get("url").is_none());
    }

    #[tokio::test]
    async fn test_list_json_preserves_insertion_order() {
        let (_dir, registry, _client) = setup();
        add(&registry, "zeta", "a").await;
        add(&registry, "alpha", "b").await;

        let result = handlers::list_webhooks(
            &registry,
            ListWebhooksParams {
                response_format: ResponseFormat::Json,
            },
        )
        .await
        .unwrap();

        let text = result_text(&result);
        let zeta_pos = text.find("zeta").unwrap();
        let alpha_pos = text.find("alpha").unwrap();
        assert!(zeta_pos < alpha_pos);
    }
}
