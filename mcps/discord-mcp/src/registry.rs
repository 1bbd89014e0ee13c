//! Webhook registry - JSON-file-backed name to endpoint store
//!
//! The whole document is the unit of read and write. A missing, unreadable,
//! or malformed document reads as an empty registry; the next save rewrites
//! it wholesale. Read-modify-write cycles within this process are serialized
//! behind an async mutex; concurrent writers in other processes remain
//! last-writer-wins.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::Mutex;

use crate::config::DiscordConfig;
use crate::types::WebhookEntry;

/// Webhook registry backed by a single JSON document
#[derive(Clone)]
pub struct WebhookRegistry {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl WebhookRegistry {
    pub fn new(config: &DiscordConfig) -> Self {
        Self {
            path: config.webhooks_path(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the full registry document
    ///
    /// Missing file means no webhooks configured. A document that cannot be
    /// read or parsed is treated the same way - the registry self-heals on
    /// the next save.
    pub async fn load(&self) -> IndexMap<String, WebhookEntry> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return IndexMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read webhook registry");
                return IndexMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(webhooks) => webhooks,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed webhook registry, treating as empty");
                IndexMap::new()
            }
        }
    }

    /// Persist the full registry document
    ///
    /// Writes to a sibling temp file and renames it over the document so a
    /// crash mid-write cannot leave a truncated registry behind.
    async fn save(&self, webhooks: &IndexMap<String, WebhookEntry>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(webhooks)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }

    /// Get a webhook URL by name (case-insensitive)
    pub async fn get(&self, name: &str) -> Option<String> {
        let webhooks = self.load().await;
        webhooks.get(&name.to_lowercase()).map(|e| e.url.clone())
    }

    /// Insert or overwrite a webhook entry
    ///
    /// `name` must already be normalized (see `validate::webhook_name`).
    /// Returns true when an entry with that name existed before.
    pub async fn upsert(
        &self,
        name: &str,
        url: &str,
        description: Option<String>,
    ) -> anyhow::Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut webhooks = self.load().await;
        let existed = webhooks
            .insert(
                name.to_lowercase(),
                WebhookEntry {
                    url: url.to_string(),
                    description,
                    added_at: Utc::now().to_rfc3339(),
                },
            )
            .is_some();
        self.save(&webhooks).await?;

        Ok(existed)
    }

    /// Delete a webhook entry by name (case-insensitive)
    ///
    /// Returns false when no entry with that name exists.
    pub async fn remove(&self, name: &str) -> anyhow::Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut webhooks = self.load().await;
        // shift_remove keeps the document order of the remaining entries
        let removed = webhooks.shift_remove(&name.to_lowercase()).is_some();
        if removed {
            self.save(&webhooks).await?;
        }

        Ok(removed)
    }

    /// All entries in document order
    pub async fn list(&self) -> IndexMap<String, WebhookEntry> {
        self.load().await
    }
}
