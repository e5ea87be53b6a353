//! HTTP client for gcsim's shortcut tables

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::application::ports::outbound::{ShortcutError, ShortcutKind, ShortcutSourcePort};

/// Fetches the raw shortcut table sources over HTTP
pub struct ShortcutClient {
    client: Client,
    character_url: String,
    weapon_url: String,
}

impl ShortcutClient {
    pub fn new(
        character_url: impl Into<String>,
        weapon_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ShortcutError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ShortcutError::Client(e.to_string()))?;

        Ok(Self {
            client,
            character_url: character_url.into(),
            weapon_url: weapon_url.into(),
        })
    }

    pub fn url(&self, kind: ShortcutKind) -> &str {
        match kind {
            ShortcutKind::Characters => &self.character_url,
            ShortcutKind::Weapons => &self.weapon_url,
        }
    }

    /// GET a URL and return its body as text
    pub async fn get_text(&self, url: &str) -> Result<String, ShortcutError> {
        let request_error = |e: reqwest::Error| ShortcutError::Request {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        if !response.status().is_success() {
            return Err(ShortcutError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[async_trait]
impl ShortcutSourcePort for ShortcutClient {
    async fn fetch(&self, kind: ShortcutKind) -> Result<String, ShortcutError> {
        self.get_text(self.url(kind)).await
    }
}
