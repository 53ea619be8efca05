//! Bot API client for authenticated operations.
//!
//! [`BotClient`] sends previously built message payloads to users or
//! channels and manages attachments. Every operation performs exactly one
//! HTTP request through the injected [`Transport`], attaching the caller's
//! bearer token. Calling a send operation twice sends twice; there is no
//! idempotence guarantee and no delivery guarantee beyond the remote
//! service's.

use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::content::MessagePayload;
use crate::error::{ApiError, HttpError, ParseError};
use crate::transport::{FetchRequest, FetchResponse, ReqwestTransport, Transport};

mod attachment;

pub use attachment::{FileInfo, UPLOAD_BOUNDARY};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Bot identifier assigned at bot registration.
///
/// # Examples
///
/// ```
/// use works_bot_sdk::client::BotId;
///
/// let bot = BotId::new("1234567");
/// assert_eq!(bot.as_str(), "1234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BotId(String);

impl BotId {
    /// Create a new bot ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member account identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a new user ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Talk room (channel) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(String);

impl ChannelId {
    /// Create a new channel ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Durable attachment reference returned by upload slot creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(String);

impl FileId {
    /// Create a new file ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for bot API client behavior.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bot API base URL (overridable for tests).
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://www.worksapis.com/v1.0".to_string(),
        }
    }
}

impl ClientConfig {
    /// Set the bot API base URL.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Client for the bot messaging and attachment endpoints.
///
/// # Examples
///
/// ```no_run
/// use works_bot_sdk::client::{BotClient, BotId, UserId};
/// use works_bot_sdk::content::MessagePayload;
///
/// # async fn example(access_token: &str) -> Result<(), Box<dyn std::error::Error>> {
/// let client = BotClient::new()?;
/// let payload = MessagePayload::text("hello");
/// client
///     .send_to_user(&UserId::new("user@example"), &payload, &BotId::new("123"), access_token)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BotClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl BotClient {
    /// Create a client with the production transport and default endpoints.
    pub fn new() -> Result<Self, HttpError> {
        Ok(Self::with_transport(
            Arc::new(ReqwestTransport::new()?),
            ClientConfig::default(),
        ))
    }

    /// Create a client over an injected transport.
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_base_url)
    }

    /// Send a message payload to a user.
    ///
    /// Returns the raw response envelope; the side effect is the outbound
    /// message delivered by the remote service.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on any non-2xx status.
    pub async fn send_to_user(
        &self,
        user_id: &UserId,
        payload: &MessagePayload,
        bot_id: &BotId,
        access_token: &str,
    ) -> Result<FetchResponse, ApiError> {
        let url = self.api_url(&format!("/bots/{bot_id}/users/{user_id}/messages"));
        self.post_message(url, payload, access_token).await
    }

    /// Send a message payload to a channel (talk room).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on any non-2xx status.
    pub async fn send_to_channel(
        &self,
        channel_id: &ChannelId,
        payload: &MessagePayload,
        bot_id: &BotId,
        access_token: &str,
    ) -> Result<FetchResponse, ApiError> {
        let url = self.api_url(&format!("/bots/{bot_id}/channels/{channel_id}/messages"));
        self.post_message(url, payload, access_token).await
    }

    async fn post_message(
        &self,
        url: String,
        payload: &MessagePayload,
        access_token: &str,
    ) -> Result<FetchResponse, ApiError> {
        let body = serde_json::to_vec(payload).map_err(ParseError::from)?;
        let request = FetchRequest::post(&url)
            .bearer(access_token)
            .content_type(JSON_CONTENT_TYPE)
            .body(Bytes::from(body));

        tracing::debug!(%url, "sending message");
        Ok(self.transport.fetch(request).await?)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
